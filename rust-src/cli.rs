//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use crate::commands::dump::DumpTarget;
use crate::config::{DashboardConfig, DEFAULT_RECORD_COUNT, DEFAULT_TICK_RATE_MS};
use crate::logging::{self, Fallback};


/// findash - terminal dashboard for synthetic financial records
#[derive(Parser)]
#[command(name = "findash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Append diagnostic logs to this file
    #[arg(long, global = true, env = "FINDASH_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (tables and charts)
    Dashboard {
        #[command(flatten)]
        data: DataArgs,

        /// Event loop tick in milliseconds
        #[arg(long, env = "FINDASH_TICK_MS", default_value_t = DEFAULT_TICK_RATE_MS)]
        tick_ms: u64,
    },

    /// Print dashboard data as JSON
    Dump {
        /// Data to print
        #[arg(value_enum)]
        target: DumpTarget,

        #[command(flatten)]
        data: DataArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}


/// Options shared by every command that generates records.
#[derive(Args)]
struct DataArgs {
    /// Number of records to generate
    #[arg(short = 'n', long, env = "FINDASH_RECORDS", default_value_t = DEFAULT_RECORD_COUNT)]
    records: usize,

    /// Seed for reproducible record values
    #[arg(long, env = "FINDASH_SEED")]
    seed: Option<u64>,
}


impl DataArgs {
    fn into_config(self, tick_rate_ms: u64) -> DashboardConfig {
        DashboardConfig {
            record_count: self.records,
            seed: self.seed,
            tick_rate_ms,
        }
    }
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = cli.log_file.as_deref();

    match cli.command {
        Some(Commands::Dashboard { data, tick_ms }) => {
            logging::init(log_file, Fallback::Discard)?;
            commands::dashboard::run(&data.into_config(tick_ms))?;
        }
        Some(Commands::Dump { target, data, pretty }) => {
            logging::init(log_file, Fallback::Stderr)?;
            commands::dump::run(target, &data.into_config(DEFAULT_TICK_RATE_MS), pretty)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dump_defaults() {
        let cli = Cli::try_parse_from(["findash", "dump", "log"]).unwrap();
        match cli.command {
            Some(Commands::Dump { target, data, pretty }) => {
                assert_eq!(target, DumpTarget::Log);
                assert!(!pretty);
                let config = data.into_config(DEFAULT_TICK_RATE_MS);
                assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
            }
            _ => panic!("expected dump command"),
        }
    }

    #[test]
    fn test_parse_dashboard_flags() {
        let cli = Cli::try_parse_from([
            "findash", "dashboard", "-n", "42", "--seed", "9", "--tick-ms", "50",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Dashboard { data, tick_ms }) => {
                let config = data.into_config(tick_ms);
                assert_eq!(
                    config,
                    DashboardConfig {
                        record_count: 42,
                        seed: Some(9),
                        tick_rate_ms: 50,
                    }
                );
            }
            _ => panic!("expected dashboard command"),
        }
    }

    #[test]
    fn test_rejects_negative_count() {
        assert!(Cli::try_parse_from(["findash", "dump", "table1", "--records=-5"]).is_err());
    }
}
