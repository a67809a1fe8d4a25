//! Dump command - print dashboard data as JSON.

use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use crate::charts::ChartSpec;
use crate::config::DashboardConfig;
use crate::dashboard::DashboardState;
use crate::data::source_from_seed;


/// Which part of the dashboard data to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpTarget {
    /// Generated records
    Table1,
    /// Records after the mutation pass
    Table2,
    /// Before/after pairs of mutated rows
    Log,
    /// Line and bar chart series
    Charts,
}


#[derive(Serialize)]
struct ChartsDump<'a> {
    line: &'a ChartSpec,
    bar: &'a ChartSpec,
}


/// Run the dump command.
pub fn run(target: DumpTarget, config: &DashboardConfig, pretty: bool) -> Result<()> {
    config.validate()?;

    let mut rng = source_from_seed(config.seed);
    let state = DashboardState::build(config.record_count, &mut rng);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_target(&mut out, &state, target, pretty)?;
    writeln!(out)?;

    info!(?target, "dump written");
    Ok(())
}


/// Serialize `target` from `state` into `out`.
pub fn write_target<W: Write>(
    out: &mut W,
    state: &DashboardState,
    target: DumpTarget,
    pretty: bool,
) -> serde_json::Result<()> {
    match target {
        DumpTarget::Table1 => write_json(out, &*state.primary, pretty),
        DumpTarget::Table2 => write_json(out, &*state.modified, pretty),
        DumpTarget::Log => write_json(out, &state.mutation_log, pretty),
        DumpTarget::Charts => write_json(
            out,
            &ChartsDump {
                line: &state.line_chart,
                bar: &state.bar_chart,
            },
            pretty,
        ),
    }
}


fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    pretty: bool,
) -> serde_json::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(out, value)
    } else {
        serde_json::to_writer(out, value)
    }
}
