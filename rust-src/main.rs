//! findash - terminal dashboard for synthetic financial records.
//!
//! Two scrollable tables (generated and mutated records) and two charts.

mod charts;
mod cli;
mod commands;
mod config;
mod dashboard;
mod data;
mod logging;
mod models;
mod tui;
mod view;
mod visualization;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
