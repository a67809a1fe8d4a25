//! Interactive dashboard command.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::DashboardConfig;
use crate::dashboard::{DashboardApp, DashboardState};
use crate::data::source_from_seed;
use crate::tui::{init_terminal, restore_terminal, run_event_loop};


/// Run the dashboard command.
pub fn run(config: &DashboardConfig) -> Result<()> {
    config.validate()?;

    let mut rng = source_from_seed(config.seed);
    let state = DashboardState::build(config.record_count, &mut rng);
    let mut app = DashboardApp::new(state);

    let mut terminal = init_terminal().context("Failed to initialise terminal")?;

    // Restore terminal regardless of result
    let result = run_event_loop(&mut terminal, &mut app, config.tick_rate());
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;
    result.context("Dashboard event loop failed")?;

    info!("dashboard closed");
    Ok(())
}
