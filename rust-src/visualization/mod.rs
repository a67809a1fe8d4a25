//! Visualization layer: ratatui rendering for the dashboard.

mod charts;
mod dashboard;
mod format;
mod table;

#[allow(unused_imports)]
pub use self::{
    charts::{bar_width, render_charts},
    dashboard::{render_dashboard, tab_at, DashboardLayout},
    format::format_number,
    table::render_table,
};
