//! Terminal runtime for the interactive dashboard.

mod terminal;

pub use terminal::{init_terminal, restore_terminal, run_event_loop};
