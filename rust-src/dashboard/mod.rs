//! Dashboard shell: session state and the interactive application.

mod app;
mod state;

#[allow(unused_imports)]
pub use self::{
    app::{max_offset, DashboardApp},
    state::{DashboardState, Tab},
};
