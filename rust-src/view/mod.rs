//! View state: the scroll bus and the incremental table view.

mod scroll;
mod table_view;

#[allow(unused_imports)]
pub use self::{
    scroll::{ScrollBus, Subscription},
    table_view::{first_row_for, initial_visible_count, visible_count_for, TableView},
};
