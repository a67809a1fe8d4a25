//! Incremental-reveal table view.
//!
//! A mounted view shows the first `visible_count` rows of its dataset.
//! The count starts at `INITIAL_VISIBLE_ROWS` and grows with the global
//! scroll offset: every `ROW_HEIGHT_PX` scrolled reveals one more row,
//! capped at the dataset length.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::config::{INITIAL_VISIBLE_ROWS, ROW_HEIGHT_PX};
use crate::models::{FinancialRecord, SharedRecords};
use crate::view::{ScrollBus, Subscription};


/// Rows revealed before the first scroll event.
pub fn initial_visible_count(len: usize) -> usize {
    INITIAL_VISIBLE_ROWS.min(len)
}


/// Rows revealed at scroll `offset` for a dataset of `len` rows.
pub fn visible_count_for(offset: u32, len: usize) -> usize {
    ((offset / ROW_HEIGHT_PX) as usize + INITIAL_VISIBLE_ROWS).min(len)
}


/// First row inside the viewport at scroll `offset`.
pub fn first_row_for(offset: u32, visible: usize) -> usize {
    ((offset / ROW_HEIGHT_PX) as usize).min(visible.saturating_sub(1))
}


/// A table bound to one dataset and one scroll listener.
pub struct TableView {
    data: SharedRecords,
    visible_count: Rc<Cell<usize>>,
    subscription: Option<Subscription>,
}


impl TableView {
    /// Mount on `data` and start listening to `bus`.
    pub fn mount(bus: &Rc<ScrollBus>, data: SharedRecords) -> Self {
        let visible_count = Rc::new(Cell::new(initial_visible_count(data.len())));
        let subscription = Some(listen(bus, data.len(), &visible_count));
        debug!(rows = data.len(), visible = visible_count.get(), "table view mounted");

        Self {
            data,
            visible_count,
            subscription,
        }
    }

    /// Swap to another dataset, resetting to the top window.
    ///
    /// The old listener is released before the new one is registered.
    pub fn set_data(&mut self, bus: &Rc<ScrollBus>, data: SharedRecords) {
        if Rc::ptr_eq(&self.data, &data) {
            return;
        }

        self.subscription = None;
        self.visible_count = Rc::new(Cell::new(initial_visible_count(data.len())));
        self.subscription = Some(listen(bus, data.len(), &self.visible_count));
        debug!(rows = data.len(), "table view dataset changed");
        self.data = data;
    }

    pub fn data(&self) -> &SharedRecords {
        &self.data
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count.get()
    }

    /// Revealed prefix of the dataset.
    pub fn visible_rows(&self) -> &[Rc<FinancialRecord>] {
        &self.data[..self.visible_count()]
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.as_ref().map_or(false, Subscription::is_active)
    }
}


impl Drop for TableView {
    fn drop(&mut self) {
        debug!(rows = self.data.len(), "table view unmounted");
    }
}


fn listen(bus: &Rc<ScrollBus>, len: usize, visible_count: &Rc<Cell<usize>>) -> Subscription {
    let visible_count = Rc::clone(visible_count);
    bus.subscribe(move |offset| visible_count.set(visible_count_for(offset, len)))
}
