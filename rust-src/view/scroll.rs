//! Global vertical scroll offset and its listener registry.
//!
//! The dashboard owns one `ScrollBus`. Views subscribe to it and receive
//! every offset change; the returned `Subscription` unregisters the
//! listener when dropped, so a view can never leave a stale listener
//! behind after it is unmounted.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::trace;


type Listener = Box<dyn Fn(u32)>;


/// Vertical scroll position in pixels plus the listeners observing it.
#[derive(Default)]
pub struct ScrollBus {
    offset: Cell<u32>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}


impl ScrollBus {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Current offset in pixels.
    pub fn offset(&self) -> u32 {
        self.offset.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Register `listener` for offset changes.
    ///
    /// Listeners must not subscribe or unsubscribe while being notified.
    pub fn subscribe(self: &Rc<Self>, listener: impl Fn(u32) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        trace!(id, "scroll listener attached");

        Subscription {
            bus: Rc::downgrade(self),
            id,
        }
    }

    /// Move to `offset` and notify listeners if it changed.
    pub fn scroll_to(&self, offset: u32) {
        if offset == self.offset.get() {
            return;
        }
        self.offset.set(offset);
        for (_, listener) in self.listeners.borrow().iter() {
            listener(offset);
        }
    }

    /// Move by `delta` pixels, saturating at zero and at `max`.
    pub fn scroll_by(&self, delta: i64, max: u32) {
        let target = (i64::from(self.offset.get()) + delta).clamp(0, i64::from(max));
        self.scroll_to(target as u32);
    }

    /// Jump back to the top without notifying anyone.
    ///
    /// Used when the page content is swapped; the next view mounts at the
    /// top and recomputes on the following scroll event.
    pub fn reset(&self) {
        self.offset.set(0);
    }

    fn unsubscribe(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
        trace!(id, "scroll listener detached");
    }
}


/// Registration handle; dropping it detaches the listener.
pub struct Subscription {
    bus: Weak<ScrollBus>,
    id: u64,
}


impl Subscription {
    /// Whether the bus is still alive and holds this listener.
    pub fn is_active(&self) -> bool {
        let Some(bus) = self.bus.upgrade() else {
            return false;
        };
        let listeners = bus.listeners.borrow();
        listeners.iter().any(|(id, _)| *id == self.id)
    }
}


impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.unsubscribe(self.id);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_notify() {
        let bus = ScrollBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = bus.subscribe(move |offset| sink.borrow_mut().push(offset));

        bus.scroll_to(30);
        bus.scroll_to(30);
        bus.scroll_to(90);

        assert_eq!(*seen.borrow(), vec![30, 90]);
        assert_eq!(bus.offset(), 90);
    }

    #[test]
    fn test_drop_detaches_listener() {
        let bus = ScrollBus::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let sub = bus.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(bus.listener_count(), 1);
        assert!(sub.is_active());

        drop(sub);
        assert_eq!(bus.listener_count(), 0);

        bus.scroll_to(300);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_subscription_outliving_bus() {
        let bus = ScrollBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        assert!(!sub.is_active());
        drop(sub);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let bus = ScrollBus::new();
        bus.scroll_by(-30, 600);
        assert_eq!(bus.offset(), 0);

        bus.scroll_by(90, 600);
        assert_eq!(bus.offset(), 90);

        bus.scroll_by(10_000, 600);
        assert_eq!(bus.offset(), 600);
    }

    #[test]
    fn test_reset_is_silent() {
        let bus = ScrollBus::new();
        bus.scroll_to(120);

        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let _sub = bus.subscribe(move |_| counter.set(counter.get() + 1));

        bus.reset();
        assert_eq!(bus.offset(), 0);
        assert_eq!(hits.get(), 0);
    }
}
