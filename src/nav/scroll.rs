//! Scroll position owner with scoped listener registration.
//!
//! Scroll requests are coalesced: `scroll_to` only records the latest offset,
//! and `flush` (called once per rendered frame, like a requestAnimationFrame
//! callback) hands it to the listeners if it changed since the last flush.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut(f64)>;

pub struct ScrollSource {
    offset: f64,
    dispatched: Option<f64>,
    next_id: u32,
    listeners: Vec<(u32, Listener)>,
    /// Ids whose guards were dropped while the source was borrowed.
    retired: Rc<RefCell<Vec<u32>>>,
}

impl Default for ScrollSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSource {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            dispatched: None,
            next_id: 0,
            listeners: Vec::new(),
            retired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Register `listener`; it stays registered for as long as the returned
    /// guard is alive.
    pub fn subscribe(
        source: &Rc<RefCell<Self>>,
        listener: impl FnMut(f64) + 'static,
    ) -> ScrollSubscription {
        let mut s = source.borrow_mut();
        let id = s.next_id;
        s.next_id += 1;
        s.listeners.push((id, Box::new(listener)));
        // A fresh listener must see the current position on the next flush.
        s.dispatched = None;
        ScrollSubscription {
            source: Rc::downgrade(source),
            retired: s.retired.clone(),
            id,
        }
    }

    fn unsubscribe(&mut self, id: u32) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    fn sweep_retired(&mut self) {
        let retired = std::mem::take(&mut *self.retired.borrow_mut());
        if !retired.is_empty() {
            self.listeners.retain(|(id, _)| !retired.contains(id));
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Request a new position. Negative values clamp to the top.
    pub fn scroll_to(&mut self, offset: f64) {
        self.offset = offset.max(0.0);
    }

    /// Dispatch the pending offset. Returns true if listeners were called.
    pub fn flush(&mut self) -> bool {
        self.sweep_retired();
        if self.dispatched == Some(self.offset) {
            return false;
        }
        self.dispatched = Some(self.offset);
        let offset = self.offset;
        for (_, listener) in self.listeners.iter_mut() {
            listener(offset);
        }
        self.sweep_retired();
        true
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Keeps a scroll listener registered; dropping it unregisters.
pub struct ScrollSubscription {
    source: Weak<RefCell<ScrollSource>>,
    retired: Rc<RefCell<Vec<u32>>>,
    id: u32,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let Some(source) = self.source.upgrade() else {
            return;
        };
        match source.try_borrow_mut() {
            Ok(mut s) => s.unsubscribe(self.id),
            // Dropped from inside a listener: removed once the flush ends.
            Err(_) => self.retired.borrow_mut().push(self.id),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(f64) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |o| sink.borrow_mut().push(o))
    }

    #[test]
    fn flush_dispatches_latest_only() {
        let source = ScrollSource::shared();
        let (seen, f) = recorder();
        let _sub = ScrollSource::subscribe(&source, f);

        {
            let mut s = source.borrow_mut();
            s.scroll_to(10.0);
            s.scroll_to(20.0);
            s.scroll_to(30.0);
            assert!(s.flush());
        }
        assert_eq!(*seen.borrow(), vec![30.0]);
    }

    #[test]
    fn flush_without_change_is_noop() {
        let source = ScrollSource::shared();
        let (seen, f) = recorder();
        let _sub = ScrollSource::subscribe(&source, f);

        let mut s = source.borrow_mut();
        s.scroll_to(5.0);
        assert!(s.flush());
        assert!(!s.flush());
        s.scroll_to(5.0);
        assert!(!s.flush());
        drop(s);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn new_subscriber_gets_current_offset() {
        let source = ScrollSource::shared();
        source.borrow_mut().scroll_to(42.0);
        source.borrow_mut().flush();

        let (seen, f) = recorder();
        let _sub = ScrollSource::subscribe(&source, f);
        source.borrow_mut().flush();
        assert_eq!(*seen.borrow(), vec![42.0]);
    }

    #[test]
    fn drop_unsubscribes() {
        let source = ScrollSource::shared();
        let (seen, f) = recorder();
        let sub = ScrollSource::subscribe(&source, f);
        assert_eq!(source.borrow().listener_count(), 1);

        drop(sub);
        assert_eq!(source.borrow().listener_count(), 0);

        source.borrow_mut().scroll_to(100.0);
        source.borrow_mut().flush();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn drop_inside_listener_unsubscribes_after_flush() {
        let source = ScrollSource::shared();
        let slot: Rc<RefCell<Option<ScrollSubscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(RefCell::new(0));

        let sub = ScrollSource::subscribe(&source, {
            let slot = slot.clone();
            let calls = calls.clone();
            move |_| {
                *calls.borrow_mut() += 1;
                slot.borrow_mut().take();
            }
        });
        *slot.borrow_mut() = Some(sub);

        source.borrow_mut().scroll_to(10.0);
        assert!(source.borrow_mut().flush());
        assert_eq!(source.borrow().listener_count(), 0);

        source.borrow_mut().scroll_to(20.0);
        source.borrow_mut().flush();
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn drop_after_source_gone_is_harmless() {
        let source = ScrollSource::shared();
        let sub = ScrollSource::subscribe(&source, |_| {});
        drop(source);
        drop(sub);
    }

    #[test]
    fn scroll_clamps_at_top() {
        let mut s = ScrollSource::new();
        s.scroll_to(-30.0);
        assert_eq!(s.offset(), 0.0);
        s.scroll_to(25.0);
        assert_eq!(s.offset(), 25.0);
    }
}
