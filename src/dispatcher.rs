//! Key-down dispatch with explicit listener lifecycle
//!
//! A [`KeyDispatcher`] plays the role of the window: hosts feed it every
//! key-down and it hands the event to each attached listener in attach order.

use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::surface::Page;

/// Receives key-downs from a [`KeyDispatcher`]
pub trait KeyListener {
    /// Returns true when the listener consumed the key and the host's
    /// default handling must be skipped.
    fn on_key_down(&mut self, key: &KeyEvent, page: &mut dyn Page) -> bool;

    /// Called once per host loop iteration to deliver deferred work
    fn on_idle(&mut self, _page: &mut dyn Page) {}

    /// Block until deferred work is done or `timeout` elapses
    fn flush(&mut self, _page: &mut dyn Page, _timeout: Duration) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub struct KeyDispatcher {
    listeners: Vec<(ListenerId, Box<dyn KeyListener>)>,
    next_id: u64,
}

impl KeyDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, listener: Box<dyn KeyListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        log::debug!("Attached key listener {:?}", id);
        id
    }

    /// Remove a listener, handing it back to the caller
    pub fn detach(&mut self, id: ListenerId) -> Option<Box<dyn KeyListener>> {
        let index = self.listeners.iter().position(|(lid, _)| *lid == id)?;
        log::debug!("Detached key listener {:?}", id);
        Some(self.listeners.remove(index).1)
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver a key-down to every listener; true if any consumed it
    pub fn dispatch(&mut self, key: &KeyEvent, page: &mut dyn Page) -> bool {
        let mut handled = false;
        for (_, listener) in self.listeners.iter_mut() {
            handled |= listener.on_key_down(key, page);
        }
        handled
    }

    pub fn poll(&mut self, page: &mut dyn Page) {
        for (_, listener) in self.listeners.iter_mut() {
            listener.on_idle(page);
        }
    }

    pub fn flush(&mut self, page: &mut dyn Page, timeout: Duration) {
        for (_, listener) in self.listeners.iter_mut() {
            listener.flush(page, timeout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{FakePage, ctrl, key};
    use crossterm::event::KeyCode;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every key it sees and consumes those matching `consume`
    struct Recorder {
        seen: Rc<RefCell<Vec<KeyCode>>>,
        idle_calls: Rc<RefCell<usize>>,
        consume: KeyCode,
    }

    impl KeyListener for Recorder {
        fn on_key_down(&mut self, key: &KeyEvent, _page: &mut dyn Page) -> bool {
            self.seen.borrow_mut().push(key.code);
            key.code == self.consume
        }

        fn on_idle(&mut self, _page: &mut dyn Page) {
            *self.idle_calls.borrow_mut() += 1;
        }
    }

    fn recorder(consume: KeyCode) -> (Recorder, Rc<RefCell<Vec<KeyCode>>>, Rc<RefCell<usize>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let idle_calls = Rc::new(RefCell::new(0));
        (
            Recorder {
                seen: seen.clone(),
                idle_calls: idle_calls.clone(),
                consume,
            },
            seen,
            idle_calls,
        )
    }

    #[test]
    fn test_every_listener_sees_the_event() {
        let mut dispatcher = KeyDispatcher::new();
        let mut page = FakePage::empty();
        let (a, seen_a, _) = recorder(KeyCode::Char('c'));
        let (b, seen_b, _) = recorder(KeyCode::Enter);
        dispatcher.attach(Box::new(a));
        dispatcher.attach(Box::new(b));

        assert!(dispatcher.dispatch(&ctrl('c'), &mut page));
        assert!(!dispatcher.dispatch(&key(KeyCode::Tab), &mut page));

        assert_eq!(*seen_a.borrow(), vec![KeyCode::Char('c'), KeyCode::Tab]);
        assert_eq!(*seen_b.borrow(), vec![KeyCode::Char('c'), KeyCode::Tab]);
    }

    #[test]
    fn test_detached_listener_receives_nothing() {
        let mut dispatcher = KeyDispatcher::new();
        let mut page = FakePage::empty();
        let (listener, seen, idle) = recorder(KeyCode::Char('c'));
        let id = dispatcher.attach(Box::new(listener));

        assert!(dispatcher.detach(id).is_some());
        assert!(!dispatcher.is_attached(id));
        assert!(dispatcher.is_empty());

        assert!(!dispatcher.dispatch(&ctrl('c'), &mut page));
        dispatcher.poll(&mut page);
        assert!(seen.borrow().is_empty());
        assert_eq!(*idle.borrow(), 0);
    }

    #[test]
    fn test_detach_unknown_id_is_none() {
        let mut dispatcher = KeyDispatcher::new();
        let (listener, _, _) = recorder(KeyCode::Enter);
        let id = dispatcher.attach(Box::new(listener));
        dispatcher.detach(id);
        assert!(dispatcher.detach(id).is_none());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut dispatcher = KeyDispatcher::new();
        let (a, _, _) = recorder(KeyCode::Enter);
        let (b, _, _) = recorder(KeyCode::Enter);
        let first = dispatcher.attach(Box::new(a));
        dispatcher.detach(first);
        let second = dispatcher.attach(Box::new(b));
        assert_ne!(first, second);
        assert_eq!(dispatcher.len(), 1);
    }

    #[test]
    fn test_poll_reaches_listeners() {
        let mut dispatcher = KeyDispatcher::new();
        let mut page = FakePage::empty();
        let (listener, _, idle) = recorder(KeyCode::Enter);
        dispatcher.attach(Box::new(listener));

        dispatcher.poll(&mut page);
        dispatcher.poll(&mut page);

        assert_eq!(*idle.borrow(), 2);
    }
}
