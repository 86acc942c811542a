//! Single-subscriber state store.
//!
//! The store owns the authoritative [`SliderState`] and applies pure
//! transition functions to it. After every mutation it synchronously
//! invokes its one registered listener with the new and previous state.
//! There is no queuing, batching or diffing: one `set_state` call, one
//! notification, before `set_state` returns.
//!
//! One listener slot is a deliberate constraint, not an oversight: the
//! controller is the only intended subscriber, and registering a new
//! handler silently replaces the old one.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::types::{SliderState, StatePatch};

type Listener = Rc<dyn Fn(&SliderState, &SliderState)>;

struct StoreInner {
    state: SliderState,
    listener: Option<Listener>,
}

/// Handle to the slider's state store.
///
/// Cloning the handle shares the same store. Callbacks that need to reach
/// back into the store hold a [`WeakStore`] instead, so the store is not
/// kept alive by its own listener.
#[derive(Clone)]
pub struct Store {
    inner: Rc<RefCell<StoreInner>>,
}

impl Store {
    /// Create a store owning `initial`.
    pub fn new(initial: SliderState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state: initial,
                listener: None,
            })),
        }
    }

    /// Snapshot of the current state.
    pub fn get_state(&self) -> SliderState {
        self.inner.borrow().state
    }

    /// Apply a transition and notify the listener.
    ///
    /// `transition` receives a snapshot of the current state and returns a
    /// patch; the patch is shallow-merged and the listener is invoked with
    /// `(new, prev)` before this call returns. The internal borrow is
    /// released first, so the listener may call `set_state` again.
    pub fn set_state(&self, transition: impl FnOnce(&SliderState) -> StatePatch) {
        let prev = self.inner.borrow().state;
        let patch = transition(&prev);

        let state = {
            let mut inner = self.inner.borrow_mut();
            inner.state = inner.state.merged(patch);
            inner.state
        };

        let listener = self.inner.borrow().listener.clone();
        if let Some(listener) = listener {
            listener(&state, &prev);
        }
    }

    /// Register the single listener, replacing any previous one.
    pub fn listen(&self, handler: impl Fn(&SliderState, &SliderState) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(handler));
    }

    /// Clear the listener slot.
    pub fn unlisten(&self) {
        self.inner.borrow_mut().listener = None;
    }

    /// Non-owning handle for use inside callbacks.
    pub fn downgrade(&self) -> WeakStore {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Non-owning store reference.
///
/// Held by completion callbacks and the change handler; upgrading fails
/// once the owning slider is gone, at which point the pending work is
/// simply dropped.
#[derive(Clone)]
pub struct WeakStore {
    inner: Weak<RefCell<StoreInner>>,
}

impl WeakStore {
    /// Recover a usable handle, if the store still exists.
    pub fn upgrade(&self) -> Option<Store> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SliderOptions;
    use std::cell::Cell;

    fn test_state() -> SliderState {
        SliderState::initial(6, SliderOptions::default())
    }

    #[test]
    fn test_get_state_returns_snapshot() {
        let store = Store::new(test_state());
        assert_eq!(store.get_state().current_slide, 0);
    }

    #[test]
    fn test_set_state_merges_patch() {
        let store = Store::new(test_state());

        store.set_state(|prev| StatePatch {
            current_slide: Some(prev.current_slide + 2),
            ..StatePatch::default()
        });

        assert_eq!(store.get_state().current_slide, 2);
    }

    #[test]
    fn test_listener_sees_new_and_prev() {
        let store = Store::new(test_state());
        let seen = Rc::new(Cell::new((-1, -1)));

        let seen_in = seen.clone();
        store.listen(move |state, prev| {
            seen_in.set((state.current_slide, prev.current_slide));
        });

        store.set_state(|_| StatePatch {
            current_slide: Some(4),
            ..StatePatch::default()
        });

        assert_eq!(seen.get(), (4, 0));
    }

    #[test]
    fn test_identical_patch_still_notifies() {
        // No diffing: a transition returning the current values still
        // produces exactly one notification.
        let store = Store::new(test_state());
        let calls = Rc::new(Cell::new(0));

        let calls_in = calls.clone();
        store.listen(move |_, _| calls_in.set(calls_in.get() + 1));

        store.set_state(|prev| StatePatch {
            current_slide: Some(prev.current_slide),
            ..StatePatch::default()
        });

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_set_state_without_listener_still_mutates() {
        let store = Store::new(test_state());

        store.set_state(|_| StatePatch {
            current_slide: Some(3),
            ..StatePatch::default()
        });

        assert_eq!(store.get_state().current_slide, 3);
    }

    #[test]
    fn test_listen_replaces_previous_listener() {
        let store = Store::new(test_state());
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let first_in = first.clone();
        store.listen(move |_, _| first_in.set(first_in.get() + 1));
        let second_in = second.clone();
        store.listen(move |_, _| second_in.set(second_in.get() + 1));

        store.set_state(|_| StatePatch::default());

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_unlisten_clears_slot() {
        let store = Store::new(test_state());
        let calls = Rc::new(Cell::new(0));

        let calls_in = calls.clone();
        store.listen(move |_, _| calls_in.set(calls_in.get() + 1));
        store.unlisten();

        store.set_state(|_| StatePatch::default());

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_reentrant_set_state_from_listener() {
        // The snap-back path mutates the store from inside a notification;
        // the nested call must complete and notify again.
        let store = Store::new(test_state());
        let calls = Rc::new(Cell::new(0));

        let calls_in = calls.clone();
        let weak = store.downgrade();
        store.listen(move |state, _| {
            calls_in.set(calls_in.get() + 1);
            if state.current_slide == 5 {
                let store = weak.upgrade().unwrap();
                store.set_state(|_| StatePatch {
                    current_slide: Some(0),
                    prevent_animation: Some(true),
                    ..StatePatch::default()
                });
            }
        });

        store.set_state(|_| StatePatch {
            current_slide: Some(5),
            ..StatePatch::default()
        });

        assert_eq!(calls.get(), 2);
        assert_eq!(store.get_state().current_slide, 0);
        assert!(store.get_state().prevent_animation);
    }

    #[test]
    fn test_weak_store_outlives_nothing() {
        let store = Store::new(test_state());
        let weak = store.downgrade();

        assert!(weak.upgrade().is_some());
        drop(store);
        assert!(weak.upgrade().is_none());
    }
}
