//! Headless view for exercising the engine without a terminal.
//!
//! Records every call the controller makes and queues animated
//! completions so tests control exactly when a "transition" finishes.
//! This is what lets the overshoot window of an infinite slider be
//! observed: navigate, inspect the transient state, then
//! [`MockView::finish_transition`] to let the snap-back commit.

use std::cell::{Cell, RefCell};

use crate::engine::clones::ClonePlan;
use crate::types::Arrow;
use crate::view::{SliderView, TransitionDone};

/// One recorded `apply_transform` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformCall {
    pub percent: f32,
    pub animated: bool,
}

/// Recording implementation of [`SliderView`].
pub struct MockView {
    slide_count: usize,
    transforms: RefCell<Vec<TransformCall>>,
    pending: RefCell<Vec<TransitionDone>>,
    basis: Cell<Option<f32>>,
    clone_plan: RefCell<Option<ClonePlan>>,
    prev_hidden: Cell<Option<bool>>,
    next_hidden: Cell<Option<bool>>,
}

impl MockView {
    /// A view over `slide_count` real slides.
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            transforms: RefCell::new(Vec::new()),
            pending: RefCell::new(Vec::new()),
            basis: Cell::new(None),
            clone_plan: RefCell::new(None),
            prev_hidden: Cell::new(None),
            next_hidden: Cell::new(None),
        }
    }

    /// Fire the oldest pending completion. Returns false when none was
    /// pending.
    pub fn finish_transition(&self) -> bool {
        let done = {
            let mut pending = self.pending.borrow_mut();
            if pending.is_empty() {
                return false;
            }
            pending.remove(0)
        };
        // Fired outside the borrow: the completion re-enters the store
        // and may queue a new transform on this view.
        done.fire();
        true
    }

    /// Fire every pending completion, oldest first.
    pub fn finish_all(&self) {
        while self.finish_transition() {}
    }

    /// Number of animated transforms still awaiting completion.
    pub fn pending_transitions(&self) -> usize {
        self.pending.borrow().len()
    }

    /// All recorded transform calls, oldest first.
    pub fn transforms(&self) -> Vec<TransformCall> {
        self.transforms.borrow().clone()
    }

    /// The most recent transform call.
    pub fn last_transform(&self) -> Option<TransformCall> {
        self.transforms.borrow().last().copied()
    }

    /// The slide basis the controller set, if any.
    pub fn basis(&self) -> Option<f32> {
        self.basis.get()
    }

    /// The clone plan the controller inserted, if any.
    pub fn clone_plan(&self) -> Option<ClonePlan> {
        self.clone_plan.borrow().clone()
    }

    /// Last hidden flag applied to an arrow, if any.
    pub fn arrow_hidden(&self, arrow: Arrow) -> Option<bool> {
        match arrow {
            Arrow::Prev => self.prev_hidden.get(),
            Arrow::Next => self.next_hidden.get(),
        }
    }
}

impl SliderView for MockView {
    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn set_slide_basis(&self, percent: f32) {
        self.basis.set(Some(percent));
    }

    fn insert_clones(&self, plan: &ClonePlan) {
        *self.clone_plan.borrow_mut() = Some(plan.clone());
    }

    fn apply_transform(&self, percent: f32, animated: bool, done: TransitionDone) {
        self.transforms.borrow_mut().push(TransformCall { percent, animated });
        if animated {
            self.pending.borrow_mut().push(done);
        }
        // A suppressed move drops `done` unfired.
    }

    fn set_arrow_hidden(&self, arrow: Arrow, hidden: bool) {
        match arrow {
            Arrow::Prev => self.prev_hidden.set(Some(hidden)),
            Arrow::Next => self.next_hidden.set(Some(hidden)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_records_transforms() {
        let view = MockView::new(4);

        view.apply_transform(-50.0, false, TransitionDone::noop());
        view.apply_transform(-100.0, true, TransitionDone::noop());

        assert_eq!(view.transforms().len(), 2);
        assert_eq!(
            view.last_transform(),
            Some(TransformCall {
                percent: -100.0,
                animated: true,
            })
        );
    }

    #[test]
    fn test_animated_transform_queues_completion() {
        let view = MockView::new(4);
        let fired = Rc::new(Cell::new(false));

        let fired_in = fired.clone();
        view.apply_transform(-50.0, true, TransitionDone::new(move || fired_in.set(true)));

        assert_eq!(view.pending_transitions(), 1);
        assert!(!fired.get());

        assert!(view.finish_transition());
        assert!(fired.get());
        assert_eq!(view.pending_transitions(), 0);
        assert!(!view.finish_transition());
    }

    #[test]
    fn test_suppressed_transform_never_completes() {
        let view = MockView::new(4);
        let fired = Rc::new(Cell::new(false));

        let fired_in = fired.clone();
        view.apply_transform(-50.0, false, TransitionDone::new(move || fired_in.set(true)));

        assert_eq!(view.pending_transitions(), 0);
        view.finish_all();
        assert!(!fired.get());
    }
}
