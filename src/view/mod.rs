//! Rendering surface for the slider.
//!
//! The controller never touches a concrete output. It talks to a
//! [`SliderView`]: set slide bases, splice in clones, move the track,
//! toggle arrows. This keeps the state machine fully testable without any
//! rendering surface (see [`mock::MockView`]), while
//! [`crate::renderer::TerminalView`] provides the real terminal surface.

use std::cell::RefCell;

use crate::engine::clones::ClonePlan;
use crate::types::Arrow;

pub mod mock;

// =============================================================================
// Transition completion
// =============================================================================

/// One-shot transition completion token.
///
/// Wraps the callback a caller wants invoked when an animated track move
/// finishes. `fire` consumes the callback, so at most one invocation is
/// possible by construction. A view holding a token for an interrupted or
/// abandoned transition simply drops it; the callback is then never
/// invoked.
pub struct TransitionDone {
    callback: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl TransitionDone {
    /// Wrap a callback.
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self {
            callback: RefCell::new(Some(Box::new(callback))),
        }
    }

    /// A token with nothing to run.
    pub fn noop() -> Self {
        Self {
            callback: RefCell::new(None),
        }
    }

    /// Invoke the callback if it has not fired yet.
    ///
    /// The callback runs after the internal slot is cleared, so it may
    /// start new transitions (and hand out new tokens) freely.
    pub fn fire(&self) {
        let callback = self.callback.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
    }

    /// True once the callback has run, or when none was attached.
    pub fn is_spent(&self) -> bool {
        self.callback.borrow().is_none()
    }
}

// =============================================================================
// View capability
// =============================================================================

/// Capability interface between the slider controller and its output.
///
/// Implementations mutate their own presentation state behind `&self`;
/// the controller shares the view with the host event loop via `Rc`.
pub trait SliderView {
    /// Number of real slides the view was created with. Clones inserted
    /// later do not count.
    fn slide_count(&self) -> usize;

    /// Set every real slide's main-axis basis, as a percentage of the
    /// viewport width.
    fn set_slide_basis(&self, percent: f32);

    /// Splice clone slides into the track per the plan. Called at most
    /// once, during construction of an infinite slider.
    fn insert_clones(&self, plan: &ClonePlan);

    /// Move the track to `percent`, a translation in viewport-width
    /// percent (non-positive in practice).
    ///
    /// When `animated` is true the view plays a transition and fires
    /// `done` exactly once when it finishes. When false the move is
    /// immediate and `done` is never fired.
    fn apply_transform(&self, percent: f32, animated: bool, done: TransitionDone);

    /// Show or hide a navigation arrow.
    fn set_arrow_hidden(&self, arrow: Arrow, hidden: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_done_fires_once() {
        let count = Rc::new(Cell::new(0));

        let count_in = count.clone();
        let done = TransitionDone::new(move || count_in.set(count_in.get() + 1));

        assert!(!done.is_spent());
        done.fire();
        done.fire();

        assert_eq!(count.get(), 1);
        assert!(done.is_spent());
    }

    #[test]
    fn test_noop_is_already_spent() {
        let done = TransitionDone::noop();
        assert!(done.is_spent());
        done.fire();
    }

    #[test]
    fn test_dropping_unfired_done_never_invokes() {
        let count = Rc::new(Cell::new(0));

        let count_in = count.clone();
        let done = TransitionDone::new(move || count_in.set(count_in.get() + 1));
        drop(done);

        assert_eq!(count.get(), 0);
    }
}
