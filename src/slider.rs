//! Slider controller.
//!
//! Orchestrates construction, exposes `prev`/`next`/`slide_to`, and owns
//! the state-to-view projection. The store is the single source of truth:
//! `prev` and `next` only submit state transitions, and all view mutation
//! happens in the change handler registered as the store's sole listener.
//!
//! The infinite illusion lives in the change handler's completion
//! callback: a transition that lands in a clone region is followed by an
//! animation-suppressed correction that relocates `current_slide` back
//! into the real range before the next user-visible rest state.

use std::rc::Rc;

use crate::engine::bounds::bound_slide_index;
use crate::engine::clones::ClonePlan;
use crate::engine::store::{Store, WeakStore};
use crate::types::{Arrow, SliderOptions, SliderState, StatePatch};
use crate::view::{SliderView, TransitionDone};

/// A carousel over a [`SliderView`].
pub struct Slider<V: SliderView> {
    view: Rc<V>,
    store: Store,
}

impl<V: SliderView + 'static> Slider<V> {
    /// Build a slider on top of `view`.
    ///
    /// Reads the slide count from the view, derives the initial state
    /// from it and `options`, registers the change handler, sizes the
    /// slides, splices in clones when infinite, and settles the track at
    /// slide 0 without animating.
    pub fn new(view: Rc<V>, options: SliderOptions) -> Self {
        let total_slides = view.slide_count() as i32;
        let state = SliderState::initial(total_slides, options);
        let store = Store::new(state);

        {
            let view = view.clone();
            let weak = store.downgrade();
            store.listen(move |state, prev| on_change(&view, &weak, state, prev));
        }

        view.set_slide_basis(state.transform);

        if state.disable_prev {
            view.set_arrow_hidden(Arrow::Prev, true);
        }
        if state.disable_next {
            view.set_arrow_hidden(Arrow::Next, true);
        }

        if state.infinite {
            let plan = ClonePlan::compute(state.total_slides, state.visible_slides, state.step);
            view.insert_clones(&plan);
        }

        let slider = Self { view, store };
        slider.slide_to(0, true, None);
        slider
    }

    /// Slide one step back. No-op while the prev arrow is disabled.
    pub fn prev(&self) {
        let SliderState {
            step,
            infinite,
            visible_slides,
            total_slides,
            disable_prev,
            ..
        } = self.store.get_state();

        if disable_prev {
            return;
        }

        self.store.set_state(|prev| {
            let requested = prev.current_slide - step;

            StatePatch {
                current_slide: Some(bound_slide_index(
                    requested,
                    infinite,
                    visible_slides,
                    total_slides,
                )),
                prevent_animation: Some(false),
                ..StatePatch::default()
            }
        });
    }

    /// Slide one step forward. No-op while the next arrow is disabled.
    pub fn next(&self) {
        let SliderState {
            step,
            infinite,
            visible_slides,
            total_slides,
            disable_next,
            ..
        } = self.store.get_state();

        if disable_next {
            return;
        }

        self.store.set_state(|prev| {
            let requested = prev.current_slide + step;

            StatePatch {
                current_slide: Some(bound_slide_index(
                    requested,
                    infinite,
                    visible_slides,
                    total_slides,
                )),
                prevent_animation: Some(false),
                ..StatePatch::default()
            }
        });
    }

    /// Project the track to `index` directly, without a state transition.
    ///
    /// Indices are not validated here; `prev`/`next` are the guarded
    /// paths. `done` fires once when the animated move finishes; a
    /// suppressed move never fires it.
    pub fn slide_to(&self, index: i32, prevent_animation: bool, done: Option<Box<dyn FnOnce()>>) {
        let state = self.store.get_state();
        project_to(&*self.view, &state, index, prevent_animation, done);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SliderState {
        self.store.get_state()
    }

    /// The view this slider projects onto.
    pub fn view(&self) -> &Rc<V> {
        &self.view
    }
}

/// Translate a slide index into a track transform and hand it to the view.
fn project_to<V: SliderView + ?Sized>(
    view: &V,
    state: &SliderState,
    index: i32,
    prevent_animation: bool,
    done: Option<Box<dyn FnOnce()>>,
) {
    let percent = -(state.transform * (index + state.transform_offset) as f32);

    let done = match done {
        Some(callback) => TransitionDone::new(callback),
        None => TransitionDone::noop(),
    };

    view.apply_transform(percent, !prevent_animation, done);
}

/// React to a state change by projecting it onto the view.
///
/// Runs synchronously inside every store notification. The only
/// re-entrant `set_state` calls it produces terminate by construction:
/// the finite arrow-flag commit leaves `current_slide` unchanged, and the
/// snap-back correction is scheduled from the transition completion, not
/// from the handler body.
fn on_change<V: SliderView + 'static>(
    view: &Rc<V>,
    store: &WeakStore,
    state: &SliderState,
    prev_state: &SliderState,
) {
    let SliderState {
        current_slide,
        visible_slides,
        total_slides,
        prevent_animation,
        step,
        infinite,
        disable_prev,
        disable_next,
        ..
    } = *state;

    if current_slide != prev_state.current_slide {
        // The completion callback commits the silent wrap for infinite
        // sliders: once the transition into a clone region has played,
        // relocate the index into the real range with animation
        // suppressed. The suppressed projection schedules no completion
        // of its own, so the cycle ends there.
        let done: Box<dyn FnOnce()> = {
            let store = store.clone();

            Box::new(move || {
                if !infinite {
                    return;
                }

                let Some(store) = store.upgrade() else {
                    return;
                };

                if current_slide >= total_slides {
                    store.set_state(|_| StatePatch {
                        current_slide: Some(current_slide - total_slides),
                        prevent_animation: Some(true),
                        ..StatePatch::default()
                    });
                } else if current_slide <= -step {
                    store.set_state(|_| StatePatch {
                        current_slide: Some(total_slides - step),
                        prevent_animation: Some(true),
                        ..StatePatch::default()
                    });
                }
            })
        };

        project_to(&**view, state, current_slide, prevent_animation, Some(done));

        // Finite arrow flags follow the index immediately, not on
        // transition completion.
        if !infinite {
            if let Some(store) = store.upgrade() {
                store.set_state(|_| StatePatch {
                    disable_prev: Some(current_slide == 0),
                    disable_next: Some(current_slide == total_slides - visible_slides),
                    ..StatePatch::default()
                });
            }
        }
    }

    if disable_prev != prev_state.disable_prev {
        view.set_arrow_hidden(Arrow::Prev, disable_prev);
    }

    if disable_next != prev_state.disable_next {
        view.set_arrow_hidden(Arrow::Next, disable_next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::mock::MockView;

    fn slider(total: usize, visible_slides: i32, step: i32, infinite: bool) -> Slider<MockView> {
        Slider::new(
            Rc::new(MockView::new(total)),
            SliderOptions {
                visible_slides,
                step,
                infinite,
            },
        )
    }

    #[test]
    fn test_construction_settles_at_slide_zero_without_animation() {
        let slider = slider(6, 2, 2, true);
        let first = slider.view().transforms()[0];

        // transform 50, offset 2: slide 0 sits at -100%.
        assert!((first.percent - -100.0).abs() < f32::EPSILON);
        assert!(!first.animated);
    }

    #[test]
    fn test_construction_finite_has_no_offset() {
        let slider = slider(6, 2, 2, false);
        let first = slider.view().transforms()[0];

        assert!((first.percent - 0.0).abs() < f32::EPSILON);
        assert!(slider.view().clone_plan().is_none());
    }

    #[test]
    fn test_construction_sets_basis_and_clones() {
        let slider = slider(7, 2, 3, true);

        assert!((slider.view().basis().unwrap() - 50.0).abs() < f32::EPSILON);

        let plan = slider.view().clone_plan().unwrap();
        assert_eq!(plan.appended.len(), 3);
        assert_eq!(plan.prepended.len(), 4);
    }

    #[test]
    fn test_slide_to_done_only_fires_animated() {
        use std::cell::Cell;

        let slider = slider(6, 1, 1, false);

        let fired = Rc::new(Cell::new(0));
        let fired_in = fired.clone();
        slider.slide_to(2, true, Some(Box::new(move || fired_in.set(fired_in.get() + 1))));
        slider.view().finish_all();
        assert_eq!(fired.get(), 0);

        let fired_in = fired.clone();
        slider.slide_to(3, false, Some(Box::new(move || fired_in.set(fired_in.get() + 1))));
        slider.view().finish_all();
        assert_eq!(fired.get(), 1);
    }
}
