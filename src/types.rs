//! Core types for glide-tui.
//!
//! These types define the slider's single source of truth: the options it
//! is built from, the state record that every other module reads, and the
//! patch type that state transitions produce.

// =============================================================================
// Options
// =============================================================================

/// Configuration accepted at construction.
///
/// Callers fill in the fields they care about and take defaults for the
/// rest via struct update syntax:
///
/// ```
/// use glide_tui::SliderOptions;
///
/// let options = SliderOptions {
///     visible_slides: 2,
///     ..Default::default()
/// };
/// assert_eq!(options.step, 1);
/// assert!(options.infinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderOptions {
    /// Number of slides shown at once. Minimum 1.
    pub visible_slides: i32,
    /// Slides advanced per navigation call. Minimum 1.
    pub step: i32,
    /// Wrap past either end instead of stopping at it.
    pub infinite: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            visible_slides: 1,
            step: 1,
            infinite: true,
        }
    }
}

// =============================================================================
// Arrows
// =============================================================================

/// The two navigation arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Prev,
    Next,
}

// =============================================================================
// State
// =============================================================================

/// The slider's authoritative state record.
///
/// Created once at construction and replaced wholesale on every
/// transition. Geometry fields (`total_slides`, `visible_slides`, `step`,
/// `infinite`, `transform`, `transform_offset`) are fixed for the lifetime
/// of the slider; only `current_slide`, `prevent_animation` and the two
/// arrow flags ever change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    /// Logical index of the leftmost visible real slide.
    ///
    /// Infinite sliders let this leave `[0, total_slides)` for the span of
    /// one transition into a clone region; the controller snaps it back
    /// before the next rest state.
    pub current_slide: i32,
    /// Count of real (non-cloned) slides.
    pub total_slides: i32,
    /// Number of slides shown at once.
    pub visible_slides: i32,
    /// Slides advanced per navigation call.
    pub step: i32,
    /// Wrap-around mode flag.
    pub infinite: bool,
    /// Width of one slide as a percentage of the viewport: `100 / visible_slides`.
    pub transform: f32,
    /// Index shift compensating for prepended clones; 0 when finite.
    pub transform_offset: i32,
    /// The next projection must skip the transition animation.
    pub prevent_animation: bool,
    /// The prev arrow is inert and hidden.
    pub disable_prev: bool,
    /// The next arrow is inert and hidden.
    pub disable_next: bool,
}

impl SliderState {
    /// Build the initial state from the slide count and options.
    ///
    /// `visible_slides` and `step` are normalized up to 1 so the geometry
    /// arithmetic is defined for any caller-supplied options.
    pub fn initial(total_slides: i32, options: SliderOptions) -> Self {
        let visible_slides = options.visible_slides.max(1);
        let step = options.step.max(1);
        let infinite = options.infinite;

        let transform = 100.0 / visible_slides as f32;
        let transform_offset = if infinite {
            step + total_slides % step
        } else {
            0
        };

        Self {
            current_slide: 0,
            total_slides,
            visible_slides,
            step,
            infinite,
            transform,
            transform_offset,
            prevent_animation: false,
            disable_prev: !infinite,
            disable_next: visible_slides >= total_slides,
        }
    }

    /// Shallow-merge a patch into a copy of this state.
    pub(crate) fn merged(&self, patch: StatePatch) -> Self {
        let mut next = *self;
        if let Some(current_slide) = patch.current_slide {
            next.current_slide = current_slide;
        }
        if let Some(prevent_animation) = patch.prevent_animation {
            next.prevent_animation = prevent_animation;
        }
        if let Some(disable_prev) = patch.disable_prev {
            next.disable_prev = disable_prev;
        }
        if let Some(disable_next) = patch.disable_next {
            next.disable_next = disable_next;
        }
        next
    }
}

// =============================================================================
// Patches
// =============================================================================

/// Partial state update produced by a transition function.
///
/// Fields left as `None` keep their current value. Only the fields that
/// can change after construction are present here; the geometry fields
/// are computed once and never patched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub current_slide: Option<i32>,
    pub prevent_animation: Option<bool>,
    pub disable_prev: Option<bool>,
    pub disable_next: Option<bool>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SliderOptions::default();
        assert_eq!(options.visible_slides, 1);
        assert_eq!(options.step, 1);
        assert!(options.infinite);
    }

    #[test]
    fn test_initial_state_infinite() {
        let options = SliderOptions {
            visible_slides: 2,
            step: 2,
            infinite: true,
        };
        let state = SliderState::initial(6, options);

        assert_eq!(state.current_slide, 0);
        assert_eq!(state.total_slides, 6);
        assert!((state.transform - 50.0).abs() < f32::EPSILON);
        // step + total % step = 2 + 0
        assert_eq!(state.transform_offset, 2);
        assert!(!state.disable_prev);
        assert!(!state.disable_next);
        assert!(!state.prevent_animation);
    }

    #[test]
    fn test_initial_state_finite() {
        let options = SliderOptions {
            visible_slides: 2,
            step: 2,
            infinite: false,
        };
        let state = SliderState::initial(6, options);

        assert_eq!(state.transform_offset, 0);
        assert!(state.disable_prev);
        assert!(!state.disable_next);
    }

    #[test]
    fn test_initial_transform_offset_partial_page() {
        let options = SliderOptions {
            visible_slides: 2,
            step: 3,
            infinite: true,
        };
        let state = SliderState::initial(7, options);

        // step + total % step = 3 + 1
        assert_eq!(state.transform_offset, 4);
    }

    #[test]
    fn test_initial_disable_next_when_everything_visible() {
        let options = SliderOptions {
            visible_slides: 4,
            step: 1,
            infinite: false,
        };
        let state = SliderState::initial(3, options);

        assert!(state.disable_next);
    }

    #[test]
    fn test_initial_normalizes_degenerate_options() {
        let options = SliderOptions {
            visible_slides: 0,
            step: -2,
            infinite: true,
        };
        let state = SliderState::initial(5, options);

        assert_eq!(state.visible_slides, 1);
        assert_eq!(state.step, 1);
        assert!((state.transform - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_merged_applies_only_set_fields() {
        let state = SliderState::initial(6, SliderOptions::default());

        let next = state.merged(StatePatch {
            current_slide: Some(3),
            prevent_animation: Some(true),
            ..StatePatch::default()
        });

        assert_eq!(next.current_slide, 3);
        assert!(next.prevent_animation);
        // Untouched fields carry over.
        assert_eq!(next.total_slides, state.total_slides);
        assert_eq!(next.disable_prev, state.disable_prev);
        assert_eq!(next.disable_next, state.disable_next);
    }

    #[test]
    fn test_merged_empty_patch_is_identity() {
        let state = SliderState::initial(6, SliderOptions::default());
        assert_eq!(state.merged(StatePatch::default()), state);
    }
}
