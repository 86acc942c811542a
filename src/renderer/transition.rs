//! Timed track transitions.
//!
//! A [`Transition`] interpolates the track offset between two transforms
//! over a fixed duration with ease-out cubic easing, then fires its
//! completion token. Completion fires at most once; dropping an
//! interrupted transition never fires it.

use std::time::{Duration, Instant};

use crate::view::TransitionDone;

/// How long an animated track move takes.
pub const DURATION: Duration = Duration::from_millis(200);

/// An in-flight animated transform.
pub struct Transition {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    done: TransitionDone,
}

impl Transition {
    /// Start a transition at `now`.
    pub fn new(from: f32, to: f32, now: Instant, done: TransitionDone) -> Self {
        Self {
            from,
            to,
            started: now,
            duration: DURATION,
            done,
        }
    }

    /// Interpolated transform percent at `now`.
    pub fn value(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// The transform this transition ends at.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// True once the full duration has elapsed.
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Fire the completion token, consuming the transition.
    pub fn finish(self) {
        self.done.fire();
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_value_spans_from_to() {
        let now = Instant::now();
        let transition = Transition::new(0.0, -100.0, now, TransitionDone::noop());

        assert!((transition.value(now) - 0.0).abs() < 0.001);
        assert!((transition.value(now + DURATION) - -100.0).abs() < 0.001);
        assert!((transition.value(now + DURATION * 4) - -100.0).abs() < 0.001);
    }

    #[test]
    fn test_eases_toward_target() {
        let now = Instant::now();
        let transition = Transition::new(0.0, -100.0, now, TransitionDone::noop());

        // Ease-out covers more than half the distance by the midpoint.
        let midway = transition.value(now + DURATION / 2);
        assert!(midway < -50.0, "midway was {midway}");
        assert!(midway > -100.0);
    }

    #[test]
    fn test_completion() {
        let now = Instant::now();
        let transition = Transition::new(0.0, -100.0, now, TransitionDone::noop());

        assert!(!transition.is_complete(now));
        assert!(!transition.is_complete(now + DURATION / 2));
        assert!(transition.is_complete(now + DURATION));
    }

    #[test]
    fn test_finish_fires_token() {
        let fired = Rc::new(Cell::new(false));

        let fired_in = fired.clone();
        let transition = Transition::new(
            0.0,
            -100.0,
            Instant::now(),
            TransitionDone::new(move || fired_in.set(true)),
        );

        transition.finish();
        assert!(fired.get());
    }
}
