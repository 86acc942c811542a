//! Clone planning for infinite sliders.
//!
//! An infinite slider pads its track with clones of the real slides so
//! that a transition past either end still shows plausible content; the
//! controller then snaps the index back into the real range once the
//! transition has played out. The clone counts depend on `step` and the
//! remainder `total_slides % step`: the last page of a cycle may be
//! partial, and the padding has to cover that worst case on both sides.

/// Which real slides to duplicate, and where the duplicates go.
///
/// `appended` lists indices to duplicate after the last real slide, in
/// the order they should appear. `prepended` lists indices gathered
/// walking backwards from the end of the track; consumers insert each one
/// at the front, which restores the original slide order in the final
/// track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonePlan {
    /// Real-slide indices to duplicate after the last real slide.
    pub appended: Vec<usize>,
    /// Real-slide indices to duplicate before the first real slide,
    /// ordered for one-by-one insertion at the front.
    pub prepended: Vec<usize>,
}

impl ClonePlan {
    /// Number of clones appended after the last real slide:
    /// `visible_slides + total_slides % step`.
    pub fn appended_count(total_slides: i32, visible_slides: i32, step: i32) -> i32 {
        visible_slides + total_slides % step
    }

    /// Number of clones prepended before the first real slide:
    /// `step + total_slides % step`.
    pub fn prepended_count(total_slides: i32, step: i32) -> i32 {
        step + total_slides % step
    }

    /// Compute the plan for a track of `total_slides` real slides.
    ///
    /// Indices wrap modulo `total_slides`, so a track shorter than its
    /// padding requirement still yields a well-formed plan. An empty
    /// track yields an empty plan.
    pub fn compute(total_slides: i32, visible_slides: i32, step: i32) -> Self {
        if total_slides <= 0 {
            return Self {
                appended: Vec::new(),
                prepended: Vec::new(),
            };
        }

        let total = total_slides as usize;
        let appended_count = Self::appended_count(total_slides, visible_slides, step) as usize;
        let prepended_count = Self::prepended_count(total_slides, step) as usize;

        // Copies of the first slides, in original order.
        let appended = (0..appended_count).map(|i| i % total).collect();

        // Copies of the last slides, walking backwards from the end. Each
        // entry is inserted at the front of the track, which reverses the
        // walk again and restores original order.
        let prepended = (0..prepended_count).map(|i| total - 1 - (i % total)).collect();

        Self {
            appended,
            prepended,
        }
    }

    /// Total number of clones in the plan.
    pub fn len(&self) -> usize {
        self.appended.len() + self.prepended.len()
    }

    /// True when the plan contains no clones.
    pub fn is_empty(&self) -> bool {
        self.appended.is_empty() && self.prepended.is_empty()
    }
}
