//! Terminal rendering surface.
//!
//! [`TerminalView`] implements [`SliderView`] on top of crossterm. It
//! keeps a model of the track (real slides plus any clones), the current
//! transform, and an optional in-flight [`Transition`], and draws the
//! visible viewport as a strip of labelled color blocks with navigation
//! arrows at the edges. Track geometry comes from [`compute_track_layout`],
//! which resolves the percentage slide bases through taffy.
//!
//! Hosts drive it with a tick/draw loop:
//!
//! ```ignore
//! let view = Rc::new(TerminalView::new(slides));
//! let slider = Slider::new(view.clone(), SliderOptions::default());
//!
//! loop {
//!     // route key events to slider.prev() / slider.next() ...
//!     let now = Instant::now();
//!     if view.tick(now) {
//!         view.draw(&mut stdout(), 72, 9, now)?;
//!     }
//! }
//! ```

use std::cell::RefCell;
use std::io::{self, Write};
use std::time::Instant;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::engine::clones::ClonePlan;
use crate::types::Arrow;
use crate::view::{SliderView, TransitionDone};

mod track;
mod transition;

pub use track::{compute_track_layout, TrackLayout};
pub use transition::{Transition, DURATION};

// =============================================================================
// Dirty tracking
// =============================================================================

bitflags::bitflags! {
    /// What changed since the last draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Dirty: u8 {
        const TRACK = 1 << 0;
        const ARROWS = 1 << 1;
    }
}

// =============================================================================
// Track model
// =============================================================================

/// One slide in the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Text centered in the slide block.
    pub label: String,
    /// Background color of the slide block.
    pub color: Color,
    /// True for padding duplicates; excluded from the real slide count.
    pub is_clone: bool,
}

impl Slide {
    /// A real slide.
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            is_clone: false,
        }
    }

    fn duplicate(&self) -> Self {
        Self {
            is_clone: true,
            ..self.clone()
        }
    }
}

struct TrackModel {
    slides: Vec<Slide>,
    real_slides: usize,
    basis_percent: f32,
    offset_percent: f32,
    transition: Option<Transition>,
    prev_hidden: bool,
    next_hidden: bool,
    dirty: Dirty,
}

// =============================================================================
// Terminal view
// =============================================================================

/// Crossterm-backed implementation of [`SliderView`].
pub struct TerminalView {
    model: RefCell<TrackModel>,
}

impl TerminalView {
    /// A view over the given real slides.
    pub fn new(slides: Vec<Slide>) -> Self {
        let real_slides = slides.len();

        Self {
            model: RefCell::new(TrackModel {
                slides,
                real_slides,
                basis_percent: 100.0,
                offset_percent: 0.0,
                transition: None,
                prev_hidden: false,
                next_hidden: false,
                dirty: Dirty::all(),
            }),
        }
    }

    /// Advance the in-flight transition, if any, and report whether a
    /// redraw is needed.
    ///
    /// A transition that has run its full duration is committed: the
    /// track offset lands on the target and the completion token fires.
    pub fn tick(&self, now: Instant) -> bool {
        let finished = {
            let mut model = self.model.borrow_mut();

            let finished = model.transition.take_if(|t| t.is_complete(now));
            if let Some(transition) = &finished {
                model.offset_percent = transition.target();
                model.dirty |= Dirty::TRACK;
            } else if model.transition.is_some() {
                // Still animating: every frame moves the track.
                model.dirty |= Dirty::TRACK;
            }

            finished
        };

        // Completion runs outside the borrow: the callback re-enters the
        // store, whose listener calls back into this view.
        if let Some(transition) = finished {
            transition.finish();
        }

        self.needs_redraw()
    }

    /// True when the next [`TerminalView::draw`] would change the screen.
    pub fn needs_redraw(&self) -> bool {
        let model = self.model.borrow();
        !model.dirty.is_empty() || model.transition.is_some()
    }

    /// Draw the widget into a `width` x `height` viewport at the top
    /// left of `out`.
    pub fn draw<W: Write>(&self, out: &mut W, width: u16, height: u16, now: Instant) -> io::Result<()> {
        let mut model = self.model.borrow_mut();

        let offset = model
            .transition
            .as_ref()
            .map(|t| t.value(now))
            .unwrap_or(model.offset_percent);

        let layout = compute_track_layout(model.slides.len(), model.basis_percent, width, height)
            .map_err(io::Error::other)?;

        // The transform is a percentage of the viewport width; negative
        // values shift the track left.
        let shift = width as f32 * offset / 100.0;

        for y in 0..height {
            queue!(out, MoveTo(0, y), Clear(ClearType::UntilNewLine))?;
        }

        let label_row = height / 2;
        for (slide, position) in model.slides.iter().zip(&layout.positions) {
            let start = (*position as f32 + shift).round() as i32;
            let end = start + layout.slide_width as i32;

            let visible_start = start.max(0);
            let visible_end = end.min(width as i32);
            if visible_start >= visible_end {
                continue;
            }

            let span = " ".repeat((visible_end - visible_start) as usize);
            queue!(out, SetBackgroundColor(slide.color))?;
            for y in 0..height {
                queue!(out, MoveTo(visible_start as u16, y), Print(&span))?;
            }

            let label_len = slide.label.chars().count() as i32;
            let label_x = start + (layout.slide_width as i32 - label_len) / 2;
            if label_x >= visible_start && label_x + label_len <= visible_end {
                queue!(
                    out,
                    MoveTo(label_x as u16, label_row),
                    SetForegroundColor(Color::White),
                    Print(&slide.label),
                )?;
            }
        }

        queue!(out, ResetColor)?;

        if !model.prev_hidden {
            queue!(out, MoveTo(0, label_row), Print("❮"))?;
        }
        if !model.next_hidden && width > 0 {
            queue!(out, MoveTo(width - 1, label_row), Print("❯"))?;
        }

        out.flush()?;

        model.dirty = Dirty::empty();
        Ok(())
    }

    #[cfg(test)]
    fn offset_percent(&self) -> f32 {
        self.model.borrow().offset_percent
    }

    #[cfg(test)]
    fn track_labels(&self) -> Vec<(String, bool)> {
        self.model
            .borrow()
            .slides
            .iter()
            .map(|slide| (slide.label.clone(), slide.is_clone))
            .collect()
    }
}

impl SliderView for TerminalView {
    fn slide_count(&self) -> usize {
        self.model.borrow().real_slides
    }

    fn set_slide_basis(&self, percent: f32) {
        let mut model = self.model.borrow_mut();
        model.basis_percent = percent;
        model.dirty |= Dirty::TRACK;
    }

    fn insert_clones(&self, plan: &ClonePlan) {
        let mut model = self.model.borrow_mut();

        let real = model.slides.clone();
        for &index in &plan.appended {
            if let Some(slide) = real.get(index) {
                model.slides.push(slide.duplicate());
            }
        }
        for &index in &plan.prepended {
            if let Some(slide) = real.get(index) {
                model.slides.insert(0, slide.duplicate());
            }
        }

        model.dirty |= Dirty::TRACK;
    }

    fn apply_transform(&self, percent: f32, animated: bool, done: TransitionDone) {
        let mut model = self.model.borrow_mut();

        if animated {
            let now = Instant::now();
            let from = model
                .transition
                .as_ref()
                .map(|t| t.value(now))
                .unwrap_or(model.offset_percent);

            // Replacing an in-flight transition drops its completion
            // unfired, like a restyled element mid-transition.
            model.transition = Some(Transition::new(from, percent, now, done));
        } else {
            model.transition = None;
            model.offset_percent = percent;
            // `done` is dropped: suppressed moves never report completion.
        }

        model.dirty |= Dirty::TRACK;
    }

    fn set_arrow_hidden(&self, arrow: Arrow, hidden: bool) {
        let mut model = self.model.borrow_mut();

        match arrow {
            Arrow::Prev => model.prev_hidden = hidden,
            Arrow::Next => model.next_hidden = hidden,
        }

        model.dirty |= Dirty::ARROWS;
    }
}
