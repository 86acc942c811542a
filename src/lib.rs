//! # glide-tui
//!
//! Reactive carousel (slider) widget for terminal UIs.
//!
//! A slider holds a strip of slides and shows `visible_slides` of them at
//! a time. Navigation moves the strip by `step` slides with an animated
//! transform. Infinite sliders pad the strip with clones of the real
//! slides and, once a transition past either end has played, silently
//! snap the index back into the real range, so the wrap is never visible.
//!
//! ## Architecture
//!
//! State flows one way:
//!
//! ```text
//! prev/next → Store transition → change handler → SliderView projection
//! ```
//!
//! The [`Store`] owns the single authoritative [`SliderState`] and
//! notifies its one listener synchronously after every transition. The
//! [`Slider`] controller is that listener: it translates state changes
//! into view calls and schedules the snap-back correction from the
//! transition completion token.
//!
//! Rendering goes through the [`SliderView`] capability trait, so the
//! engine runs headless in tests ([`view::mock::MockView`]) and on a
//! real terminal through [`renderer::TerminalView`].
//!
//! ## Modules
//!
//! - [`types`] - State record, options, patches
//! - [`engine`] - Store, index bounds, clone planning
//! - [`slider`] - Controller and state-to-view projection
//! - [`view`] - View capability trait and headless mock
//! - [`renderer`] - Crossterm/taffy terminal surface

pub mod engine;
pub mod renderer;
pub mod slider;
pub mod types;
pub mod view;

pub use engine::{bound_slide_index, ClonePlan, Store, WeakStore};
pub use renderer::{Slide, TerminalView};
pub use slider::Slider;
pub use types::{Arrow, SliderOptions, SliderState, StatePatch};
pub use view::{SliderView, TransitionDone};
