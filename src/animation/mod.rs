//! Sequential, frame-driven animation of view state.
//!
//! A [`Transition`] remaps linear time through an [`Easing`] curve and feeds
//! the result to a callback. An [`AnimationQueue`] runs transitions strictly
//! one after another; it has no timer of its own and advances only when the
//! host reports a display frame.

pub mod easing;
mod queue;
mod transition;

pub use easing::Easing;
pub use queue::{AnimationQueue, QueueState};
pub use transition::Transition;
