//! Animation support for view transitions.
//!
//! A view switcher is given one [`Animation`] for the view that enters and one
//! for the view that leaves. Each animation pairs an [`AnimationKind`] with a
//! duration and an [`Easing`] curve.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use switchpick::widget::animation::{Animation, AnimationKind, Easing};
//!
//! let enter = Animation::new(AnimationKind::SlideInRight)
//!     .with_duration(Duration::from_millis(250))
//!     .with_easing(Easing::Decelerate);
//! assert_eq!(enter.progress_at(Duration::from_millis(250)), 1.0);
//! ```

mod easing;
mod transition;

pub use easing::Easing;
pub use transition::{Animation, AnimationKind};
