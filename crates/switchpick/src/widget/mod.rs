//! Widget system for switchpick.
//!
//! - [`controls`]: The traits a picker drives its date, time and switcher
//!   controls through, plus the view and trigger identifiers
//! - [`widgets`]: Headless default controls and the [`DateTimePicker`](widgets::DateTimePicker)
//! - [`animation`]: Slide descriptions handed to the view switcher

pub mod animation;
pub mod controls;
pub mod widgets;
