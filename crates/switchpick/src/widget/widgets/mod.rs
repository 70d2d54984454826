//! Standard widgets for switchpick.
//!
//! This module provides the headless controls a picker is assembled from:
//!
//! - [`DateSpinner`]: Date wheel with optional bounds
//! - [`TimeSpinner`]: Hour and minute wheel
//! - [`ViewFlipper`]: Shows one page at a time with slide animations
//! - [`TriggerButton`]: Labelled button that can be disabled
//! - [`DateTimePicker`]: The composite picker

mod date_spinner;
mod date_time_picker;
mod time_spinner;
mod trigger_button;
mod view_flipper;

pub use date_spinner::{DateFormat, DateSpinner};
pub use date_time_picker::DateTimePicker;
pub use time_spinner::{TimeFormat, TimeSpinner};
pub use trigger_button::TriggerButton;
pub use view_flipper::{PageTransition, ViewFlipper};
