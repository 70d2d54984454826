//! switchpick - a composite date and time picker.
//!
//! A [`DateTimePicker`] holds a date control and a time control behind a view
//! switcher. Two trigger buttons bring one or the other to the front, and the
//! picker keeps a cached [`Timestamp`] that always reflects both controls.
//!
//! The controls are headless: they hold state and emit signals, and a host
//! toolkit renders them. Custom controls plug in through the [`DateControl`],
//! [`TimeControl`] and [`ViewSwitcher`] traits.
//!
//! # Example
//!
//! ```
//! use switchpick::prelude::*;
//!
//! let mut picker = DateTimePicker::with_timestamp(Timestamp::from_fields(
//!     DateFields::new(2014, 0, 15).unwrap(),
//!     TimeFields::new(9, 30).unwrap(),
//! ));
//!
//! picker.update_time(TimeFields::new(14, 45).unwrap());
//! assert_eq!(picker.field(CalendarField::HourOfDay), 14);
//!
//! picker.toggle_view(PickerTrigger::ShowTime);
//! assert!(!picker.is_trigger_enabled(PickerTrigger::ShowTime));
//! ```

pub use switchpick_core::*;

pub mod config;
mod error;
pub mod prelude;
pub mod timestamp;
pub mod widget;

pub use config::{PickerConfig, TransitionConfig};
pub use error::{Error, Result};
pub use timestamp::{CalendarField, DateFields, TimeFields, Timestamp};
pub use widget::controls::{DateControl, PickerTrigger, PickerView, TimeControl, ViewSwitcher};
pub use widget::widgets::DateTimePicker;
