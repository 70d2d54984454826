//! Core systems for switchpick.
//!
//! This crate provides the small foundation the picker widgets are built on:
//!
//! - **Signal/Slot System**: Type-safe notification between widgets
//! - **Property System**: Values with change detection
//! - **Logging**: Tracing targets and span guards
//!
//! # Signal/Slot Example
//!
//! ```
//! use switchpick_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use switchpick_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{CoreError, Result, SignalError};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
