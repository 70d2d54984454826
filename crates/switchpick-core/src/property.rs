//! Property system for switchpick.
//!
//! Properties hold widget state with change detection. When a property
//! changes, the owning widget typically emits a signal to notify interested
//! parties.
//!
//! # Example
//!
//! ```
//! use switchpick_core::{Property, Signal};
//!
//! struct Toggle {
//!     on: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn set_on(&self, on: bool) {
//!         if self.on.set(on) {
//!             self.toggled.emit(on);
//!         }
//!     }
//! }
//!
//! let toggle = Toggle { on: Property::new(false), toggled: Signal::new() };
//! toggle.set_on(true);
//! assert!(toggle.on.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A property that tracks changes.
///
/// `Property<T>` wraps a value and provides change detection. When `set()` is
/// called, it compares the new value with the current one and returns whether
/// the value actually changed.
///
/// `Property<T>` uses interior mutability with `RwLock`, so it can be shared
/// behind an `Arc` with signal slots.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
