//! Prelude module for switchpick.
//!
//! ```
//! use switchpick::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::{ConnectionId, Property, Signal};

// ============================================================================
// Values
// ============================================================================

pub use crate::timestamp::{CalendarField, DateFields, TimeFields, Timestamp};

// ============================================================================
// Controls
// ============================================================================

pub use crate::widget::controls::{DateControl, PickerTrigger, PickerView, TimeControl, ViewSwitcher};
pub use crate::widget::widgets::{
    DateSpinner, DateTimePicker, TimeSpinner, TriggerButton, ViewFlipper,
};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::{PickerConfig, TransitionConfig};
pub use crate::error::Error;
