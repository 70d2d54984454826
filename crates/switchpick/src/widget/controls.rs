//! Seams between the composite picker and the controls it drives.
//!
//! A [`DateTimePicker`](crate::widget::widgets::DateTimePicker) does not draw
//! anything itself. It owns a date control, a time control and a view
//! switcher, and talks to them only through the traits in this module. The
//! crate ships headless implementations
//! ([`DateSpinner`](crate::widget::widgets::DateSpinner),
//! [`TimeSpinner`](crate::widget::widgets::TimeSpinner),
//! [`ViewFlipper`](crate::widget::widgets::ViewFlipper)); a host toolkit can
//! supply its own.
//!
//! Programmatic updates (`update_date`, `update_time`) are silent. The change
//! signals are reserved for edits made by the user.

use switchpick_core::Signal;

use crate::timestamp::{DateFields, TimeFields, Timestamp};
use crate::widget::animation::Animation;

/// The two pages a picker can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerView {
    /// The date control.
    #[default]
    Date,
    /// The time control.
    Time,
}

impl PickerView {
    /// The other page.
    pub fn other(self) -> Self {
        match self {
            PickerView::Date => PickerView::Time,
            PickerView::Time => PickerView::Date,
        }
    }

    /// The trigger that brings this page to the front.
    pub fn trigger(self) -> PickerTrigger {
        match self {
            PickerView::Date => PickerTrigger::ShowDate,
            PickerView::Time => PickerTrigger::ShowTime,
        }
    }
}

/// The two buttons that switch pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerTrigger {
    /// Bring the date control to the front.
    ShowDate,
    /// Bring the time control to the front.
    ShowTime,
}

impl PickerTrigger {
    /// The page this trigger shows.
    pub fn target(self) -> PickerView {
        match self {
            PickerTrigger::ShowDate => PickerView::Date,
            PickerTrigger::ShowTime => PickerView::Time,
        }
    }
}

/// A control for choosing a calendar date.
pub trait DateControl {
    /// The date currently shown.
    fn date(&self) -> DateFields;

    /// Show `date`, clamped into the configured bounds. Does not emit
    /// [`date_changed`](Self::date_changed).
    fn update_date(&mut self, date: DateFields);

    /// Set or clear the earliest selectable date.
    ///
    /// Only the date part of the bound is used.
    fn set_min_date(&mut self, bound: Option<Timestamp>);

    /// Set or clear the latest selectable date.
    fn set_max_date(&mut self, bound: Option<Timestamp>);

    /// Emitted with the new date whenever the user edits the control.
    fn date_changed(&self) -> &Signal<DateFields>;
}

/// A control for choosing a time of day.
pub trait TimeControl {
    /// The time currently shown.
    fn time(&self) -> TimeFields;

    /// Show `time`. Does not emit [`time_changed`](Self::time_changed).
    fn update_time(&mut self, time: TimeFields);

    /// Switch between 24-hour and 12-hour display.
    fn set_hour_format_24(&mut self, use_24_hour: bool);

    /// Whether the control displays 24-hour time.
    fn is_hour_format_24(&self) -> bool;

    /// Emitted with the new time whenever the user edits the control.
    fn time_changed(&self) -> &Signal<TimeFields>;
}

/// A container that shows one registered view at a time.
pub trait ViewSwitcher {
    /// Register a view. Returns its index.
    fn add_view(&mut self, view: PickerView) -> usize;

    /// The view in front, if any are registered.
    fn current_view(&self) -> Option<PickerView>;

    /// Advance to the next view, wrapping after the last.
    fn show_next(&mut self);

    /// Go back to the previous view, wrapping before the first.
    fn show_previous(&mut self);

    /// Animation for the view that comes to the front.
    fn set_in_animation(&mut self, animation: Animation);

    /// Animation for the view that leaves.
    fn set_out_animation(&mut self, animation: Animation);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_trigger_pairing() {
        for view in [PickerView::Date, PickerView::Time] {
            assert_eq!(view.trigger().target(), view);
            assert_ne!(view.other(), view);
            assert_eq!(view.other().other(), view);
        }
        assert_eq!(PickerView::default(), PickerView::Date);
    }
}
