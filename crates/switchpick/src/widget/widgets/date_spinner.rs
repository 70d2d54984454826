//! DateSpinner, a headless date control.
//!
//! The DateSpinner holds a year/month/day selection with:
//! - Optional minimum and maximum bounds that clamp every selection
//! - Day, month and year stepping, the way spinner wheels behave
//! - Display formatting
//!
//! # Example
//!
//! ```
//! use switchpick::DateFields;
//! use switchpick::widget::widgets::DateSpinner;
//!
//! let mut spinner = DateSpinner::new().with_date(DateFields::new(2025, 0, 31).unwrap());
//!
//! spinner.date_changed.connect(|date| {
//!     println!("Date changed: {}", date);
//! });
//!
//! // February has no 31st; the day is clamped
//! spinner.step_month(1);
//! assert_eq!(spinner.date().day(), 28);
//! ```

use chrono::{Datelike, Local, Months, NaiveDate, TimeDelta};
use switchpick_core::Signal;
use switchpick_core::logging::targets;

use crate::timestamp::{DateFields, Timestamp};
use crate::widget::controls::DateControl;

/// Display format for dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// Short format: MM/DD/YYYY
    #[default]
    Short,
    /// Long format: Month DD, YYYY
    Long,
    /// ISO format: YYYY-MM-DD
    ISO,
}

/// A date control with no rendering of its own.
///
/// # Signals
///
/// - `date_changed(DateFields)`: Emitted when the user changes the date
pub struct DateSpinner {
    /// Current date value.
    date: DateFields,

    /// Earliest selectable date.
    minimum_date: Option<NaiveDate>,

    /// Latest selectable date.
    maximum_date: Option<NaiveDate>,

    /// Display format.
    display_format: DateFormat,

    /// Signal emitted when the user changes the date.
    pub date_changed: Signal<DateFields>,
}

impl DateSpinner {
    /// Create a new DateSpinner showing today's date.
    pub fn new() -> Self {
        Self {
            date: DateFields::from_naive(Local::now().date_naive()),
            minimum_date: None,
            maximum_date: None,
            display_format: DateFormat::Short,
            date_changed: Signal::new(),
        }
    }

    /// Set date using builder pattern.
    pub fn with_date(mut self, date: DateFields) -> Self {
        self.date = self.clamp(date);
        self
    }

    // =========================================================================
    // Date Access
    // =========================================================================

    /// Get the current date.
    pub fn date(&self) -> DateFields {
        self.date
    }

    /// Select a date as the user would.
    ///
    /// The date is clamped into the bounds. Emits `date_changed` if the shown
    /// date changed. Returns the date now shown.
    pub fn select_date(&mut self, date: DateFields) -> DateFields {
        let clamped = self.clamp(date);
        if clamped != date {
            tracing::debug!(
                target: targets::CONTROLS,
                requested = %date,
                shown = %clamped,
                "date selection clamped to bounds"
            );
        }
        if clamped != self.date {
            self.date = clamped;
            self.date_changed.emit(clamped);
        }
        clamped
    }

    /// Move the day wheel by `days`, carrying into month and year.
    ///
    /// A step past the calendar range leaves the date where it is.
    pub fn step_day(&mut self, days: i64) -> DateFields {
        let current = self.date.naive();
        let target = TimeDelta::try_days(days)
            .and_then(|delta| current.checked_add_signed(delta))
            .unwrap_or(current);
        self.select_date(DateFields::from_naive(target))
    }

    /// Move the month wheel by `months`.
    ///
    /// The day of month is reduced when the target month is shorter.
    pub fn step_month(&mut self, months: i32) -> DateFields {
        let current = self.date.naive();
        let magnitude = Months::new(months.unsigned_abs());
        let target = if months >= 0 {
            current.checked_add_months(magnitude)
        } else {
            current.checked_sub_months(magnitude)
        };
        self.select_date(DateFields::from_naive(target.unwrap_or(current)))
    }

    /// Move the year wheel by `years`.
    ///
    /// February 29th becomes the 28th in a non-leap target year.
    pub fn step_year(&mut self, years: i32) -> DateFields {
        self.step_month(years.saturating_mul(12))
    }

    // =========================================================================
    // Date Constraints
    // =========================================================================

    /// Get the minimum date, if bounded.
    pub fn minimum_date(&self) -> Option<NaiveDate> {
        self.minimum_date
    }

    /// Set or clear the minimum date.
    ///
    /// A current date before the new bound is moved onto it without emitting
    /// `date_changed`.
    pub fn set_minimum_date(&mut self, date: Option<NaiveDate>) {
        self.minimum_date = date;
        self.date = self.clamp(self.date);
    }

    /// Get the maximum date, if bounded.
    pub fn maximum_date(&self) -> Option<NaiveDate> {
        self.maximum_date
    }

    /// Set or clear the maximum date.
    pub fn set_maximum_date(&mut self, date: Option<NaiveDate>) {
        self.maximum_date = date;
        self.date = self.clamp(self.date);
    }

    /// Clamp into the bounds. The maximum wins if the bounds cross.
    fn clamp(&self, date: DateFields) -> DateFields {
        let mut value = date.naive();
        if let Some(min) = self.minimum_date {
            value = value.max(min);
        }
        if let Some(max) = self.maximum_date {
            value = value.min(max);
        }
        DateFields::from_naive(value)
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Get the display format.
    pub fn display_format(&self) -> DateFormat {
        self.display_format
    }

    /// Set the display format.
    pub fn set_display_format(&mut self, format: DateFormat) {
        self.display_format = format;
    }

    /// The current date as display text.
    pub fn format_date(&self) -> String {
        let date = self.date.naive();
        match self.display_format {
            DateFormat::Short => format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year()),
            DateFormat::Long => date.format("%B %-d, %Y").to_string(),
            DateFormat::ISO => self.date.to_string(),
        }
    }
}

impl Default for DateSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl DateControl for DateSpinner {
    fn date(&self) -> DateFields {
        self.date
    }

    fn update_date(&mut self, date: DateFields) {
        self.date = self.clamp(date);
    }

    fn set_min_date(&mut self, bound: Option<Timestamp>) {
        self.set_minimum_date(bound.map(|ts| ts.date_fields().naive()));
    }

    fn set_max_date(&mut self, bound: Option<Timestamp>) {
        self.set_maximum_date(bound.map(|ts| ts.date_fields().naive()));
    }

    fn date_changed(&self) -> &Signal<DateFields> {
        &self.date_changed
    }
}

static_assertions::assert_impl_all!(DateSpinner: Send, Sync);
