//! TimeSpinner, a headless time-of-day control.
//!
//! Holds an hour/minute selection, wraps around midnight when stepped, and
//! formats itself in 12-hour or 24-hour style.

use switchpick_core::Signal;
use switchpick_core::logging::targets;

use crate::timestamp::{TimeFields, Timestamp};
use crate::widget::controls::TimeControl;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Display format for times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// 24-hour format: HH:MM
    #[default]
    Hour24,
    /// 12-hour format: h:MM AM/PM
    Hour12,
}

impl TimeFormat {
    /// Check if this format uses 12-hour clock.
    pub fn is_12_hour(&self) -> bool {
        matches!(self, TimeFormat::Hour12)
    }
}

/// A time control with no rendering of its own.
///
/// # Signals
///
/// - `time_changed(TimeFields)`: Emitted when the user changes the time
/// - `format_changed(TimeFormat)`: Emitted when the display format changes
pub struct TimeSpinner {
    /// Current time value.
    time: TimeFields,

    /// Display format.
    display_format: TimeFormat,

    /// Signal emitted when the user changes the time.
    pub time_changed: Signal<TimeFields>,
    /// Signal emitted when the display format changes.
    pub format_changed: Signal<TimeFormat>,
}

impl TimeSpinner {
    /// Create a new TimeSpinner showing the current time.
    pub fn new() -> Self {
        Self {
            time: Timestamp::now().time_fields(),
            display_format: TimeFormat::default(),
            time_changed: Signal::new(),
            format_changed: Signal::new(),
        }
    }

    /// Set time using builder pattern.
    pub fn with_time(mut self, time: TimeFields) -> Self {
        self.time = time;
        self
    }

    /// Get the current time.
    pub fn time(&self) -> TimeFields {
        self.time
    }

    /// Select a time as the user would. Emits `time_changed` if it differs.
    pub fn select_time(&mut self, time: TimeFields) {
        if self.time != time {
            self.time = time;
            tracing::trace!(target: targets::CONTROLS, %time, "time selected");
            self.time_changed.emit(time);
        }
    }

    /// Move the hour wheel, wrapping around midnight.
    pub fn step_hour(&mut self, hours: i32) {
        self.step_minutes(i64::from(hours) * 60);
    }

    /// Move the minute wheel, carrying into hours and wrapping around midnight.
    pub fn step_minute(&mut self, minutes: i32) {
        self.step_minutes(i64::from(minutes));
    }

    fn step_minutes(&mut self, delta: i64) {
        let current = i64::from(self.time.hour() * 60 + self.time.minute());
        let total = (current + delta).rem_euclid(MINUTES_PER_DAY);
        // rem_euclid keeps total in 0..1440, so both parts are in range
        if let Some(time) = TimeFields::new((total / 60) as u32, (total % 60) as u32) {
            self.select_time(time);
        }
    }

    /// Get the display format.
    pub fn display_format(&self) -> TimeFormat {
        self.display_format
    }

    /// Set the display format.
    pub fn set_display_format(&mut self, format: TimeFormat) {
        if self.display_format != format {
            self.display_format = format;
            self.format_changed.emit(format);
        }
    }

    /// The current time as display text.
    pub fn format_time(&self) -> String {
        let (hour, minute) = (self.time.hour(), self.time.minute());
        match self.display_format {
            TimeFormat::Hour24 => format!("{hour:02}:{minute:02}"),
            TimeFormat::Hour12 => {
                let suffix = if hour < 12 { "AM" } else { "PM" };
                let display_hour = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{display_hour}:{minute:02} {suffix}")
            }
        }
    }
}

impl Default for TimeSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeControl for TimeSpinner {
    fn time(&self) -> TimeFields {
        self.time
    }

    fn update_time(&mut self, time: TimeFields) {
        self.time = time;
    }

    fn set_hour_format_24(&mut self, use_24_hour: bool) {
        self.set_display_format(if use_24_hour {
            TimeFormat::Hour24
        } else {
            TimeFormat::Hour12
        });
    }

    fn is_hour_format_24(&self) -> bool {
        !self.display_format.is_12_hour()
    }

    fn time_changed(&self) -> &Signal<TimeFields> {
        &self.time_changed
    }
}

static_assertions::assert_impl_all!(TimeSpinner: Send, Sync);
