//! The point-in-time value a picker edits.
//!
//! [`Timestamp`] is an immutable wall-clock date-time in the local time zone.
//! A picker never mutates one in place: every edit builds a new value from the
//! half that changed ([`DateFields`] or [`TimeFields`]) and the half that did
//! not.
//!
//! Months are zero-based throughout (January is `0`), matching the field
//! layout of mobile date controls.
//!
//! # Example
//!
//! ```
//! use switchpick::{DateFields, TimeFields, Timestamp};
//!
//! let ts = Timestamp::from_fields(
//!     DateFields::new(2014, 0, 15).unwrap(),
//!     TimeFields::new(9, 30).unwrap(),
//! );
//! let moved = ts.with_date(DateFields::new(2014, 2, 20).unwrap());
//! assert_eq!((moved.month(), moved.day(), moved.hour()), (2, 20, 9));
//! ```

use std::fmt;

use chrono::{
    DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Timelike,
};

use crate::error::{Error, Result};

/// A calendar date with a zero-based month.
///
/// Always holds a valid date; construction validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateFields {
    date: NaiveDate,
}

impl DateFields {
    /// Build from year, zero-based month and day of month.
    ///
    /// Returns `None` when the three do not name a real date.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month.checked_add(1)?, day).map(Self::from_naive)
    }

    /// Like [`DateFields::new`], reporting invalid input as an error.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(year, month, day).ok_or(Error::InvalidDate { year, month, day })
    }

    /// Wrap a chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Zero-based month (January is `0`).
    pub fn month(&self) -> u32 {
        self.date.month0()
    }

    /// Day of month, starting at `1`.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for DateFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

/// An hour (0-23) and minute (0-59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeFields {
    time: NaiveTime,
}

impl TimeFields {
    /// Build from hour of day and minute.
    ///
    /// Returns `None` when either is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self { time })
    }

    /// Like [`TimeFields::new`], reporting invalid input as an error.
    pub fn try_new(hour: u32, minute: u32) -> Result<Self> {
        Self::new(hour, minute).ok_or(Error::InvalidTime { hour, minute })
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Minute, 0-59.
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// The underlying chrono time, seconds always zero.
    pub fn naive(&self) -> NaiveTime {
        self.time
    }
}

impl fmt::Display for TimeFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Individual fields readable from a [`Timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarField {
    /// The year.
    Year,
    /// Zero-based month.
    Month,
    /// Day of month.
    DayOfMonth,
    /// Hour of day, 0-23.
    HourOfDay,
    /// Minute of hour.
    Minute,
    /// Second of minute.
    Second,
}

/// A single point in time, as shown on a local wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    local: NaiveDateTime,
}

impl Timestamp {
    /// The current local time.
    pub fn now() -> Self {
        Self {
            local: Local::now().naive_local(),
        }
    }

    /// Wrap a local chrono date-time.
    pub fn from_naive(local: NaiveDateTime) -> Self {
        Self { local }
    }

    /// Combine a date half and a time half. Seconds are zero.
    pub fn from_fields(date: DateFields, time: TimeFields) -> Self {
        Self {
            local: NaiveDateTime::new(date.naive(), time.naive()),
        }
    }

    /// Interpret milliseconds since the Unix epoch in the local time zone.
    pub fn from_epoch_millis(millis: i64) -> Result<Self> {
        let utc =
            DateTime::from_timestamp_millis(millis).ok_or(Error::TimestampOutOfRange(millis))?;
        Ok(Self {
            local: utc.with_timezone(&Local).naive_local(),
        })
    }

    /// Milliseconds since the Unix epoch.
    ///
    /// An ambiguous local time (clocks turned back) resolves to the earlier
    /// instant. A local time skipped by a daylight-saving jump is rolled
    /// forward one hour.
    pub fn epoch_millis(&self) -> i64 {
        match Local.from_local_datetime(&self.local) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
            LocalResult::None => {
                let shifted = self.local + TimeDelta::hours(1);
                Local
                    .from_local_datetime(&shifted)
                    .earliest()
                    .map(|dt| dt.timestamp_millis())
                    .unwrap_or_else(|| self.local.and_utc().timestamp_millis())
            }
        }
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.local.year()
    }

    /// Zero-based month (January is `0`).
    pub fn month(&self) -> u32 {
        self.local.month0()
    }

    /// Day of month.
    pub fn day(&self) -> u32 {
        self.local.day()
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    /// Minute of hour.
    pub fn minute(&self) -> u32 {
        self.local.minute()
    }

    /// Read one calendar field.
    pub fn field(&self, field: CalendarField) -> i32 {
        match field {
            CalendarField::Year => self.year(),
            CalendarField::Month => self.month() as i32,
            CalendarField::DayOfMonth => self.day() as i32,
            CalendarField::HourOfDay => self.hour() as i32,
            CalendarField::Minute => self.minute() as i32,
            CalendarField::Second => self.local.second() as i32,
        }
    }

    /// The date half.
    pub fn date_fields(&self) -> DateFields {
        DateFields::from_naive(self.local.date())
    }

    /// The time half.
    pub fn time_fields(&self) -> TimeFields {
        let time = self.local.time();
        TimeFields {
            time: time - sub_minute(time),
        }
    }

    /// A copy with the date replaced and the time of day kept.
    pub fn with_date(&self, date: DateFields) -> Self {
        Self {
            local: NaiveDateTime::new(date.naive(), self.local.time()),
        }
    }

    /// A copy with hour and minute replaced; date and seconds are kept.
    pub fn with_time(&self, time: TimeFields) -> Self {
        let carried = sub_minute(self.local.time());
        Self {
            local: NaiveDateTime::new(self.local.date(), time.naive() + carried),
        }
    }

    /// The underlying chrono date-time.
    pub fn naive(&self) -> NaiveDateTime {
        self.local
    }
}

/// Seconds and sub-second part of `time`, the part a picker never shows.
fn sub_minute(time: NaiveTime) -> TimeDelta {
    // Leap-second representation pushes nanoseconds past one second.
    TimeDelta::seconds(i64::from(time.second()))
        + TimeDelta::nanoseconds(i64::from(time.nanosecond() % 1_000_000_000))
}

impl From<NaiveDateTime> for Timestamp {
    fn from(local: NaiveDateTime) -> Self {
        Self::from_naive(local)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local.format("%Y-%m-%d %H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        Timestamp::from_fields(
            DateFields::new(y, m, d).unwrap(),
            TimeFields::new(h, min).unwrap(),
        )
    }

    #[test]
    fn test_month_is_zero_based() {
        let t = ts(2014, 0, 15, 9, 30);
        assert_eq!(t.year(), 2014);
        assert_eq!(t.month(), 0);
        assert_eq!(t.day(), 15);
        assert_eq!(t.naive().month(), 1);
        assert_eq!(t.to_string(), "2014-01-15 09:30");
    }

    #[test]
    fn test_invalid_fields_rejected() {
        assert!(DateFields::new(2014, 1, 30).is_none());
        assert!(DateFields::new(2014, 12, 1).is_none());
        assert!(DateFields::new(2014, u32::MAX, 1).is_none());
        assert!(TimeFields::new(24, 0).is_none());
        assert!(TimeFields::new(0, 60).is_none());
        assert!(matches!(
            DateFields::try_new(2015, 1, 29),
            Err(Error::InvalidDate { day: 29, .. })
        ));
        assert!(matches!(
            TimeFields::try_new(7, 75),
            Err(Error::InvalidTime { minute: 75, .. })
        ));
    }

    #[test]
    fn test_with_date_keeps_time() {
        let t = ts(2014, 0, 15, 9, 30).with_date(DateFields::new(2014, 2, 20).unwrap());
        assert_eq!(t, ts(2014, 2, 20, 9, 30));
    }

    #[test]
    fn test_with_time_keeps_date_and_seconds() {
        let base = Timestamp::from_naive(
            NaiveDate::from_ymd_opt(2020, 6, 1)
                .unwrap()
                .and_hms_milli_opt(8, 15, 42, 250)
                .unwrap(),
        );
        let t = base.with_time(TimeFields::new(23, 59).unwrap());
        assert_eq!(t.date_fields(), base.date_fields());
        assert_eq!((t.hour(), t.minute()), (23, 59));
        assert_eq!(t.field(CalendarField::Second), 42);
        assert_eq!(t.naive().nanosecond(), 250_000_000);
    }

    #[test]
    fn test_field_accessor() {
        let t = ts(1999, 11, 31, 23, 5);
        assert_eq!(t.field(CalendarField::Year), 1999);
        assert_eq!(t.field(CalendarField::Month), 11);
        assert_eq!(t.field(CalendarField::DayOfMonth), 31);
        assert_eq!(t.field(CalendarField::HourOfDay), 23);
        assert_eq!(t.field(CalendarField::Minute), 5);
        assert_eq!(t.field(CalendarField::Second), 0);
    }

    #[test]
    fn test_epoch_millis_round_trip() {
        let t = ts(2014, 0, 15, 9, 30);
        let millis = t.epoch_millis();
        assert_eq!(Timestamp::from_epoch_millis(millis).unwrap(), t);
    }

    #[test]
    fn test_epoch_millis_out_of_range() {
        assert!(matches!(
            Timestamp::from_epoch_millis(i64::MAX),
            Err(Error::TimestampOutOfRange(i64::MAX))
        ));
    }

    #[test]
    fn test_decompose() {
        let t = ts(2030, 4, 9, 0, 1);
        assert_eq!(t.date_fields(), DateFields::new(2030, 4, 9).unwrap());
        assert_eq!(t.time_fields(), TimeFields::new(0, 1).unwrap());
        assert_eq!(t.time_fields().to_string(), "00:01");
        assert_eq!(t.date_fields().to_string(), "2030-05-09");
    }
}
