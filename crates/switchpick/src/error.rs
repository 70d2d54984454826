//! Error types for switchpick.

use std::path::PathBuf;

/// Result type alias for switchpick operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or configuring a picker.
///
/// The picker operations themselves never fail; errors only come from
/// converting external values (epoch milliseconds, raw fields) and from
/// loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Epoch milliseconds outside the representable calendar range.
    #[error("Timestamp {0} ms is outside the supported date range")]
    TimestampOutOfRange(i64),

    /// Year, month and day do not form a calendar date.
    #[error("Invalid date: year {year}, month {month} (zero-based), day {day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Hour and minute do not form a time of day.
    #[error("Invalid time: {hour}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    /// Configuration text could not be parsed.
    #[error("Failed to parse picker configuration: {message}")]
    ConfigParse { message: String },

    /// Configuration file could not be read.
    #[error("Failed to read picker configuration '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration parse error.
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
        }
    }

    /// Create a configuration I/O error.
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}
