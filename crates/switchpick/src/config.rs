//! Picker configuration.
//!
//! A [`PickerConfig`] describes how a picker starts out: hour format, date
//! bounds, initial value and transition timing. It can be written by hand or
//! loaded from TOML or JSON. Every key is optional.
//!
//! ```
//! use switchpick::PickerConfig;
//!
//! let config = PickerConfig::from_toml_str(r#"
//!     hour_format_24 = false
//!     min_date_millis = 0
//!
//!     [transition]
//!     duration_ms = 150
//!     easing = "decelerate"
//! "#).unwrap();
//!
//! assert!(!config.hour_format_24);
//! assert_eq!(config.max_date_millis, None);
//! ```
//!
//! Bounds and the initial value are epoch milliseconds. An absent key means
//! "unbounded" (or "now" for the initial value).

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use switchpick_core::PerfSpan;
use switchpick_core::logging::targets;

use crate::error::{Error, Result};
use crate::timestamp::Timestamp;
use crate::widget::animation::{Animation, Easing};

/// Settings for the page-switch animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Length of a slide in milliseconds.
    pub duration_ms: u64,
    /// Easing curve for slides.
    pub easing: Easing,
}

impl TransitionConfig {
    /// The configured duration.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: Animation::DEFAULT_DURATION.as_millis() as u64,
            easing: Easing::default(),
        }
    }
}

/// How a picker is initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Display the time control in 24-hour style.
    pub hour_format_24: bool,
    /// Initial value; absent means the current time.
    pub initial_millis: Option<i64>,
    /// Earliest selectable date; absent means unbounded.
    pub min_date_millis: Option<i64>,
    /// Latest selectable date; absent means unbounded.
    pub max_date_millis: Option<i64>,
    /// Page-switch animation.
    pub transition: TransitionConfig,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            hour_format_24: true,
            initial_millis: None,
            min_date_millis: None,
            max_date_millis: None,
            transition: TransitionConfig::default(),
        }
    }
}

impl PickerConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::config_parse(err.to_string()))
    }

    /// Parse a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| Error::config_parse(err.to_string()))
    }

    /// Load from a file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let _span = PerfSpan::new("load_picker_config");
        let text = std::fs::read_to_string(path).map_err(|err| Error::config_io(path, err))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        };
        match &config {
            Ok(_) => tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded picker configuration"),
            Err(err) => tracing::warn!(target: targets::CONFIG, path = %path.display(), %err, "invalid picker configuration"),
        }
        config
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|err| Error::config_parse(err.to_string()))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| Error::config_parse(err.to_string()))
    }

    /// The initial value, or now.
    pub fn initial_timestamp(&self) -> Result<Timestamp> {
        match self.initial_millis {
            Some(millis) => Timestamp::from_epoch_millis(millis),
            None => Ok(Timestamp::now()),
        }
    }

    /// The minimum bound.
    pub fn min_date(&self) -> Result<Option<Timestamp>> {
        self.min_date_millis.map(Timestamp::from_epoch_millis).transpose()
    }

    /// The maximum bound.
    pub fn max_date(&self) -> Result<Option<Timestamp>> {
        self.max_date_millis.map(Timestamp::from_epoch_millis).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert!(config.hour_format_24);
        assert_eq!(config.min_date().unwrap(), None);
        assert_eq!(config.max_date().unwrap(), None);
        assert_eq!(config.transition.duration(), Duration::from_millis(300));
        assert_eq!(config.transition.easing, Easing::EaseInOut);
    }

    #[test]
    fn test_json() {
        let config = PickerConfig::from_json_str(
            r#"{ "hour_format_24": false, "initial_millis": 1389778200000,
                 "transition": { "easing": "linear" } }"#,
        )
        .unwrap();
        assert!(!config.hour_format_24);
        assert_eq!(config.initial_millis, Some(1_389_778_200_000));
        assert_eq!(config.transition.easing, Easing::Linear);
        assert_eq!(config.transition.duration_ms, 300);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            PickerConfig::from_toml_str("hour_format_24 = \"yes\""),
            Err(Error::ConfigParse { .. })
        ));
        assert!(matches!(
            PickerConfig::from_json_str("{"),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_out_of_range_bound() {
        let config = PickerConfig {
            max_date_millis: Some(i64::MIN),
            ..Default::default()
        };
        assert!(matches!(
            config.max_date(),
            Err(Error::TimestampOutOfRange(i64::MIN))
        ));
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let config = PickerConfig {
            hour_format_24: false,
            min_date_millis: Some(0),
            transition: TransitionConfig {
                duration_ms: 120,
                easing: Easing::Decelerate,
            },
            ..Default::default()
        };

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(config.to_toml_string().unwrap().as_bytes())
            .unwrap();

        assert_eq!(PickerConfig::load(file.path()).unwrap(), config);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{ "max_date_millis": 86400000 }"#).unwrap();

        let config = PickerConfig::load(file.path()).unwrap();
        assert_eq!(config.max_date_millis, Some(86_400_000));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PickerConfig::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::ConfigIo { .. })));
    }
}
