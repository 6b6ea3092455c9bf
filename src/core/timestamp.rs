//! Timestamp formatting for the console prefix
//!
//! Patterns are chrono strftime strings. The default renders a 24-hour clock
//! as `2024-01-02 [03:04:05]`.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Default console timestamp pattern: `YYYY-MM-DD [HH:MM:SS]`
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d [%H:%M:%S]";

/// strftime pattern used to render record timestamps
///
/// # Examples
///
/// ```
/// use rust_console_handler::core::TimeFormat;
/// use chrono::{Local, TimeZone};
///
/// let time = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single().unwrap();
/// let rendered = TimeFormat::default().format(&time).unwrap();
/// assert_eq!(rendered, "2024-01-02 [03:04:05]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeFormat(String);

impl TimeFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        TimeFormat(pattern.into())
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Check the pattern against chrono's strftime parser
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !StrftimeItems::new(&self.0).any(|item| matches!(item, Item::Error))
    }

    /// Render a timestamp, failing instead of panicking on a bad pattern
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if !self.is_valid() {
            return Err(LoggerError::time_format(&self.0));
        }
        let mut out = String::new();
        write!(out, "{}", datetime.format(&self.0))
            .map_err(|_| LoggerError::time_format(&self.0))?;
        Ok(out)
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat(DEFAULT_TIME_FORMAT.to_string())
    }
}

impl From<&str> for TimeFormat {
    fn from(pattern: &str) -> Self {
        TimeFormat::new(pattern)
    }
}

impl From<String> for TimeFormat {
    fn from(pattern: String) -> Self {
        TimeFormat(pattern)
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Utc};

    fn fixed_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_default_format() {
        let result = TimeFormat::default().format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08 [10:30:45]");
    }

    #[test]
    fn test_default_uses_24_hour_clock() {
        let evening = Local.with_ymd_and_hms(2024, 6, 1, 21, 5, 9).single().unwrap();
        let result = TimeFormat::default().format(&evening).unwrap();
        assert_eq!(result, "2024-06-01 [21:05:09]");
    }

    #[test]
    fn test_custom_format() {
        let format = TimeFormat::new("%d/%b/%Y:%H:%M:%S");
        let result = format.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "08/Jan/2025:10:30:45");
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let format = TimeFormat::new("%Y-%");
        assert!(!format.is_valid());
        let err = format.format(&fixed_datetime()).unwrap_err();
        assert!(matches!(err, LoggerError::TimeFormat { .. }));
    }

    #[test]
    fn test_serialization_is_transparent() {
        let json = serde_json::to_string(&TimeFormat::default()).unwrap();
        assert_eq!(json, "\"%Y-%m-%d [%H:%M:%S]\"");

        let format: TimeFormat = serde_json::from_str("\"%H:%M\"").unwrap();
        assert_eq!(format.pattern(), "%H:%M");
    }
}
