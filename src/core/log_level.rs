//! Log level definitions
//!
//! Levels are ordered integers. The four named levels are spaced four apart so
//! that applications can define levels in between; those render relative to
//! the nearest named level below them (`DEBUG+2`, `INFO-1`, `ERROR+4`).

use super::error::LoggerError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LogLevel(i32);

impl LogLevel {
    pub const DEBUG: LogLevel = LogLevel(-4);
    pub const INFO: LogLevel = LogLevel(0);
    pub const WARN: LogLevel = LogLevel(4);
    pub const ERROR: LogLevel = LogLevel(8);

    /// Create a level from its integer value
    pub const fn new(value: i32) -> Self {
        LogLevel(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether this is one of the four named levels
    pub fn is_named(self) -> bool {
        matches!(
            self,
            LogLevel::DEBUG | LogLevel::INFO | LogLevel::WARN | LogLevel::ERROR
        )
    }

    /// Console color for the named levels; custom levels are left uncolored
    pub fn color_code(self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            LogLevel::DEBUG => Some(BrightBlack),
            LogLevel::INFO => Some(Cyan),
            LogLevel::WARN => Some(BrightYellow),
            LogLevel::ERROR => Some(BrightRed),
            _ => None,
        }
    }

    fn base(self) -> (&'static str, LogLevel) {
        if self < LogLevel::INFO {
            ("DEBUG", LogLevel::DEBUG)
        } else if self < LogLevel::WARN {
            ("INFO", LogLevel::INFO)
        } else if self < LogLevel::ERROR {
            ("WARN", LogLevel::WARN)
        } else {
            ("ERROR", LogLevel::ERROR)
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, base) = self.base();
        let offset = i64::from(self.0) - i64::from(base.0);
        if offset == 0 {
            f.write_str(name)
        } else {
            write!(f, "{}{:+}", name, offset)
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (name, offset) = match trimmed.find(['+', '-']) {
            Some(idx) => {
                let offset: i32 = trimmed[idx..]
                    .parse()
                    .map_err(|_| LoggerError::invalid_level(s))?;
                (&trimmed[..idx], offset)
            }
            None => (trimmed, 0),
        };

        let base = match name.to_uppercase().as_str() {
            "DEBUG" => LogLevel::DEBUG,
            "INFO" => LogLevel::INFO,
            "WARN" | "WARNING" => LogLevel::WARN,
            "ERROR" => LogLevel::ERROR,
            _ => return Err(LoggerError::invalid_level(s)),
        };

        base.0
            .checked_add(offset)
            .map(LogLevel)
            .ok_or_else(|| LoggerError::invalid_level(s))
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Source of a minimum level
///
/// Implemented by a fixed [`LogLevel`] and by [`LevelVar`], whose value can be
/// changed while handlers that reference it are in use.
pub trait Leveler: Send + Sync {
    fn level(&self) -> LogLevel;
}

impl Leveler for LogLevel {
    fn level(&self) -> LogLevel {
        *self
    }
}

/// Shared, runtime-adjustable minimum level
///
/// Clones share the same underlying value.
///
/// # Example
///
/// ```
/// use rust_console_handler::core::{Leveler, LevelVar, LogLevel};
///
/// let var = LevelVar::new(LogLevel::INFO);
/// let shared = var.clone();
/// var.set(LogLevel::DEBUG);
/// assert_eq!(shared.level(), LogLevel::DEBUG);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LevelVar {
    level: Arc<RwLock<LogLevel>>,
}

impl LevelVar {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: Arc::new(RwLock::new(level)),
        }
    }

    pub fn set(&self, level: LogLevel) {
        *self.level.write() = level;
    }
}

impl Leveler for LevelVar {
    fn level(&self) -> LogLevel {
        *self.level.read()
    }
}
