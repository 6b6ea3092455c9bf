//! Console handler configuration
//!
//! Options are applied in order on top of [`ConsoleConfig::default`], so a
//! later option overrides an earlier one for the same field.

use super::timestamp::TimeFormat;
use serde::{Deserialize, Serialize};

/// Settings for rendering records on the console
///
/// # Examples
///
/// ```
/// use rust_console_handler::core::{ConsoleConfig, TimeFormat};
///
/// let config: ConsoleConfig = serde_json::from_str(r#"{"escape_html": true}"#).unwrap();
/// assert!(config.escape_html);
/// assert_eq!(config.time_format, TimeFormat::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Pattern for the timestamp at the start of each line
    pub time_format: TimeFormat,
    /// Escape `<`, `>` and `&` in the attribute block.
    /// Never applies to the message text.
    pub escape_html: bool,
    /// Emit ANSI color sequences
    pub colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::default(),
            escape_html: false,
            colors: true,
        }
    }
}

impl ConsoleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply options in order
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = ConsoleOption>) -> Self {
        for option in options {
            option.apply(&mut self);
        }
        self
    }
}

/// A single console handler setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOption {
    TimeFormat(TimeFormat),
    EscapeHtml(bool),
    Colors(bool),
}

impl ConsoleOption {
    pub fn apply(self, config: &mut ConsoleConfig) {
        match self {
            ConsoleOption::TimeFormat(format) => config.time_format = format,
            ConsoleOption::EscapeHtml(escape) => config.escape_html = escape,
            ConsoleOption::Colors(colors) => config.colors = colors,
        }
    }
}

/// Set the strftime pattern used for the timestamp
pub fn with_time_format(pattern: impl Into<TimeFormat>) -> ConsoleOption {
    ConsoleOption::TimeFormat(pattern.into())
}

/// Set whether to escape HTML in the attribute JSON. The default is false.
///
/// This does not escape HTML in the message.
pub fn with_escape_html(escape_html: bool) -> ConsoleOption {
    ConsoleOption::EscapeHtml(escape_html)
}

/// Enable or disable ANSI colors. The default is true.
pub fn with_colors(colors: bool) -> ConsoleOption {
    ConsoleOption::Colors(colors)
}
