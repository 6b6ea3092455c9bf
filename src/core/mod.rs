//! Core handler types and traits

pub mod attr;
pub mod config;
pub mod error;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod record;
pub mod timestamp;

pub use attr::{Attr, Value};
pub use config::{with_colors, with_escape_html, with_time_format, ConsoleConfig, ConsoleOption};
pub use error::{LoggerError, Result};
pub use handler::{
    shared_writer, Handler, HandlerOptions, ReplaceAttr, SharedBuffer, SharedWriter, LEVEL_KEY,
    MESSAGE_KEY, SOURCE_KEY, TIME_KEY,
};
pub use log_level::{LevelVar, Leveler, LogLevel};
pub use logger::Logger;
pub use record::{Record, Source};
pub use timestamp::{TimeFormat, DEFAULT_TIME_FORMAT};
