//! # Rust Console Handler
//!
//! A human-readable console handler for structured log records.
//!
//! Each record is printed as one colorized line, timestamp, level and message,
//! followed by its attributes as indented JSON:
//!
//! ```text
//! 2024-01-02 [03:04:05] INFO: request {
//!   "path": "/x",
//!   "status": 200
//! }
//! ```
//!
//! ## Features
//!
//! - **Readable**: colors per level, pretty-printed attributes
//! - **Structured**: attributes are normalized through a JSON handler, so groups,
//!   handler attributes and `replace_attr` hooks behave like the JSON output
//! - **Thread Safe**: handlers derived from one another share a single scratch buffer
//! - **Pluggable**: works directly, through [`Logger`], or behind the `log` facade

#[cfg(feature = "log-bridge")]
pub mod bridge;
pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        with_colors, with_escape_html, with_time_format, Attr, ConsoleConfig, ConsoleOption,
        Handler, HandlerOptions, LevelVar, Leveler, LogLevel, Logger, LoggerError, Record,
        Result, SharedBuffer, Source, TimeFormat, Value,
    };
    pub use crate::handlers::{ConsoleHandler, JsonHandler};
}

pub use crate::core::{
    with_colors, with_escape_html, with_time_format, Attr, ConsoleConfig, ConsoleOption, Handler,
    HandlerOptions, LevelVar, Leveler, LogLevel, Logger, LoggerError, Record, Result,
    SharedBuffer, Source, TimeFormat, Value,
};
pub use handlers::{ConsoleHandler, JsonHandler};
