//! Logger front-end that builds records and hands them to a handler

use super::{
    attr::Attr,
    error::Result,
    handler::Handler,
    log_level::LogLevel,
    record::{Record, Source},
};
use std::panic::Location;
use std::sync::Arc;

/// Cheap-to-clone logging front-end over a [`Handler`]
///
/// # Example
///
/// ```
/// use rust_console_handler::prelude::*;
///
/// let logger = Logger::new(ConsoleHandler::new(None, []));
/// let requests = logger.with(vec![Attr::new("component", "http")]);
/// requests.info("request", vec![Attr::new("status", 200), Attr::new("path", "/x")]);
/// ```
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn from_boxed(handler: Box<dyn Handler>) -> Self {
        Self {
            handler: Arc::from(handler),
        }
    }

    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }

    /// Logger whose records all carry `attrs`
    #[must_use]
    pub fn with(&self, attrs: Vec<Attr>) -> Logger {
        if attrs.is_empty() {
            return self.clone();
        }
        Self::from_boxed(self.handler.with_attrs(attrs))
    }

    /// Logger that nests later attributes under `name`
    #[must_use]
    pub fn with_group(&self, name: &str) -> Logger {
        if name.is_empty() {
            return self.clone();
        }
        Self::from_boxed(self.handler.with_group(name))
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.handler.enabled(level)
    }

    /// Log a record, reporting handler failures on stderr
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>, attrs: Vec<Attr>) {
        if let Err(e) = self.try_log(level, message, attrs) {
            eprintln!("[LOGGER ERROR] Handler failed: {}", e);
        }
    }

    /// Log a record and return any handler failure
    #[track_caller]
    pub fn try_log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        attrs: Vec<Attr>,
    ) -> Result<()> {
        if !self.handler.enabled(level) {
            return Ok(());
        }

        let record = Record::new(level, message)
            .with_source(Source::from(Location::caller()))
            .with_attrs(attrs);
        self.handler.handle(&record)
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, attrs: Vec<Attr>) {
        self.log(LogLevel::DEBUG, message, attrs);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>, attrs: Vec<Attr>) {
        self.log(LogLevel::INFO, message, attrs);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>, attrs: Vec<Attr>) {
        self.log(LogLevel::WARN, message, attrs);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>, attrs: Vec<Attr>) {
        self.log(LogLevel::ERROR, message, attrs);
    }
}
