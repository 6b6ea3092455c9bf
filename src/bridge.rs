//! Bridge from the `log` facade to a [`Handler`]
//!
//! Lets libraries that log through `log::info!` and friends render with any
//! handler of this crate, typically a [`ConsoleHandler`](crate::handlers::ConsoleHandler).

use crate::core::{Handler, LogLevel, Logger, Record, Source};

/// Level used for `log::Level::Trace`, four below DEBUG
pub const TRACE: LogLevel = LogLevel::new(LogLevel::DEBUG.value() - 4);

pub fn level_from_log(level: log::Level) -> LogLevel {
    match level {
        log::Level::Error => LogLevel::ERROR,
        log::Level::Warn => LogLevel::WARN,
        log::Level::Info => LogLevel::INFO,
        log::Level::Debug => LogLevel::DEBUG,
        log::Level::Trace => TRACE,
    }
}

/// `log::Log` implementation forwarding to a handler
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self {
            logger: Logger::new(handler),
        }
    }

    pub fn from_logger(logger: Logger) -> Self {
        Self { logger }
    }

    fn to_record(record: &log::Record<'_>) -> Record {
        let mut source = Source::new(record.file().unwrap_or("unknown"), record.line().unwrap_or(0));
        if let Some(module_path) = record.module_path() {
            source = source.with_module_path(module_path);
        }

        Record::new(level_from_log(record.level()), record.args().to_string()).with_source(source)
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger.enabled(level_from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Err(e) = self.logger.handler().handle(&Self::to_record(record)) {
            eprintln!("[LOGGER ERROR] Handler failed: {}", e);
        }
    }

    fn flush(&self) {}
}

/// Install `handler` as the global `log` logger
///
/// Fails if another logger was installed first.
pub fn init<H: Handler + 'static>(
    handler: H,
    max_level: log::LevelFilter,
) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(handler)))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{with_colors, HandlerOptions, SharedBuffer};
    use crate::handlers::ConsoleHandler;
    use log::Log;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_from_log(log::Level::Error), LogLevel::ERROR);
        assert_eq!(level_from_log(log::Level::Warn), LogLevel::WARN);
        assert_eq!(level_from_log(log::Level::Info), LogLevel::INFO);
        assert_eq!(level_from_log(log::Level::Debug), LogLevel::DEBUG);
        assert_eq!(TRACE.to_string(), "DEBUG-4");
    }

    #[test]
    fn test_bridge_renders_through_console() {
        let out = SharedBuffer::new();
        let opts = HandlerOptions::new().with_level(TRACE);
        let bridge = LogBridge::new(ConsoleHandler::with_writer(
            out.clone(),
            Some(opts),
            [with_colors(false)],
        ));

        bridge.log(
            &log::Record::builder()
                .args(format_args!("cache warmed"))
                .level(log::Level::Trace)
                .target("app")
                .build(),
        );

        assert!(out.contents().contains(" DEBUG-4: cache warmed\n"));
    }

    #[test]
    fn test_bridge_respects_handler_level() {
        let out = SharedBuffer::new();
        let bridge = LogBridge::new(ConsoleHandler::with_writer(out.clone(), None, []));

        let metadata = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(!bridge.enabled(&metadata));

        bridge.log(
            &log::Record::builder()
                .args(format_args!("hidden"))
                .level(log::Level::Debug)
                .build(),
        );
        assert!(out.is_empty());
    }
}
