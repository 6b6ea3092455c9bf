//! Logging macros for ergonomic message formatting with attributes.
//!
//! The message takes `format!` arguments; attributes follow a `;` as
//! `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use rust_console_handler::prelude::*;
//! use rust_console_handler::info;
//!
//! let logger = Logger::new(ConsoleHandler::new(None, []));
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With attributes
//! info!(logger, "request"; "status" => 200, "path" => "/x");
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_console_handler::prelude::*;
/// # let logger = Logger::new(ConsoleHandler::new(None, []));
/// use rust_console_handler::log;
/// log!(logger, LogLevel::INFO, "Simple message");
/// log!(logger, LogLevel::ERROR, "Error code: {}", 500; "retry" => false);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),* $(,)?) => {
        $logger.log(
            $level,
            format!($fmt $(, $arg)*),
            vec![$($crate::core::Attr::new($key, $value)),*],
        )
    };
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)*) => {
        $logger.log($level, format!($fmt $(, $arg)*), Vec::new())
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_handler::prelude::*;
/// # let logger = Logger::new(ConsoleHandler::new(None, []));
/// use rust_console_handler::debug;
/// debug!(logger, "Counter value: {}", 10; "counter" => "requests");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_handler::prelude::*;
/// # let logger = Logger::new(ConsoleHandler::new(None, []));
/// use rust_console_handler::info;
/// info!(logger, "Application started");
/// info!(logger, "Request {}", "served"; "status" => 200);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_handler::prelude::*;
/// # let logger = Logger::new(ConsoleHandler::new(None, []));
/// use rust_console_handler::warn;
/// warn!(logger, "Disk usage high"; "percent" => 85);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::WARN, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_handler::prelude::*;
/// # let logger = Logger::new(ConsoleHandler::new(None, []));
/// use rust_console_handler::error;
/// error!(logger, "Connection failed: {}", "timeout"; "attempt" => 3);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::ERROR, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{HandlerOptions, LogLevel, Logger, SharedBuffer};
    use crate::handlers::JsonHandler;

    fn capture() -> (SharedBuffer, Logger) {
        let buffer = SharedBuffer::new();
        let opts = HandlerOptions::new().with_level(LogLevel::DEBUG);
        let logger = Logger::new(JsonHandler::new(buffer.clone(), Some(opts)));
        (buffer, logger)
    }

    fn last_line(buffer: &SharedBuffer) -> serde_json::Value {
        let contents = buffer.contents();
        let line = contents.lines().last().expect("a logged line");
        serde_json::from_str(line).expect("valid JSON")
    }

    #[test]
    fn test_log_macro_formats_message() {
        let (buffer, logger) = capture();
        log!(logger, LogLevel::WARN, "Test {}", 42);

        let line = last_line(&buffer);
        assert_eq!(line["msg"], "Test 42");
        assert_eq!(line["level"], "WARN");
    }

    #[test]
    fn test_level_macros() {
        let (buffer, logger) = capture();
        debug!(logger, "d");
        info!(logger, "i");
        warn!(logger, "w");
        error!(logger, "e");

        let levels: Vec<String> = buffer
            .contents()
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["level"].to_string())
            .collect();
        assert_eq!(levels, vec!["\"DEBUG\"", "\"INFO\"", "\"WARN\"", "\"ERROR\""]);
    }

    #[test]
    fn test_macro_attributes() {
        let (buffer, logger) = capture();
        let path = "/x";
        info!(logger, "request {}", "done"; "status" => 200, "path" => path);

        let line = last_line(&buffer);
        assert_eq!(line["msg"], "request done");
        assert_eq!(line["status"], 200);
        assert_eq!(line["path"], "/x");
    }
}
