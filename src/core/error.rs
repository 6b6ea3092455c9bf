//! Error types for the console handler

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The delegate handler failed while encoding a record
    #[error("error when calling inner handler's handle: {source}")]
    InnerHandler {
        #[source]
        source: Box<LoggerError>,
    },

    /// The delegate handler produced bytes that are not a JSON object
    #[error("error when decoding inner handler's output: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The decoded attributes could not be re-encoded for display
    #[error("error when marshaling attrs: {source}")]
    Marshal {
        #[source]
        source: serde_json::Error,
    },

    /// An attribute value has no JSON representation
    #[error("unsupported value for attribute '{key}': {reason}")]
    UnsupportedValue { key: String, reason: String },

    /// The configured time pattern is not a valid strftime pattern
    #[error("invalid time format pattern '{pattern}'")]
    TimeFormat { pattern: String },

    /// A level name could not be parsed
    #[error("invalid log level: '{input}'")]
    InvalidLevel { input: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Wrap an error returned by a delegate handler
    pub fn inner_handler(source: LoggerError) -> Self {
        LoggerError::InnerHandler {
            source: Box::new(source),
        }
    }

    /// Create an unsupported value error
    pub fn unsupported_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::UnsupportedValue {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a time format error
    pub fn time_format(pattern: impl Into<String>) -> Self {
        LoggerError::TimeFormat {
            pattern: pattern.into(),
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unsupported_value("ratio", "non-finite float");
        assert!(matches!(err, LoggerError::UnsupportedValue { .. }));

        let err = LoggerError::time_format("%Q");
        assert!(matches!(err, LoggerError::TimeFormat { .. }));

        let err = LoggerError::inner_handler(LoggerError::invalid_level("LOUD"));
        assert!(matches!(err, LoggerError::InnerHandler { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unsupported_value("ratio", "non-finite float");
        assert_eq!(
            err.to_string(),
            "unsupported value for attribute 'ratio': non-finite float"
        );

        let err = LoggerError::invalid_level("LOUD");
        assert_eq!(err.to_string(), "invalid log level: 'LOUD'");
    }

    #[test]
    fn test_inner_handler_wraps_source() {
        use std::error::Error;

        let err = LoggerError::inner_handler(LoggerError::unsupported_value("x", "NaN"));
        assert!(err
            .to_string()
            .starts_with("error when calling inner handler's handle"));
        let source = err.source().expect("inner error is the source");
        assert!(source.to_string().contains("'x'"));
    }

    #[test]
    fn test_decode_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{oops")
            .expect_err("malformed JSON");
        let err = LoggerError::Decode { source };
        assert!(err
            .to_string()
            .starts_with("error when decoding inner handler's output"));
    }
}
