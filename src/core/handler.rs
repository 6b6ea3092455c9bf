//! Handler trait for record output destinations

use super::attr::Attr;
use super::error::Result;
use super::log_level::{Leveler, LogLevel};
use super::record::Record;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Key of the built-in timestamp attribute
pub const TIME_KEY: &str = "time";
/// Key of the built-in level attribute
pub const LEVEL_KEY: &str = "level";
/// Key of the built-in message attribute
pub const MESSAGE_KEY: &str = "msg";
/// Key of the built-in call site attribute
pub const SOURCE_KEY: &str = "source";

/// Receives records and decides how to render them
///
/// Derived handlers returned by `with_attrs` and `with_group` carry the added
/// context into every record they handle afterwards.
pub trait Handler: Send + Sync {
    /// Whether records at `level` would be handled
    fn enabled(&self, level: LogLevel) -> bool;

    /// Render one record; callers check `enabled` first
    fn handle(&self, record: &Record) -> Result<()>;

    /// Handler that includes `attrs` with every record
    fn with_attrs(&self, attrs: Vec<Attr>) -> Box<dyn Handler>;

    /// Handler that nests all later attributes under `name`
    fn with_group(&self, name: &str) -> Box<dyn Handler>;
}

/// Attribute rewriting hook
///
/// Called with the open group path and each non-group attribute. Returning
/// `None` drops the attribute.
pub type ReplaceAttr = Arc<dyn Fn(&[String], Attr) -> Option<Attr> + Send + Sync>;

/// Standard options accepted by every handler
///
/// # Example
///
/// ```
/// use rust_console_handler::core::{HandlerOptions, LogLevel};
///
/// let opts = HandlerOptions::new()
///     .with_level(LogLevel::DEBUG)
///     .with_add_source(true)
///     .with_replace_attr(|_groups, attr| (attr.key != "password").then_some(attr));
/// assert_eq!(opts.min_level(), LogLevel::DEBUG);
/// ```
#[derive(Clone, Default)]
pub struct HandlerOptions {
    /// Minimum enabled level; INFO when unset
    pub level: Option<Arc<dyn Leveler>>,
    /// Record the call site under the `source` key
    pub add_source: bool,
    pub replace_attr: Option<ReplaceAttr>,
}

impl HandlerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level<L: Leveler + 'static>(mut self, level: L) -> Self {
        self.level = Some(Arc::new(level));
        self
    }

    #[must_use]
    pub fn with_add_source(mut self, add_source: bool) -> Self {
        self.add_source = add_source;
        self
    }

    #[must_use]
    pub fn with_replace_attr<F>(mut self, replace: F) -> Self
    where
        F: Fn(&[String], Attr) -> Option<Attr> + Send + Sync + 'static,
    {
        self.replace_attr = Some(Arc::new(replace));
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.level
            .as_ref()
            .map_or(LogLevel::INFO, |level| level.level())
    }
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("level", &self.min_level())
            .field("add_source", &self.add_source)
            .field("replace_attr", &self.replace_attr.is_some())
            .finish()
    }
}

/// Output sink shared by a handler and everything derived from it
pub type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

pub fn shared_writer<W: Write + Send + 'static>(writer: W) -> SharedWriter {
    Arc::new(Mutex::new(Box::new(writer)))
}

/// Growable byte buffer whose clones write into the same storage
///
/// Used as the sink of an encoding handler whose output is read back, and as
/// a capture target in tests.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the buffered bytes
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.bytes.lock())
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buffered bytes as (lossy) UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_min_level_is_info() {
        assert_eq!(HandlerOptions::default().min_level(), LogLevel::INFO);
    }

    #[test]
    fn test_dynamic_level() {
        use super::super::log_level::LevelVar;

        let var = LevelVar::new(LogLevel::WARN);
        let opts = HandlerOptions::new().with_level(var.clone());
        assert_eq!(opts.min_level(), LogLevel::WARN);

        var.set(LogLevel::DEBUG);
        assert_eq!(opts.min_level(), LogLevel::DEBUG);
    }

    #[test]
    fn test_shared_buffer_clones_share_storage() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"hello").unwrap();

        assert_eq!(buffer.contents(), "hello");
        assert_eq!(buffer.take(), b"hello".to_vec());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_options_debug_hides_closure() {
        let opts = HandlerOptions::new().with_replace_attr(|_, a| Some(a));
        let debug = format!("{:?}", opts);
        assert!(debug.contains("replace_attr: true"));
    }
}
