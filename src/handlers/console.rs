//! Console handler implementation
//!
//! Renders each record as one colorized line, `<time> <LEVEL:> <message>`,
//! followed by the record's attributes as indented JSON. The attributes are
//! normalized by an embedded encoding handler (a [`JsonHandler`] unless
//! another is supplied) that writes into a scratch buffer shared by the whole
//! handler family, then decoded and re-encoded for display.

use super::json::JsonHandler;
use super::pretty::to_string_indented;
use crate::core::{
    shared_writer, Attr, ConsoleConfig, ConsoleOption, Handler, HandlerOptions, LogLevel,
    LoggerError, Record, ReplaceAttr, Result, SharedBuffer, SharedWriter, LEVEL_KEY, MESSAGE_KEY,
    TIME_KEY,
};
use colored::Color;
use parking_lot::{Mutex, MutexGuard};
use serde_json::{Map, Value as JsonValue};
use std::io::Write;
use std::sync::Arc;

/// Color of the timestamp
const TIME_COLOR: Color = Color::White;
/// Color of the message text
const MESSAGE_COLOR: Color = Color::BrightWhite;
/// Color of the attribute block
const ATTRS_COLOR: Color = Color::BrightBlack;

/// Buffer and lock shared by a root handler and every handler derived from it
#[derive(Debug, Default)]
struct Scratch {
    gate: Mutex<()>,
    buffer: SharedBuffer,
}

impl Scratch {
    /// Block until the buffer is free; it is empty on return
    fn acquire(&self) -> ScratchGuard<'_> {
        let gate = self.gate.lock();
        self.buffer.clear();
        ScratchGuard {
            buffer: &self.buffer,
            _gate: gate,
        }
    }
}

/// Holds the family lock; empties the buffer before releasing it
struct ScratchGuard<'a> {
    buffer: &'a SharedBuffer,
    _gate: MutexGuard<'a, ()>,
}

impl ScratchGuard<'_> {
    fn take(&self) -> Vec<u8> {
        self.buffer.take()
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        self.buffer.clear();
    }
}

/// Human-readable console handler
///
/// # Example
///
/// ```
/// use rust_console_handler::core::{with_colors, Attr, Handler, LogLevel, Record, SharedBuffer};
/// use rust_console_handler::handlers::ConsoleHandler;
///
/// let out = SharedBuffer::new();
/// let handler = ConsoleHandler::with_writer(out.clone(), None, [with_colors(false)]);
///
/// let record = Record::new(LogLevel::INFO, "request").with_attrs(vec![Attr::new("status", 200)]);
/// handler.handle(&record).unwrap();
///
/// assert!(out.contents().contains("INFO: request {\n  \"status\": 200\n}"));
/// ```
#[derive(Clone)]
pub struct ConsoleHandler {
    delegate: Arc<dyn Handler>,
    scratch: Arc<Scratch>,
    output: SharedWriter,
    config: ConsoleConfig,
}

impl ConsoleHandler {
    /// Create a handler printing to standard output
    pub fn new(
        opts: Option<HandlerOptions>,
        options: impl IntoIterator<Item = ConsoleOption>,
    ) -> Self {
        Self::with_writer(std::io::stdout(), opts, options)
    }

    /// Create a handler printing to `writer`
    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        opts: Option<HandlerOptions>,
        options: impl IntoIterator<Item = ConsoleOption>,
    ) -> Self {
        Self::with_encoder(
            |buffer, opts| Box::new(JsonHandler::new(buffer, Some(opts))),
            writer,
            opts,
            options,
        )
    }

    /// Create a handler with a custom attribute encoder
    ///
    /// `make` receives the scratch buffer and the effective options (whose
    /// `replace_attr` already suppresses the time, level and message keys). The
    /// returned handler must write each handled record into the buffer as one
    /// JSON object.
    pub fn with_encoder<F, W>(
        make: F,
        writer: W,
        opts: Option<HandlerOptions>,
        options: impl IntoIterator<Item = ConsoleOption>,
    ) -> Self
    where
        F: FnOnce(SharedBuffer, HandlerOptions) -> Box<dyn Handler>,
        W: Write + Send + 'static,
    {
        let opts = opts.unwrap_or_default();
        let inner_opts = HandlerOptions {
            level: opts.level,
            add_source: opts.add_source,
            replace_attr: Some(suppress_defaults(opts.replace_attr)),
        };

        let scratch = Arc::new(Scratch::default());
        let delegate = make(scratch.buffer.clone(), inner_opts);

        Self {
            delegate: Arc::from(delegate),
            scratch,
            output: shared_writer(writer),
            config: ConsoleConfig::default().with_options(options),
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    fn derive(&self, delegate: Box<dyn Handler>) -> Box<dyn Handler> {
        Box::new(Self {
            delegate: Arc::from(delegate),
            scratch: Arc::clone(&self.scratch),
            output: Arc::clone(&self.output),
            config: self.config.clone(),
        })
    }

    fn paint(&self, color: Option<Color>, text: &str) -> String {
        match color {
            Some(color) if self.config.colors => {
                format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
            }
            _ => text.to_string(),
        }
    }

    /// Format `<time> <LEVEL:> <message>`
    fn format_prefix(&self, record: &Record) -> Result<String> {
        let level = format!("{}:", record.level);
        let time = self.config.time_format.format(&record.time)?;

        Ok(format!(
            "{} {} {}",
            self.paint(Some(TIME_COLOR), &time),
            self.paint(record.level.color_code(), &level),
            self.paint(Some(MESSAGE_COLOR), &record.message),
        ))
    }

    /// Run the record through the delegate and decode what it wrote
    fn compute_attrs(&self, record: &Record) -> Result<Map<String, JsonValue>> {
        let scratch = self.scratch.acquire();
        self.delegate
            .handle(record)
            .map_err(LoggerError::inner_handler)?;

        let mut attrs: Map<String, JsonValue> = serde_json::from_slice(&scratch.take())
            .map_err(|source| LoggerError::Decode { source })?;
        strip_reserved(&mut attrs);
        Ok(attrs)
    }
}

impl Handler for ConsoleHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        self.delegate.enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let mut line = self.format_prefix(record)?;

        if record.num_attrs() > 0 {
            let attrs = self.compute_attrs(record)?;
            // Every attribute may have been filtered out by suppression or a hook.
            if !attrs.is_empty() {
                let block = to_string_indented(&attrs, self.config.escape_html)
                    .map_err(|source| LoggerError::Marshal { source })?;
                line.push(' ');
                line.push_str(&self.paint(Some(ATTRS_COLOR), &block));
            }
        }
        line.push('\n');

        let mut output = self.output.lock();
        output.write_all(line.as_bytes())?;
        output.flush()?;
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Box<dyn Handler> {
        self.derive(self.delegate.with_attrs(attrs))
    }

    fn with_group(&self, name: &str) -> Box<dyn Handler> {
        self.derive(self.delegate.with_group(name))
    }
}

fn is_reserved(key: &str) -> bool {
    matches!(key, TIME_KEY | LEVEL_KEY | MESSAGE_KEY)
}

/// Wrap `next` so the time, level and message keys never reach the output
fn suppress_defaults(next: Option<ReplaceAttr>) -> ReplaceAttr {
    Arc::new(move |groups: &[String], attr: Attr| {
        if is_reserved(&attr.key) {
            return None;
        }
        match next {
            Some(ref next) => next(groups, attr).filter(|attr| !is_reserved(&attr.key)),
            None => Some(attr),
        }
    })
}

/// Remove reserved keys at every object level of the decoded attributes
///
/// Group attributes and `with_group` names never pass through `replace_attr`,
/// so a group called `time`, `level` or `msg` is only caught here. An object
/// emptied by the removal is dropped as well, like any empty group. Arrays are
/// left untouched.
fn strip_reserved(attrs: &mut Map<String, JsonValue>) {
    attrs.retain(|key, value| {
        if is_reserved(key) {
            return false;
        }
        match value {
            JsonValue::Object(nested) if !nested.is_empty() => {
                strip_reserved(nested);
                !nested.is_empty()
            }
            _ => true,
        }
    });
}
