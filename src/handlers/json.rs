//! JSON handler for machine-readable structured output
//!
//! Writes each record as a single-line JSON object (JSONL). The console
//! handler also embeds one of these as its attribute normalizer.

use crate::core::{
    shared_writer, Attr, Handler, HandlerOptions, LogLevel, LoggerError, Record, Result,
    SharedWriter, Value, LEVEL_KEY, MESSAGE_KEY, SOURCE_KEY, TIME_KEY,
};
use chrono::SecondsFormat;
use serde_json::{Map, Value as JsonValue};
use std::io::Write;

/// JSON-lines handler
///
/// # Example
///
/// ```
/// use rust_console_handler::core::{Attr, Handler, LogLevel, Record, SharedBuffer};
/// use rust_console_handler::handlers::JsonHandler;
///
/// let buffer = SharedBuffer::new();
/// let handler = JsonHandler::new(buffer.clone(), None);
/// handler
///     .handle(&Record::new(LogLevel::INFO, "ready").with_attrs(vec![Attr::new("port", 8080)]))
///     .unwrap();
///
/// let line: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
/// assert_eq!(line["msg"], "ready");
/// assert_eq!(line["port"], 8080);
/// ```
#[derive(Clone)]
pub struct JsonHandler {
    opts: HandlerOptions,
    writer: SharedWriter,
    /// Attributes from `with_attrs`, tagged with how many groups were open
    attrs: Vec<(usize, Attr)>,
    groups: Vec<String>,
}

impl JsonHandler {
    pub fn new<W: Write + Send + 'static>(writer: W, opts: Option<HandlerOptions>) -> Self {
        Self::with_shared_writer(shared_writer(writer), opts)
    }

    /// Create a handler writing to an already shared sink
    pub fn with_shared_writer(writer: SharedWriter, opts: Option<HandlerOptions>) -> Self {
        Self {
            opts: opts.unwrap_or_default(),
            writer,
            attrs: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Build the JSON object for a record without writing it
    pub fn encode(&self, record: &Record) -> Result<Map<String, JsonValue>> {
        let mut root = Map::new();

        let time = Attr::new(TIME_KEY, record.time);
        self.encode_builtin(&mut root, time)?;
        let level = Attr::new(LEVEL_KEY, record.level.to_string());
        self.encode_builtin(&mut root, level)?;
        if self.opts.add_source {
            if let Some(ref source) = record.source {
                let value = Value::from_serialize(source)?;
                self.encode_builtin(&mut root, Attr::new(SOURCE_KEY, value))?;
            }
        }
        let message = Attr::new(MESSAGE_KEY, record.message.as_str());
        self.encode_builtin(&mut root, message)?;

        for (depth, attr) in &self.attrs {
            let mut path = self.groups[..*depth].to_vec();
            let mut leaf = Map::new();
            self.encode_attr(&mut path, attr, &mut leaf)?;
            merge_at(&mut root, &self.groups[..*depth], leaf);
        }

        let mut path = self.groups.clone();
        let mut leaf = Map::new();
        for attr in record.attrs() {
            self.encode_attr(&mut path, attr, &mut leaf)?;
        }
        merge_at(&mut root, &self.groups, leaf);

        Ok(root)
    }

    fn encode_builtin(&self, into: &mut Map<String, JsonValue>, attr: Attr) -> Result<()> {
        let attr = match self.opts.replace_attr {
            Some(ref replace) => match replace(&[], attr) {
                Some(attr) => attr,
                None => return Ok(()),
            },
            None => attr,
        };
        self.insert_resolved(&mut Vec::new(), attr, into)
    }

    fn encode_attr(
        &self,
        groups: &mut Vec<String>,
        attr: &Attr,
        into: &mut Map<String, JsonValue>,
    ) -> Result<()> {
        if attr.value.is_group() {
            return self.insert_resolved(groups, attr.clone(), into);
        }
        let attr = match self.opts.replace_attr {
            Some(ref replace) => match replace(groups.as_slice(), attr.clone()) {
                Some(attr) => attr,
                None => return Ok(()),
            },
            None => attr.clone(),
        };
        self.insert_resolved(groups, attr, into)
    }

    /// Insert an attribute that has already been through `replace_attr`
    fn insert_resolved(
        &self,
        groups: &mut Vec<String>,
        attr: Attr,
        into: &mut Map<String, JsonValue>,
    ) -> Result<()> {
        match attr.value {
            Value::Group(members) => {
                if members.is_empty() {
                    return Ok(());
                }
                // An unnamed group is inlined into its parent.
                if attr.key.is_empty() {
                    for member in &members {
                        self.encode_attr(groups, member, into)?;
                    }
                    return Ok(());
                }
                groups.push(attr.key.clone());
                let mut nested = Map::new();
                let result = members
                    .iter()
                    .try_for_each(|member| self.encode_attr(groups, member, &mut nested));
                groups.pop();
                result?;
                if !nested.is_empty() {
                    into.insert(attr.key, JsonValue::Object(nested));
                }
                Ok(())
            }
            value => {
                let json = to_json(&attr.key, value)?;
                into.insert(attr.key, json);
                Ok(())
            }
        }
    }
}

fn to_json(key: &str, value: Value) -> Result<JsonValue> {
    Ok(match value {
        Value::String(s) => JsonValue::String(s),
        Value::Int(i) => JsonValue::from(i),
        Value::Uint(u) => JsonValue::from(u),
        Value::Float(f) => serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .ok_or_else(|| LoggerError::unsupported_value(key, format!("non-finite float {}", f)))?,
        Value::Bool(b) => JsonValue::Bool(b),
        Value::Duration(d) => {
            let nanos = u64::try_from(d.as_nanos())
                .map_err(|_| LoggerError::unsupported_value(key, "duration overflows u64 nanoseconds"))?;
            JsonValue::from(nanos)
        }
        Value::Time(t) => JsonValue::String(t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        Value::Json(v) => v,
        Value::Group(_) => {
            return Err(LoggerError::unsupported_value(key, "group in scalar position"));
        }
    })
}

/// Merge `leaf` into the object found by walking `path` from `root`
fn merge_at(root: &mut Map<String, JsonValue>, path: &[String], leaf: Map<String, JsonValue>) {
    if leaf.is_empty() {
        return;
    }
    match path.split_first() {
        None => root.extend(leaf),
        Some((key, rest)) => {
            let slot = root
                .entry(key.clone())
                .or_insert_with(|| JsonValue::Object(Map::new()));
            match slot {
                JsonValue::Object(map) => merge_at(map, rest, leaf),
                other => {
                    let mut map = Map::new();
                    merge_at(&mut map, rest, leaf);
                    *other = JsonValue::Object(map);
                }
            }
        }
    }
}

impl Handler for JsonHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.opts.min_level()
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let object = self.encode(record)?;
        let mut line = serde_json::to_vec(&object)?;
        line.push(b'\n');

        let mut writer = self.writer.lock();
        writer.write_all(&line)?;
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Box<dyn Handler> {
        let mut handler = self.clone();
        let depth = handler.groups.len();
        handler.attrs.extend(attrs.into_iter().map(|attr| (depth, attr)));
        Box::new(handler)
    }

    fn with_group(&self, name: &str) -> Box<dyn Handler> {
        let mut handler = self.clone();
        if !name.is_empty() {
            handler.groups.push(name.to_string());
        }
        Box::new(handler)
    }
}
