//! Log record structure

use super::attr::Attr;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::panic::Location;

/// Call site that produced a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    #[serde(rename = "module", skip_serializing_if = "Option::is_none")]
    pub module_path: Option<String>,
    pub file: String,
    pub line: u32,
}

impl Source {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            module_path: None,
            file: file.into(),
            line,
        }
    }

    pub fn with_module_path(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = Some(module_path.into());
        self
    }
}

impl From<&Location<'_>> for Source {
    fn from(location: &Location<'_>) -> Self {
        Source::new(location.file(), location.line())
    }
}

/// One structured log event
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
    pub source: Option<Source>,
    attrs: Vec<Attr>,
}

impl Record {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            time: Local::now(),
            level,
            message: message.into(),
            source: None,
            attrs: Vec::new(),
        }
    }

    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = time;
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Append attributes, keeping their order
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn add_attr(&mut self, attr: Attr) {
        self.attrs.push(attr);
    }

    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }

    pub fn attrs(&self) -> impl Iterator<Item = &Attr> {
        self.attrs.iter()
    }
}
