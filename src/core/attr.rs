//! Structured key/value attributes attached to records and handlers

use chrono::{DateTime, FixedOffset, Offset, TimeZone};
use std::fmt;
use std::time::Duration;

/// Value type for structured logging attributes
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
    Time(DateTime<FixedOffset>),
    /// Nested attributes rendered as an object under the attribute's key
    Group(Vec<Attr>),
    /// Arbitrary JSON-representable data
    Json(serde_json::Value),
}

impl Value {
    /// Build a value from anything serde can serialize
    pub fn from_serialize<T: serde::Serialize>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(Value::Json)
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Value::Group(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Duration(d) => write!(f, "{:?}", d),
            Value::Time(t) => write!(f, "{}", t.to_rfc3339()),
            Value::Group(attrs) => {
                f.write_str("[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", attr)?;
                }
                f.write_str("]")
            }
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Uint(u64::from(u))
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(t: DateTime<Tz>) -> Self {
        let offset = t.offset().fix();
        Value::Time(t.with_timezone(&offset))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<Vec<Attr>> for Value {
    fn from(attrs: Vec<Attr>) -> Self {
        Value::Group(attrs)
    }
}

/// A key/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a group attribute holding nested attributes
    pub fn group(key: impl Into<String>, attrs: Vec<Attr>) -> Self {
        Self {
            key: key.into(),
            value: Value::Group(attrs),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
