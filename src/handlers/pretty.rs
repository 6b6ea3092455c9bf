//! Indented JSON rendering for the console attribute block

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

/// Two-space indented JSON formatter with optional HTML escaping
///
/// With escaping enabled, `<`, `>` and `&` inside keys and string values are
/// written as `\u003c`, `\u003e` and `\u0026`.
pub struct AttrFormatter {
    pretty: PrettyFormatter<'static>,
    escape_html: bool,
}

impl AttrFormatter {
    pub fn new(escape_html: bool) -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(b"  "),
            escape_html,
        }
    }
}

impl Formatter for AttrFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if !self.escape_html {
            return writer.write_all(fragment.as_bytes());
        }

        let mut start = 0;
        for (i, byte) in fragment.bytes().enumerate() {
            let escaped: &[u8] = match byte {
                b'<' => b"\\u003c",
                b'>' => b"\\u003e",
                b'&' => b"\\u0026",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped)?;
            start = i + 1;
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize `value` as indented JSON
pub fn to_string_indented<T: Serialize + ?Sized>(
    value: &T,
    escape_html: bool,
) -> serde_json::Result<String> {
    let mut out = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, AttrFormatter::new(escape_html));
    value.serialize(&mut serializer)?;
    // The serializer only emits UTF-8: keys and strings come from `&str`.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_two_space_indent() {
        let rendered = to_string_indented(&json!({"path": "/x", "status": 200}), false).unwrap();
        assert_eq!(rendered, "{\n  \"path\": \"/x\",\n  \"status\": 200\n}");
    }

    #[test]
    fn test_nested_values() {
        let rendered =
            to_string_indented(&json!({"req": {"ids": [1, 2]}, "empty": []}), false).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"empty\": [],\n  \"req\": {\n    \"ids\": [\n      1,\n      2\n    ]\n  }\n}"
        );
    }

    #[test]
    fn test_html_left_alone_by_default() {
        let rendered = to_string_indented(&json!({"tag": "<b>&</b>"}), false).unwrap();
        assert!(rendered.contains("<b>&</b>"));
    }

    #[test]
    fn test_html_escaped_when_enabled() {
        let rendered = to_string_indented(&json!({"a<b": "<b>&</b>"}), true).unwrap();
        assert!(rendered.contains("\\u003cb\\u003e\\u0026\\u003c/b\\u003e"));
        assert!(rendered.contains("a\\u003cb"));
        assert!(!rendered.contains('<'));
    }

    #[test]
    fn test_escaping_keeps_other_escapes() {
        let rendered = to_string_indented(&json!({"q": "say \"hi\" & go"}), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["q"], "say \"hi\" & go");
    }
}
