//! JSON conversion: a document becomes an array of name/value/comment
//! objects, in record order, with `null` for absent comments.

use std::io;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};

use crate::{error::Error, types::Document};

/// How aggressively string content is escaped in the JSON output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonEscape {
    /// Escape every non-ASCII character as `\uXXXX` (surrogate pairs for
    /// astral code points), plus the ASCII characters unsafe when the output
    /// is embedded in HTML or script contexts. Safe everywhere; noisy.
    #[default]
    Standard,
    /// Only the escapes JSON itself requires (quotes, backslash, control
    /// characters). Non-ASCII passes through; suitable when the output is
    /// known to stay UTF-8.
    Relaxed,
}

/// Options for [`to_json`]. A plain value constructed per call; there is no
/// shared writer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonOptions {
    pub escape: JsonEscape,
    /// `true` for multi-line indented output, `false` for maximally compact.
    /// Both parse back to the same value.
    pub prettify: bool,
}

/// Converts a document to JSON text.
///
/// Output shape: `[{"name": ..., "value": ..., "comment": ...}, ...]` in
/// record order; an absent comment is emitted as `null`.
pub fn to_json(document: &Document, options: JsonOptions) -> Result<String, Error> {
    match (options.escape, options.prettify) {
        (JsonEscape::Relaxed, false) => Ok(serde_json::to_string(document)?),
        (JsonEscape::Relaxed, true) => Ok(serde_json::to_string_pretty(document)?),
        (JsonEscape::Standard, false) => to_escaped_json(document, CompactFormatter),
        (JsonEscape::Standard, true) => to_escaped_json(document, PrettyFormatter::new()),
    }
}

fn to_escaped_json<F: Formatter>(document: &Document, inner: F) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, EscapeFormatter { inner });
    document.serialize(&mut serializer)?;
    // The formatter escapes every non-ASCII character, so the buffer is ASCII.
    Ok(String::from_utf8(buf).expect("escaped JSON output is ASCII"))
}

fn requires_escape(ch: char) -> bool {
    !ch.is_ascii() || matches!(ch, '<' | '>' | '&' | '\'' | '+' | '`')
}

/// Wraps a compact or pretty formatter, `\uXXXX`-escaping string content the
/// inner formatter would pass through verbatim. Quotes, backslashes, and
/// control characters never reach `write_string_fragment`; serde_json escapes
/// those before fragments are emitted.
struct EscapeFormatter<F> {
    inner: F,
}

impl<F: Formatter> Formatter for EscapeFormatter<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if requires_escape(ch) {
                if start < index {
                    writer.write_all(fragment[start..index].as_bytes())?;
                }
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{:04X}", unit)?;
                }
                start = index + ch.len_utf8();
            }
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Document, Record};
    use serde_json::Value;

    fn sample() -> Document {
        Document::from_records(vec![
            Record::new("Greeting", "Hi", None),
            Record::new("Farewell", "Bye", Some("polite".to_string())),
        ])
    }

    #[test]
    fn test_single_record_with_null_comment() {
        let document = Document::from_record(Record::new("Greeting", "Hi", None));
        let json = to_json(&document, JsonOptions::default()).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Greeting","value":"Hi","comment":null}]"#
        );
    }

    #[test]
    fn test_compact_and_pretty_parse_back_equal() {
        let document = sample();
        for escape in [JsonEscape::Standard, JsonEscape::Relaxed] {
            let compact = to_json(&document, JsonOptions { escape, prettify: false }).unwrap();
            let pretty = to_json(&document, JsonOptions { escape, prettify: true }).unwrap();
            assert_ne!(compact, pretty);
            assert!(!compact.contains('\n'));
            assert!(pretty.contains('\n'));

            let compact_value: Value = serde_json::from_str(&compact).unwrap();
            let pretty_value: Value = serde_json::from_str(&pretty).unwrap();
            assert_eq!(compact_value, pretty_value);
        }
    }

    #[test]
    fn test_escape_modes_parse_back_equal() {
        let document = Document::from_record(Record::new("café", "naïve <b>", Some("+1".to_string())));
        let standard = to_json(&document, JsonOptions::default()).unwrap();
        let relaxed = to_json(
            &document,
            JsonOptions { escape: JsonEscape::Relaxed, prettify: false },
        )
        .unwrap();

        let standard_value: Value = serde_json::from_str(&standard).unwrap();
        let relaxed_value: Value = serde_json::from_str(&relaxed).unwrap();
        assert_eq!(standard_value, relaxed_value);
    }

    #[test]
    fn test_standard_mode_escapes_non_ascii_and_markup() {
        let document = Document::from_record(Record::new("k", "é<a>&'+`", None));
        let json = to_json(&document, JsonOptions::default()).unwrap();
        assert!(json.is_ascii());
        assert!(json.contains("\\u00E9"));
        assert!(json.contains("\\u003C"));
        assert!(json.contains("\\u003E"));
        assert!(json.contains("\\u0026"));
        assert!(json.contains("\\u0027"));
        assert!(json.contains("\\u002B"));
        assert!(json.contains("\\u0060"));
    }

    #[test]
    fn test_standard_mode_uses_surrogate_pairs() {
        let document = Document::from_record(Record::new("k", "\u{1F600}", None));
        let json = to_json(&document, JsonOptions::default()).unwrap();
        assert!(json.contains("\\uD83D\\uDE00"));
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["value"], "\u{1F600}");
    }

    #[test]
    fn test_relaxed_mode_passes_non_ascii_through() {
        let document = Document::from_record(Record::new("k", "é<a>", None));
        let json = to_json(
            &document,
            JsonOptions { escape: JsonEscape::Relaxed, prettify: false },
        )
        .unwrap();
        assert!(json.contains("é<a>"));
    }

    #[test]
    fn test_pretty_standard_mode_still_escapes() {
        let document = Document::from_record(Record::new("k", "é", None));
        let json = to_json(
            &document,
            JsonOptions { escape: JsonEscape::Standard, prettify: true },
        )
        .unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\\u00E9"));
    }

    #[test]
    fn test_order_preserved() {
        let document = Document::from_records(vec![
            Record::new("z", "1", None),
            Record::new("a", "2", None),
        ]);
        let json = to_json(&document, JsonOptions::default()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "z");
        assert_eq!(value[1]["name"], "a");
    }

    #[test]
    fn test_idempotent() {
        let document = sample();
        let options = JsonOptions { escape: JsonEscape::Standard, prettify: true };
        assert_eq!(
            to_json(&document, options).unwrap(),
            to_json(&document, options).unwrap()
        );
    }

    #[test]
    fn test_empty_document_is_empty_array() {
        let json = to_json(&Document::new(), JsonOptions::default()).unwrap();
        assert_eq!(json, "[]");
    }
}
