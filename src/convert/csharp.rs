//! C# stub conversion: one public string field per record inside a fixed
//! class declaration, with record comments as XML doc comments.

use crate::{error::Error, types::Document};

/// Converts a document to a C# class stub.
///
/// Field identifiers come from [`sanitize_identifier`]; the whole conversion
/// fails with [`Error::EmptyIdentifier`] on the first record whose name
/// sanitizes to nothing, with no partial output.
///
/// Values are embedded as string literals with no escaping of internal `"`
/// characters, so a value containing a quote yields a stub that is not valid
/// C#. Legacy limitation, kept deliberately; see the tests.
pub fn to_csharp(document: &Document) -> Result<String, Error> {
    let mut out = String::new();
    out.push_str("internal class Class1\n");
    out.push_str("{\n");

    for record in document {
        if let Some(comment) = record.comment() {
            out.push_str("    /// <summary>\n");
            out.push_str(&format!("    /// {}\n", comment));
            out.push_str("    /// </summary>\n");
        }
        let identifier = sanitize_identifier(record.name())?;
        out.push_str(&format!(
            "    public string {} = \"{}\";\n",
            identifier,
            record.value()
        ));
    }

    out.push_str("}\n");
    Ok(out)
}

/// Derives a field identifier from a record name: uppercase the first
/// character (invariant Unicode uppercasing), drop every character that is
/// whitespace, punctuation, or a control character, then uppercase the first
/// surviving character. Underscores are kept despite being punctuation.
///
/// The second capitalization matters when the filter strips the leading
/// character: `"!abc"` becomes `"Abc"`, not `"abc"`.
///
/// Fails with [`Error::EmptyIdentifier`] when the name is empty or nothing
/// survives the filter.
pub fn sanitize_identifier(name: &str) -> Result<String, Error> {
    if name.is_empty() {
        return Err(Error::EmptyIdentifier(name.to_string()));
    }

    let filtered: String = capitalize(name)
        .filter(|&ch| {
            ch == '_' || !(ch.is_whitespace() || ch.is_ascii_punctuation() || ch.is_control())
        })
        .collect();

    if filtered.is_empty() {
        return Err(Error::EmptyIdentifier(name.to_string()));
    }
    Ok(capitalize(&filtered).collect())
}

/// Uppercases the first character, leaving the rest untouched. The input must
/// be non-empty.
fn capitalize(s: &str) -> impl Iterator<Item = char> + '_ {
    let mut chars = s.chars();
    let first = chars.next();
    first
        .into_iter()
        .flat_map(char::to_uppercase)
        .chain(chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Document, Record};

    #[test]
    fn test_sanitize_strips_whitespace_and_punctuation() {
        assert_eq!(sanitize_identifier("My Field!").unwrap(), "MyField");
        assert_eq!(sanitize_identifier("greeting.text").unwrap(), "Greetingtext");
        assert_eq!(sanitize_identifier("tab\there").unwrap(), "Tabhere");
    }

    #[test]
    fn test_sanitize_capitalizes_first_character() {
        assert_eq!(sanitize_identifier("greeting").unwrap(), "Greeting");
        assert_eq!(sanitize_identifier("Greeting").unwrap(), "Greeting");
    }

    #[test]
    fn test_sanitize_recapitalizes_after_leading_character_is_stripped() {
        assert_eq!(sanitize_identifier("!abc").unwrap(), "Abc");
        assert_eq!(sanitize_identifier(" greeting").unwrap(), "Greeting");
        assert_eq!(sanitize_identifier(".. x").unwrap(), "X");
    }

    #[test]
    fn test_sanitize_keeps_underscores() {
        assert_eq!(sanitize_identifier("my_field_1").unwrap(), "My_field_1");
        assert_eq!(sanitize_identifier("_private").unwrap(), "_private");
    }

    #[test]
    fn test_sanitize_empty_name_fails() {
        assert!(matches!(
            sanitize_identifier(""),
            Err(Error::EmptyIdentifier(_))
        ));
    }

    #[test]
    fn test_sanitize_all_punctuation_fails() {
        assert!(matches!(
            sanitize_identifier("!!!"),
            Err(Error::EmptyIdentifier(_))
        ));
        assert!(matches!(
            sanitize_identifier("  "),
            Err(Error::EmptyIdentifier(_))
        ));
    }

    #[test]
    fn test_stub_shape() {
        let document = Document::from_records(vec![
            Record::new("Greeting", "Hello", Some("Shown on startup".to_string())),
            Record::new("Farewell", "Bye", None),
        ]);
        let stub = to_csharp(&document).unwrap();

        let expected = "internal class Class1\n\
                        {\n    \
                        /// <summary>\n    \
                        /// Shown on startup\n    \
                        /// </summary>\n    \
                        public string Greeting = \"Hello\";\n    \
                        public string Farewell = \"Bye\";\n\
                        }\n";
        assert_eq!(stub, expected);
    }

    #[test]
    fn test_comment_block_omitted_without_comment() {
        let document = Document::from_record(Record::new("k", "v", None));
        let stub = to_csharp(&document).unwrap();
        assert!(!stub.contains("<summary>"));
    }

    #[test]
    fn test_conversion_is_atomic_on_bad_name() {
        let document = Document::from_records(vec![
            Record::new("Good", "v", None),
            Record::new("!!!", "v", None),
        ]);
        assert!(matches!(
            to_csharp(&document),
            Err(Error::EmptyIdentifier(_))
        ));
    }

    #[test]
    fn test_quote_in_value_is_not_escaped() {
        // Legacy limitation: the emitted literal is not valid C#.
        let document = Document::from_record(Record::new("k", "say \"hi\"", None));
        let stub = to_csharp(&document).unwrap();
        assert!(stub.contains("public string K = \"say \"hi\"\";\n"));
    }

    #[test]
    fn test_order_preserved() {
        let document = Document::from_records(vec![
            Record::new("zed", "1", None),
            Record::new("ay", "2", None),
        ]);
        let stub = to_csharp(&document).unwrap();
        let z = stub.find("Zed").unwrap();
        let a = stub.find("Ay").unwrap();
        assert!(z < a);
    }
}
