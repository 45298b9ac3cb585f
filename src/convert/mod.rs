//! Conversion of a [`Document`](crate::types::Document) to the supported
//! output formats.
//!
//! This module re-exports the converters and provides the [`OutputFormat`]
//! enum for generic format handling across the crate. All converters are pure:
//! they never mutate their input and produce byte-identical output on repeated
//! calls with the same options.

pub mod csharp;
pub mod json;
pub mod markdown;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

pub use csharp::to_csharp;
pub use json::{JsonEscape, JsonOptions, to_json};
pub use markdown::to_markdown;

use crate::{error::Error, resx, types::Document};

/// All supported output formats, for generic dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Canonical ResX XML text.
    Resx,
    /// JSON array of name/value/comment objects.
    Json,
    /// Markdown listing of all records.
    Markdown,
    /// C# class stub with one string field per record.
    CSharp,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Resx => write!(f, "resx"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::CSharp => write!(f, "csharp"),
        }
    }
}

/// Accepts the following case-insensitive strings:
/// - `"resx"`, `"xml"` → [`OutputFormat::Resx`]
/// - `"json"` → [`OutputFormat::Json`]
/// - `"markdown"`, `"md"` → [`OutputFormat::Markdown`]
/// - `"csharp"`, `"cs"` → [`OutputFormat::CSharp`]
///
/// Returns [`Error::UnknownFormat`] for anything else.
impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resx" | "xml" => Ok(OutputFormat::Resx),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csharp" | "cs" => Ok(OutputFormat::CSharp),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Converts a document to the given output format with default options.
pub fn convert(document: &Document, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Resx => Ok(resx::build(document)),
        OutputFormat::Json => to_json(document, JsonOptions::default()),
        OutputFormat::Markdown => Ok(to_markdown(document)),
        OutputFormat::CSharp => to_csharp(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("resx".parse::<OutputFormat>().unwrap(), OutputFormat::Resx);
        assert_eq!("XML".parse::<OutputFormat>().unwrap(), OutputFormat::Resx);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(
            "CSharp".parse::<OutputFormat>().unwrap(),
            OutputFormat::CSharp
        );
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [
            OutputFormat::Resx,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::CSharp,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_convert_dispatches_each_format() {
        let document = Document::from_record(Record::new("Greeting", "Hi", None));

        assert!(convert(&document, OutputFormat::Resx).unwrap().contains("<data name=\"Greeting\">"));
        assert!(convert(&document, OutputFormat::Json).unwrap().contains("\"Greeting\""));
        assert!(convert(&document, OutputFormat::Markdown).unwrap().contains("### Greeting"));
        assert!(convert(&document, OutputFormat::CSharp).unwrap().contains("public string Greeting"));
    }
}
