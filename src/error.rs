//! All error types for the resxcodec crate.
//!
//! These are returned from all fallible operations (parsing, conversion, file I/O).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input is not well-formed XML, or contains no root element at all.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The root element exists but is not named "root" (case-insensitive).
    #[error("root tag of the ResX document is `{0}`, but expected `root`")]
    BadRootTag(String),

    /// A `data` element lacks a required attribute. Carries the attribute name.
    #[error("data tag has no attribute named `{0}`")]
    MissingAttribute(String),

    /// A `data` element has no descendant `value` element. Carries the data name.
    #[error("data tag `{0}` has no descendant element of type `value`")]
    MissingValueElement(String),

    /// A record name is empty, or sanitizes to nothing, during C# stub generation.
    #[error("record name `{0}` reduces to an empty identifier")]
    EmptyIdentifier(String),

    #[error("unknown output format `{0}`")]
    UnknownFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MalformedInput(err.to_string())
    }
}
