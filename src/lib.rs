#![forbid(unsafe_code)]
//! Parse, build, and convert .NET `.resx` resource files.
//!
//! A `.resx` file is an XML dialect storing name/value/comment triples. This
//! crate parses it into the ordered [`Document`] model, builds it back out in
//! canonical form, and converts it to JSON, Markdown, or a C# class stub.
//!
//! # Quick Start
//!
//! ```rust
//! use resxcodec::{Document, JsonOptions, parse, to_json};
//!
//! let document = parse(r#"<root><data name="Greeting"><value>Hello</value></data></root>"#)?;
//! let json = to_json(&document, JsonOptions::default())?;
//! assert_eq!(json, r#"[{"name":"Greeting","value":"Hello","comment":null}]"#);
//! # Ok::<(), resxcodec::Error>(())
//! ```
//!
//! Or work with files through the [`traits::Parser`] trait:
//!
//! ```rust,no_run
//! use resxcodec::{Document, traits::Parser};
//!
//! let document = Document::read_from("Resources.resx")?;
//! document.write_to("Resources_copy.resx")?;
//! # Ok::<(), resxcodec::Error>(())
//! ```
//!
//! # Output formats
//!
//! - **ResX**: canonical XML text with the standard schema/resheader block,
//!   CRLF line endings ([`build`])
//! - **JSON**: array of name/value/comment objects, compact or prettified,
//!   with a conservative or relaxed escaping mode ([`to_json`])
//! - **Markdown**: human-readable listing of all records ([`to_markdown`])
//! - **C#**: a class stub with one string field per record ([`to_csharp`])
//!
//! All conversions are pure functions of the document: no shared state, no
//! I/O in the core, safe to call concurrently on distinct documents.

pub mod convert;
pub mod error;
pub mod resx;
pub mod traits;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    convert::{JsonEscape, JsonOptions, OutputFormat, convert, to_csharp, to_json, to_markdown},
    error::Error,
    resx::{build, parse},
    types::{Document, Record},
};
