//! Core types for resxcodec.
//! The parser decodes into these; the builder and converters consume them.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single `<data>` entry of a ResX document: a name, a value, and an
/// optional comment.
///
/// Records are immutable once constructed. An absent comment is a valid state,
/// not an error, and serializes as an explicit JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    name: String,
    value: String,
    #[serde(default)]
    comment: Option<String>,
}

impl Record {
    /// Creates a new record. A non-empty name is expected but not enforced
    /// here; an empty name only fails later, in C# stub generation.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Record {
            name: name.into(),
            value: value.into(),
            comment,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Record {{ name: {}, value: {}, comment: {:?} }}",
            self.name, self.value, self.comment
        )
    }
}

/// The in-memory representation of a whole ResX file: an ordered sequence of
/// [`Record`]s.
///
/// Insertion order is preserved and semantically meaningful; it determines the
/// output order of the builder and of every converter. The document owns its
/// records exclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    /// Creates a new, empty document.
    pub fn new() -> Self {
        Document {
            records: Vec::new(),
        }
    }

    /// Creates a document holding a single record.
    pub fn from_record(record: Record) -> Self {
        Document {
            records: vec![record],
        }
    }

    /// Creates a document from an already ordered record sequence.
    pub fn from_records(records: Vec<Record>) -> Self {
        Document { records }
    }

    /// Returns the records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns an iterator over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Finds the first record with the given name, if present.
    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Appends a record, preserving insertion order.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replaces the whole record sequence.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
