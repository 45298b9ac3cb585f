//! The parsing/serialization seam between the ResX model and I/O sources.

use std::{
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing and writing a resource document from/to one file.
///
/// A ResX document is parsed as one tree, never streamed, so [`from_str`] is
/// the required entry point and the reader/file variants are conveniences
/// that read the whole input up front.
///
/// # Example
///
/// ```rust,no_run
/// use resxcodec::traits::Parser;
/// let document = resxcodec::Document::read_from("Resources.resx")?;
/// document.write_to("Resources_copy.resx")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`from_str`]: Parser::from_str
pub trait Parser {
    /// Parse from a string holding the whole file.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized;

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Parse from any reader, reading it to the end first.
    fn from_reader<R: Read>(mut reader: R) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let mut raw = String::new();
        reader.read_to_string(&mut raw).map_err(Error::Io)?;
        Self::from_str(&raw)
    }

    /// Parse from bytes, which must be UTF-8 text.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(bytes)
    }

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let raw = fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_str(&raw)
    }

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        self.to_writer(BufWriter::new(file))
    }
}
