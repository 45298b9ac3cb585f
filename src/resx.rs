//! Parsing and building of the ResX XML dialect.
//!
//! A ResX file is a `<root>` element containing `<data name="...">` entries,
//! each with a `<value>` descendant and an optional `<comment>` descendant.
//! Element names are matched case-insensitively; any other children of the
//! root (the schema block, `resheader` entries) are skipped.

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use std::io::Write;

use indoc::indoc;

use crate::{
    error::Error,
    traits::Parser,
    types::{Document, Record},
};

/// The fixed schema/resource-manager boilerplate emitted after `<root>` by
/// [`build`]. Required by the format's consumers (`ResXResourceReader` refuses
/// files without the `resheader` entries); never interpreted by [`parse`].
const RESX_HEADER: &str = indoc! {r#"
    <xsd:schema id="root" xmlns="" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:msdata="urn:schemas-microsoft-com:xml-msdata">
      <xsd:import namespace="http://www.w3.org/XML/1998/namespace" />
      <xsd:element name="root" msdata:IsDataSet="true">
        <xsd:complexType>
          <xsd:choice maxOccurs="unbounded">
            <xsd:element name="metadata">
              <xsd:complexType>
                <xsd:sequence>
                  <xsd:element name="value" type="xsd:string" minOccurs="0" />
                </xsd:sequence>
                <xsd:attribute name="name" use="required" type="xsd:string" />
                <xsd:attribute name="type" type="xsd:string" />
                <xsd:attribute name="mimetype" type="xsd:string" />
                <xsd:attribute ref="xml:space" />
              </xsd:complexType>
            </xsd:element>
            <xsd:element name="assembly">
              <xsd:complexType>
                <xsd:attribute name="alias" type="xsd:string" />
                <xsd:attribute name="name" type="xsd:string" />
              </xsd:complexType>
            </xsd:element>
            <xsd:element name="data">
              <xsd:complexType>
                <xsd:sequence>
                  <xsd:element name="value" type="xsd:string" minOccurs="0" msdata:Ordinal="1" />
                  <xsd:element name="comment" type="xsd:string" minOccurs="0" msdata:Ordinal="2" />
                </xsd:sequence>
                <xsd:attribute name="name" type="xsd:string" use="required" msdata:Ordinal="1" />
                <xsd:attribute name="type" type="xsd:string" msdata:Ordinal="3" />
                <xsd:attribute name="mimetype" type="xsd:string" msdata:Ordinal="4" />
                <xsd:attribute ref="xml:space" />
              </xsd:complexType>
            </xsd:element>
            <xsd:element name="resheader">
              <xsd:complexType>
                <xsd:sequence>
                  <xsd:element name="value" type="xsd:string" minOccurs="0" msdata:Ordinal="1" />
                </xsd:sequence>
                <xsd:attribute name="name" type="xsd:string" use="required" />
              </xsd:complexType>
            </xsd:element>
          </xsd:choice>
        </xsd:complexType>
      </xsd:element>
    </xsd:schema>
    <resheader name="resmimetype">
      <value>text/microsoft-resx</value>
    </resheader>
    <resheader name="version">
      <value>2.0</value>
    </resheader>
    <resheader name="reader">
      <value>System.Resources.ResXResourceReader, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
    </resheader>
    <resheader name="writer">
      <value>System.Resources.ResXResourceWriter, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
    </resheader>"#};

/// Parses raw ResX text into a [`Document`].
///
/// Fails with [`Error::MalformedInput`] when the text is not well-formed XML
/// or has no root element, [`Error::BadRootTag`] when the root element is not
/// named `root`, [`Error::MissingAttribute`] when a `data` element has no
/// `name` attribute, and [`Error::MissingValueElement`] when a `data` element
/// has no `value` descendant.
///
/// The `value`/`comment` search covers the whole subtree of each `data`
/// element, not just its direct children; the first match in document order
/// wins at any depth.
pub fn parse(raw: &str) -> Result<Document, Error> {
    let root = parse_tree(raw)?;
    if !root.name.eq_ignore_ascii_case("root") {
        return Err(Error::BadRootTag(root.name));
    }

    let mut records = Vec::new();
    for child in root.child_elements() {
        if !child.name.eq_ignore_ascii_case("data") {
            continue;
        }

        let name = child
            .attribute("name")
            .ok_or_else(|| Error::MissingAttribute("name".to_string()))?
            .to_string();
        let value = child
            .descendants()
            .find(|element| element.name.eq_ignore_ascii_case("value"))
            .ok_or_else(|| Error::MissingValueElement(name.clone()))?
            .text_content();
        let comment = child
            .descendants()
            .find(|element| element.name.eq_ignore_ascii_case("comment"))
            .map(Element::text_content);

        records.push(Record::new(name, value, comment));
    }

    Ok(Document::from_records(records))
}

/// Serializes a [`Document`] back to canonical ResX text.
///
/// Infallible; line endings are CRLF. Name, value, and comment are embedded
/// verbatim with no XML escaping, matching the legacy byte-for-byte output. A
/// value containing markup-special characters therefore produces text that
/// does not re-parse; see the tests.
pub fn build(document: &Document) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\r\n");
    out.push_str("<root>\r\n");

    for line in RESX_HEADER.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push_str("\r\n");
    }

    for record in document {
        out.push_str("  <data name=\"");
        out.push_str(record.name());
        out.push_str("\">\r\n");
        out.push_str("    <value>");
        out.push_str(record.value());
        out.push_str("</value>\r\n");
        if let Some(comment) = record.comment() {
            out.push_str("    <comment>");
            out.push_str(comment);
            out.push_str("</comment>\r\n");
        }
        out.push_str("  </data>\r\n");
    }

    out.push_str("</root>\r\n");
    out
}

impl Parser for Document {
    /// Parses a string of ResX text; see [`parse`].
    fn from_str(s: &str) -> Result<Self, Error> {
        parse(s)
    }

    /// Writes canonical ResX text to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(build(self).as_bytes()).map_err(Error::Io)
    }
}

/// One node of the parsed element tree. Whitespace-only text nodes are
/// dropped at tree-build time, so indentation between tags never leaks into
/// text content.
#[derive(Debug)]
enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug)]
struct Element {
    /// Local element name, namespace prefix stripped.
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Exact, case-sensitive attribute lookup (attribute keys are not folded,
    /// only element names are).
    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// All element descendants in document order (preorder), unbounded depth,
    /// excluding `self`.
    fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.child_elements().collect::<Vec<_>>().into_iter().rev().collect(),
        }
    }

    /// Concatenation of all text in this element's subtree.
    fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }
}

struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        // Children go on reversed so the traversal stays in document order.
        for child in element.child_elements().collect::<Vec<_>>().into_iter().rev() {
            self.stack.push(child);
        }
        Some(element)
    }
}

fn element_from_start(e: &BytesStart) -> Result<Element, Error> {
    let name = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|err| Error::MalformedInput(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Builds an owned element tree from the quick-xml event stream.
fn parse_tree(raw: &str) -> Result<Element, Error> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().check_end_names = true;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(Error::MalformedInput(
                        "multiple root elements".to_string(),
                    ));
                }
                stack.push(element_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(Error::MalformedInput(
                        "multiple root elements".to_string(),
                    ));
                }
                let element = element_from_start(&e)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None => root = Some(element),
                }
            }
            Ok(Event::End(_)) => {
                // check_end_names guarantees the end tag matches the open one
                if let Some(element) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(Node::Element(element)),
                        None => root = Some(element),
                    }
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape()?;
                match stack.last_mut() {
                    // Whitespace-only nodes between tags are insignificant.
                    Some(parent) => {
                        if !text.trim().is_empty() {
                            parent.children.push(Node::Text(text.into_owned()));
                        }
                    }
                    // Outside any element only whitespace and a BOM are legal;
                    // anything else means the input has no proper root.
                    None => {
                        if !text.chars().all(|c| c.is_whitespace() || c == '\u{feff}') {
                            return Err(Error::MalformedInput(
                                "text outside the root element".to_string(),
                            ));
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => match stack.last_mut() {
                Some(parent) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    parent.children.push(Node::Text(text));
                }
                None => {
                    return Err(Error::MalformedInput(
                        "CDATA outside the root element".to_string(),
                    ));
                }
            },
            Ok(Event::Eof) => break,
            Ok(_) => {} // declaration, comments, processing instructions, doctype
            Err(e) => return Err(Error::from(e)),
        }
    }

    if !stack.is_empty() {
        return Err(Error::MalformedInput(
            "unexpected end of input inside an open element".to_string(),
        ));
    }
    root.ok_or_else(|| Error::MalformedInput("no root element found".to_string()))
}
