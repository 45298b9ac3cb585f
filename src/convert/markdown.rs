//! Markdown conversion: a title, an attribution line, then one section per
//! record.

use crate::types::Document;

/// Attribution line emitted under the title.
const ATTRIBUTION: &str = "*Auto-generated by resxcodec v0.1.0*";

/// Converts a document to a Markdown listing.
///
/// Per record, in order: a level-3 heading with the record's name, then a line
/// stating the value and comment in bold. An absent comment renders as the
/// literal text `null` (a textual placeholder, deliberately not omitted).
pub fn to_markdown(document: &Document) -> String {
    let mut out = String::new();
    out.push_str("# Converted result from a ResX file\n");
    out.push_str(ATTRIBUTION);
    out.push('\n');

    for record in document {
        out.push_str(&format!("### {}\n", record.name()));
        out.push_str(&format!(
            "*Value*: **{}**; *comment*: **{}**\n",
            record.value(),
            record.comment().unwrap_or("null")
        ));
    }

    out
}
