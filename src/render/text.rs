//! Plain text serialization of a rebuilt document.

use crate::model::{Document, Element};

use super::{format_table, RenderOptions};

/// Opening delimiter line of a rendered table.
pub const TABLE_START: &str = "[TABLE START]";

/// Closing delimiter line of a rendered table.
pub const TABLE_END: &str = "[TABLE END]";

const BANNER_RULE: &str = "====================";

/// Convert a document to text, rendering tables per the options.
pub fn to_text(doc: &Document, options: &RenderOptions) -> String {
    serialize_elements(&doc.elements, options)
}

/// Serialize an element sequence.
///
/// Each page marker becomes a page banner, text is copied verbatim, and each
/// table is wrapped in [`TABLE_START`]/[`TABLE_END`] delimiters. Parts are
/// joined by newlines.
pub fn serialize_elements(elements: &[Element], options: &RenderOptions) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(elements.len() + 8);

    for element in elements {
        match element {
            Element::PageMarker(number) => parts.push(page_banner(*number)),
            Element::Text(text) => parts.push(text.clone()),
            Element::Table(grid) => {
                parts.push(format!("\n{}", TABLE_START));
                parts.push(format_table(grid, options.table_format, options));
                parts.push(format!("{}\n", TABLE_END));
            }
        }
    }

    parts.join("\n")
}

/// Page boundary banner for a 1-indexed page number.
pub fn page_banner(number: u32) -> String {
    format!("\n\n{rule} Page {number} {rule}\n", rule = BANNER_RULE)
}
