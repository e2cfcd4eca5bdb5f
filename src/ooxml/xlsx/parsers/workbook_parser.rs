//! Parser for Excel workbook.xml files.
//!
//! Only the `<sheets>` list is read: sheet names in tab order and the
//! relationship id that locates each sheet's part.

use super::namespace_prefix;
use crate::common::xml::{attribute, elements, next_element, unescape_xml};

// Typical workbooks have a handful of sheets
const INITIAL_SHEETS_CAPACITY: usize = 16;

/// A `<sheet>` entry of the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    /// Tab name
    pub name: String,
    /// Relationship id into `xl/_rels/workbook.xml.rels`
    pub relationship_id: String,
}

/// Parse workbook.xml content into its sheet entries, in tab order.
///
/// Entries missing a name or relationship id are skipped.
pub fn parse_workbook_xml(content: &str) -> Vec<SheetEntry> {
    let prefix = namespace_prefix(content, "workbook");
    let mut sheets = Vec::with_capacity(INITIAL_SHEETS_CAPACITY);

    let Some(section) = next_element(content, &format!("{}sheets", prefix), 0) else {
        return sheets;
    };

    for sheet in elements(section.text(), &format!("{}sheet", prefix)) {
        let name = sheet.attribute("name");
        let relationship_id = relationship_id(sheet.start_tag);
        if let (Some(name), Some(relationship_id)) = (name, relationship_id) {
            sheets.push(SheetEntry {
                name: unescape_xml(name),
                relationship_id: relationship_id.to_string(),
            });
        }
    }

    sheets
}

/// The `r:id` attribute, whatever prefix the officeDocument relationships
/// namespace is bound to.
fn relationship_id(tag: &str) -> Option<&str> {
    if let Some(id) = attribute(tag, "r:id") {
        return Some(id);
    }
    let bytes = tag.as_bytes();
    let colon = memchr::memmem::find(bytes, b":id=")?;
    let start = bytes[..colon]
        .iter()
        .rposition(u8::is_ascii_whitespace)?;
    attribute(tag, &tag[start + 1..colon + 3])
}
