//! Reading-order element types.

use super::CellGrid;
use serde::{Deserialize, Serialize};

/// One entry of the document's reading-order sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Element {
    /// Start of a page (1-indexed page number). Structural only.
    PageMarker(u32),

    /// Prose extracted from a region between tables
    Text(String),

    /// A table's cell grid
    Table(CellGrid),
}

impl Element {
    /// Create a text element.
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(content.into())
    }

    /// Check if this element is a page marker.
    pub fn is_page_marker(&self) -> bool {
        matches!(self, Element::PageMarker(_))
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Element::Table(_))
    }

    /// Check if this element is text.
    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }

    /// Check if this is text with visible content.
    ///
    /// Whitespace-only text does not interrupt a table.
    pub fn is_visible_text(&self) -> bool {
        matches!(self, Element::Text(s) if !s.trim().is_empty())
    }

    /// Get the table grid if this is a table.
    pub fn as_table(&self) -> Option<&CellGrid> {
        match self {
            Element::Table(grid) => Some(grid),
            _ => None,
        }
    }
}
