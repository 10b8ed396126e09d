//! Document-level types.

use super::Element;
use serde::{Deserialize, Serialize};

/// A rebuilt document: the frozen reading-order sequence of all pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Number of pages that were processed
    pub page_count: u32,

    /// Elements in reading order, with page markers
    pub elements: Vec<Element>,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from an already-built element sequence.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let page_count = elements.iter().filter(|e| e.is_page_marker()).count() as u32;
        let mut stats = ExtractionStats::new();
        stats.count_elements(&elements);
        Self {
            page_count,
            elements,
            stats,
        }
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the tables in reading order.
    pub fn tables(&self) -> impl Iterator<Item = &super::CellGrid> {
        self.elements.iter().filter_map(Element::as_table)
    }

    /// Get plain prose of the document (tables omitted).
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Statistics collected while rebuilding a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of pages processed
    pub page_count: u32,

    /// Number of text blocks in the final sequence
    pub text_block_count: u32,

    /// Number of tables in the final sequence
    pub table_count: u32,

    /// Number of table rows across all tables
    pub row_count: u32,

    /// Number of tables absorbed into a preceding table
    pub merged_table_count: u32,

    /// Approximate word count of prose (whitespace-separated tokens)
    pub word_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a final element sequence.
    pub fn count_elements(&mut self, elements: &[Element]) {
        for element in elements {
            match element {
                Element::PageMarker(_) => self.page_count += 1,
                Element::Text(s) => {
                    self.text_block_count += 1;
                    self.word_count += s.split_whitespace().count() as u32;
                }
                Element::Table(grid) => {
                    self.table_count += 1;
                    self.row_count += grid.row_count() as u32;
                }
            }
        }
    }
}
