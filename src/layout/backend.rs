//! Layout backend abstraction layer.
//!
//! Provides a trait-based interface to the layout-analysis collaborator,
//! isolating whatever decodes the PDF and detects tables from the
//! reading-order reconstruction logic.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{BoundingBox, CellGrid, Region};

/// A table found on a page by the layout collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedTable {
    /// Table bounds in page points
    pub bbox: BoundingBox,
    /// Extracted cell grid
    pub rows: CellGrid,
}

impl DetectedTable {
    /// Create a detected table.
    pub fn new(bbox: BoundingBox, rows: CellGrid) -> Self {
        Self { bbox, rows }
    }

    /// Top edge of the table.
    pub fn top(&self) -> f32 {
        self.bbox.top
    }

    /// Bottom edge of the table.
    pub fn bottom(&self) -> f32 {
        self.bbox.bottom
    }
}

/// Abstract interface for one analyzed page.
pub trait PageSource {
    /// 1-indexed page number.
    fn number(&self) -> u32;

    /// Page width in points.
    fn width(&self) -> f32;

    /// Page height in points.
    fn height(&self) -> f32;

    /// Return all tables detected on the page, in detector order.
    fn find_tables(&self) -> Result<Vec<DetectedTable>>;

    /// Return the prose inside a vertical region, or `None` if the region
    /// holds no text.
    fn extract_text(&self, region: &Region) -> Result<Option<String>>;

    /// Full-width region spanning `[top, bottom)` of this page.
    fn region(&self, top: f32, bottom: f32) -> Region {
        Region::new(top, bottom, self.width(), self.height())
    }
}

/// Abstract interface for an analyzed document.
///
/// Implementations own whatever handle the collaborator needs; it is
/// released when the backend is dropped.
pub trait LayoutBackend {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Return the page at a 0-based index.
    fn page(&self, index: usize) -> Result<Box<dyn PageSource + '_>>;
}
