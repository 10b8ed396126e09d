//! Layout backend over the `pdfplumber` crate.
//!
//! pdfplumber decodes the PDF, finds ruled tables and extracts the text of
//! any cropped area, which is everything the linearizer needs.

use std::path::Path;

use pdfplumber::{BBox, Page, Pdf, PdfError, Table, TableSettings, TextOptions};

use crate::error::{Error, Result};
use crate::model::{BoundingBox, CellGrid, Region};

use super::{DetectedTable, LayoutBackend, PageSource};

/// A PDF opened with pdfplumber.
///
/// The decoded document is held for the lifetime of the backend and
/// released on drop.
pub struct PdfPlumberBackend {
    pdf: Pdf,
    settings: TableSettings,
}

impl PdfPlumberBackend {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let pdf = Pdf::open_file(path, None).map_err(layout_error)?;
        Ok(Self::from_pdf(pdf))
    }

    /// Open a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let pdf = Pdf::open(data, None).map_err(layout_error)?;
        Ok(Self::from_pdf(pdf))
    }

    fn from_pdf(pdf: Pdf) -> Self {
        Self {
            pdf,
            settings: TableSettings::default(),
        }
    }

    /// Use custom table detection settings.
    pub fn with_table_settings(mut self, settings: TableSettings) -> Self {
        self.settings = settings;
        self
    }
}

fn layout_error(err: PdfError) -> Error {
    Error::Layout(err.to_string())
}

impl LayoutBackend for PdfPlumberBackend {
    fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    fn page(&self, index: usize) -> Result<Box<dyn PageSource + '_>> {
        let page = self.pdf.page(index).map_err(layout_error)?;
        Ok(Box::new(PlumberPage {
            number: index as u32 + 1,
            page,
            settings: &self.settings,
        }))
    }
}

/// One decoded page.
struct PlumberPage<'a> {
    number: u32,
    page: Page,
    settings: &'a TableSettings,
}

impl PageSource for PlumberPage<'_> {
    fn number(&self) -> u32 {
        self.number
    }

    fn width(&self) -> f32 {
        self.page.width() as f32
    }

    fn height(&self) -> f32 {
        self.page.height() as f32
    }

    fn find_tables(&self) -> Result<Vec<DetectedTable>> {
        Ok(self
            .page
            .find_tables(self.settings)
            .iter()
            .map(detected_table)
            .collect())
    }

    fn extract_text(&self, region: &Region) -> Result<Option<String>> {
        if !region.is_valid() {
            return Err(Error::RegionExtract(format!(
                "invalid region [{}, {}) on page {}",
                region.top, region.bottom, self.number
            )));
        }

        let bbox = BBox::new(
            0.0,
            f64::from(region.top),
            self.page.width(),
            f64::from(region.bottom),
        );
        let text = self
            .page
            .within_bbox(bbox)
            .extract_text(&TextOptions::default());

        Ok(if text.is_empty() { None } else { Some(text) })
    }
}

fn detected_table(table: &Table) -> DetectedTable {
    let rows = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
        .collect();

    DetectedTable::new(
        BoundingBox::new(
            table.bbox.x0 as f32,
            table.bbox.top as f32,
            table.bbox.x1 as f32,
            table.bbox.bottom as f32,
        ),
        CellGrid::from_rows(rows),
    )
}
