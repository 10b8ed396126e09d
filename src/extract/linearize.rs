//! Per-page reading-order reconstruction.
//!
//! Tables are ordered by their top edge and the prose regions between them
//! are pulled out of the page one vertical slice at a time, giving a single
//! top-to-bottom element sequence.

use crate::error::{Error, Result};
use crate::layout::PageSource;
use crate::model::Element;

use super::ErrorMode;

/// Builds the ordered element sequence of one page.
#[derive(Debug, Clone, Default)]
pub struct PageLinearizer {
    error_mode: ErrorMode,
}

impl PageLinearizer {
    /// Create a linearizer with strict error handling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a linearizer with the given error mode.
    pub fn with_error_mode(error_mode: ErrorMode) -> Self {
        Self { error_mode }
    }

    /// Linearize a page into text and table elements.
    ///
    /// The leading page marker is not included. Region extraction failures
    /// are logged and read as empty text; table detection failures follow
    /// the error mode.
    pub fn linearize(&self, page: &dyn PageSource) -> Result<Vec<Element>> {
        let number = page.number();

        let mut tables = match page.find_tables() {
            Ok(tables) => tables,
            Err(e) if self.error_mode == ErrorMode::Lenient => {
                log::warn!(
                    "Table detection failed on page {}, treating as text: {}",
                    number,
                    e
                );
                Vec::new()
            }
            Err(e @ Error::TableDetection { .. }) => return Err(e),
            Err(e) => {
                return Err(Error::TableDetection {
                    page: number,
                    message: e.to_string(),
                })
            }
        };

        // Stable: equal tops keep detector order.
        tables.sort_by(|a, b| a.top().total_cmp(&b.top()));
        log::debug!("Page {}: {} tables", number, tables.len());

        let mut elements = Vec::with_capacity(tables.len() * 2 + 1);
        let mut last_bottom = 0.0_f32;

        for table in tables {
            let top = table.top();
            if top > last_bottom {
                if let Some(text) = region_text(page, last_bottom, top) {
                    elements.push(Element::Text(text));
                }
            }

            last_bottom = table.bottom();
            elements.push(Element::Table(table.rows));
        }

        let height = page.height();
        if last_bottom < height {
            if let Some(text) = region_text(page, last_bottom, height) {
                elements.push(Element::Text(text));
            }
        }

        Ok(elements)
    }
}

/// Extract the prose of `[top, bottom)`, or `None` when the slice is blank
/// or could not be read.
fn region_text(page: &dyn PageSource, top: f32, bottom: f32) -> Option<String> {
    let region = page.region(top, bottom);
    match page.extract_text(&region) {
        Ok(Some(text)) if !text.trim().is_empty() => Some(text),
        Ok(_) => None,
        Err(e) => {
            log::warn!(
                "Text extraction failed on page {} in [{}, {}): {}",
                page.number(),
                top,
                bottom,
                e
            );
            None
        }
    }
}
