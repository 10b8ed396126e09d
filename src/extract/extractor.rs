//! Whole-document extraction driver.

use crate::error::Result;
use crate::layout::LayoutBackend;
use crate::model::{Document, Element};

use super::merge::{merge_with_report, MergeReport};
use super::{ExtractOptions, PageLinearizer};

/// Rebuilds a document from a layout backend.
///
/// Pages are processed strictly in document order: a table may continue
/// onto the next page, so the merge pass needs the whole sequence.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Linearize every selected page and merge continuation tables.
    ///
    /// Only tables on consecutive selected pages are merged: a gap in the
    /// page selection ends any table that was running.
    pub fn extract(&self, backend: &dyn LayoutBackend) -> Result<Document> {
        let linearizer = PageLinearizer::with_error_mode(self.options.error_mode);
        let mut runs: Vec<Vec<Element>> = Vec::new();
        let mut run = Vec::new();
        let mut previous: Option<u32> = None;
        let mut pages_processed = 0u32;

        for index in 0..backend.page_count() {
            let page = backend.page(index)?;
            let number = page.number();

            if !self.options.pages.includes(number) {
                continue;
            }

            let contiguous = previous.and_then(|p| p.checked_add(1)) == Some(number);
            if !contiguous && !run.is_empty() {
                runs.push(std::mem::take(&mut run));
            }
            previous = Some(number);

            run.push(Element::PageMarker(number));
            run.extend(linearizer.linearize(page.as_ref())?);
            pages_processed += 1;
        }
        if !run.is_empty() {
            runs.push(run);
        }

        let mut elements = Vec::new();
        let mut report = MergeReport::default();
        for run in runs {
            if self.options.merge_tables {
                let (merged, run_report) = merge_with_report(run);
                report.tables_merged += run_report.tables_merged;
                report.separators_dropped += run_report.separators_dropped;
                elements.extend(merged);
            } else {
                elements.extend(run);
            }
        }

        // Merging drops the markers of pages a table ran onto
        let mut document = Document::from_elements(elements);
        document.page_count = pages_processed;
        document.stats.page_count = pages_processed;
        document.stats.merged_table_count = report.tables_merged as u32;

        log::debug!(
            "Extracted {} pages: {} text blocks, {} tables",
            document.page_count,
            document.stats.text_block_count,
            document.stats.table_count
        );

        Ok(document)
    }
}
