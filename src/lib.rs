//! # pdfstitch
//!
//! Reading-order reconstruction and table-continuation merging for PDF
//! layout output.
//!
//! A layout collaborator (anything implementing [`LayoutBackend`]) reports,
//! per page, the detected tables with their bounding boxes and cell grids,
//! and can extract the prose inside any vertical slice of the page. This
//! crate turns that into one top-to-bottom sequence of page markers, text
//! blocks and tables, fuses tables that were split by a page break, and
//! serializes the result with ASCII or HTML tables.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfstitch::{extract_file, render, ExtractOptions, RenderOptions};
//!
//! fn main() -> pdfstitch::Result<()> {
//!     let doc = extract_file("report.pdf", &ExtractOptions::default())?;
//!     let text = render::to_text(&doc, &RenderOptions::default());
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

pub mod detect;
pub mod error;
pub mod extract;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use error::{Error, Result};
pub use extract::{ErrorMode, ExtractOptions, Extractor, PageLinearizer, PageSelection};
pub use layout::{
    DetectedTable, LayoutBackend, LayoutDump, PageLayout, PageSource, PdfPlumberBackend,
};
pub use model::{BoundingBox, Cell, CellGrid, Document, Element, ExtractionStats, Region};
pub use render::{
    convert_ascii_tables_to_html, JsonFormat, RenderOptions, SummaryRowRule, TableFormat,
};

use std::path::Path;

/// Rebuild a document from any layout backend.
pub fn extract_backend(backend: &dyn LayoutBackend, options: &ExtractOptions) -> Result<Document> {
    Extractor::with_options(options.clone()).extract(backend)
}

/// Rebuild a document from a PDF or a layout dump file.
///
/// PDFs are decoded with [`PdfPlumberBackend`]; layout dumps are loaded
/// with [`LayoutDump`]. The opened document is released before returning.
///
/// # Example
///
/// ```no_run
/// use pdfstitch::{extract_file, ExtractOptions};
///
/// let doc = extract_file("report.pdf", &ExtractOptions::new().lenient()).unwrap();
/// println!("Tables: {}", doc.stats.table_count);
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<Document> {
    let path = path.as_ref();
    match detect_format_from_path(path)? {
        InputFormat::Pdf { version } => {
            log::debug!("Opening {} as PDF {}", path.display(), version);
            let backend = PdfPlumberBackend::open(path)?;
            extract_backend(&backend, options)
        }
        InputFormat::LayoutDump => {
            let dump = LayoutDump::from_path(path)?;
            extract_backend(&dump, options)
        }
    }
}

/// Rebuild a document from PDF or layout dump bytes.
pub fn extract_bytes(data: &[u8], options: &ExtractOptions) -> Result<Document> {
    match detect_format_from_bytes(data)? {
        InputFormat::Pdf { .. } => {
            let backend = PdfPlumberBackend::from_bytes(data)?;
            extract_backend(&backend, options)
        }
        InputFormat::LayoutDump => {
            let dump = LayoutDump::from_bytes(data)?;
            extract_backend(&dump, options)
        }
    }
}

/// Rebuild a document from a file and serialize it to text.
pub fn extract_text_and_tables<P: AsRef<Path>>(
    path: P,
    extract_options: &ExtractOptions,
    render_options: &RenderOptions,
) -> Result<String> {
    let doc = extract_file(path, extract_options)?;
    Ok(render::to_text(&doc, render_options))
}

/// Like [`extract_text_and_tables`], but a failure becomes the returned
/// text itself instead of an error.
///
/// This is the contract of the command-line tool: the output file always
/// gets written, and it holds the error message when processing failed.
///
/// # Example
///
/// ```no_run
/// use pdfstitch::{extract_to_string, ExtractOptions, RenderOptions};
///
/// let text = extract_to_string("missing.json", &ExtractOptions::default(), &RenderOptions::default());
/// assert!(text.starts_with("Error processing PDF with pdfplumber:"));
/// ```
pub fn extract_to_string<P: AsRef<Path>>(
    path: P,
    extract_options: &ExtractOptions,
    render_options: &RenderOptions,
) -> String {
    match extract_text_and_tables(path, extract_options, render_options) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Extraction failed: {}", e);
            error_text(&e)
        }
    }
}

/// Document body written in place of content when processing fails.
pub fn error_text(err: &Error) -> String {
    format!("Error processing PDF with pdfplumber: {}", err)
}

/// Builder for extracting and rendering documents.
///
/// # Example
///
/// ```no_run
/// use pdfstitch::{PdfStitch, TableFormat};
///
/// let text = PdfStitch::new()
///     .lenient()
///     .with_table_format(TableFormat::Ascii)
///     .extract_file("report.pdf")?
///     .to_text();
/// # Ok::<(), pdfstitch::Error>(())
/// ```
pub struct PdfStitch {
    extract_options: ExtractOptions,
    render_options: RenderOptions,
}

impl PdfStitch {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient mode.
    pub fn lenient(mut self) -> Self {
        self.extract_options = self.extract_options.lenient();
        self
    }

    /// Keep continuation tables separate.
    pub fn without_merge(mut self) -> Self {
        self.extract_options = self.extract_options.merge_tables(false);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.extract_options = self.extract_options.with_pages(pages);
        self
    }

    /// Set the table format.
    pub fn with_table_format(mut self, format: TableFormat) -> Self {
        self.render_options = self.render_options.with_table_format(format);
        self
    }

    /// Set the summary-row rule.
    pub fn with_summary_rule(mut self, rule: SummaryRowRule) -> Self {
        self.render_options = self.render_options.with_summary_rule(rule);
        self
    }

    /// Extract from a PDF or layout dump file.
    pub fn extract_file<P: AsRef<Path>>(self, path: P) -> Result<StitchResult> {
        let document = extract_file(path, &self.extract_options)?;
        Ok(StitchResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Extract from PDF or layout dump bytes.
    pub fn extract_bytes(self, data: &[u8]) -> Result<StitchResult> {
        let document = extract_bytes(data, &self.extract_options)?;
        Ok(StitchResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Extract from a layout backend.
    pub fn extract_backend(self, backend: &dyn LayoutBackend) -> Result<StitchResult> {
        let document = extract_backend(backend, &self.extract_options)?;
        Ok(StitchResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for PdfStitch {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of extracting a document.
pub struct StitchResult {
    /// The rebuilt document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl StitchResult {
    /// Serialize to text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
