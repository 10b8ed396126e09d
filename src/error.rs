//! Error types for pdfstitch library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfstitch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rebuilding a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither a PDF nor a layout dump.
    #[error("Unknown file format: not a PDF or layout dump")]
    UnknownFormat,

    /// The layout collaborator could not open or decode the document.
    #[error("Layout error: {0}")]
    Layout(String),

    /// Table detection failed for a page.
    #[error("Table detection failed on page {page}: {message}")]
    TableDetection {
        /// 1-indexed page number
        page: u32,
        /// Collaborator-provided failure description
        message: String,
    },

    /// Text extraction failed for a page region.
    #[error("Region extraction error: {0}")]
    RegionExtract(String),

    /// Error during rendering (text, HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Layout(format!("invalid layout dump: {}", err))
    }
}
