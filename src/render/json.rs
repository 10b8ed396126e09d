//! JSON rendering for rebuilt documents.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
