//! In-memory layout backend loaded from a JSON layout dump.
//!
//! A layout dump is what an external analyzer writes after decoding a PDF
//! and detecting its tables:
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "width": 612.0,
//!       "height": 792.0,
//!       "tables": [
//!         { "bbox": { "x0": 40, "top": 50, "x1": 570, "bottom": 110 },
//!           "rows": [["Item", "Amount"], ["Rent", "1200"]] }
//!       ],
//!       "lines": [ { "top": 10, "bottom": 22, "text": "Monthly report" } ]
//!     }
//!   ]
//! }
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Region;

use super::{DetectedTable, LayoutBackend, PageSource};

/// A positioned line of prose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// Top edge of the line
    pub top: f32,
    /// Bottom edge of the line
    pub bottom: f32,
    /// Line content
    pub text: String,
}

impl TextLine {
    /// Create a text line.
    pub fn new(top: f32, bottom: f32, text: impl Into<String>) -> Self {
        Self {
            top,
            bottom,
            text: text.into(),
        }
    }
}

/// Layout of a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Tables in detector order
    #[serde(default)]
    pub tables: Vec<DetectedTable>,

    /// Prose lines, top to bottom
    #[serde(default)]
    pub lines: Vec<TextLine>,
}

impl PageLayout {
    /// Create an empty page with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            tables: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Create an empty US Letter page.
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// Add a table and return self.
    pub fn with_table(mut self, table: DetectedTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Add a prose line and return self.
    pub fn with_line(mut self, top: f32, bottom: f32, text: impl Into<String>) -> Self {
        self.lines.push(TextLine::new(top, bottom, text));
        self
    }

    fn validate(&self, number: u32) -> Result<()> {
        let ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if ok {
            Ok(())
        } else {
            Err(Error::Layout(format!(
                "page {} has invalid dimensions {}x{}",
                number, self.width, self.height
            )))
        }
    }
}

/// A whole-document layout dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDump {
    /// Pages in document order
    pub pages: Vec<PageLayout>,
}

impl LayoutDump {
    /// Create an empty dump.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page.
    pub fn add_page(&mut self, page: PageLayout) {
        self.pages.push(page);
    }

    /// Parse a dump from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let dump: LayoutDump = serde_json::from_str(json)?;
        for (i, page) in dump.pages.iter().enumerate() {
            page.validate(i as u32 + 1)?;
        }
        Ok(dump)
    }

    /// Parse a dump from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let json = std::str::from_utf8(data)
            .map_err(|e| Error::Layout(format!("layout dump is not UTF-8: {}", e)))?;
        Self::from_json(json)
    }

    /// Load a dump from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Load a dump from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Serialize the dump to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }
}

impl LayoutBackend for LayoutDump {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Box<dyn PageSource + '_>> {
        let layout = self
            .pages
            .get(index)
            .ok_or(Error::PageOutOfRange(index as u32 + 1, self.pages.len() as u32))?;
        Ok(Box::new(DumpPage {
            number: index as u32 + 1,
            layout,
        }))
    }
}

/// Borrowed view of one dump page.
struct DumpPage<'a> {
    number: u32,
    layout: &'a PageLayout,
}

impl PageSource for DumpPage<'_> {
    fn number(&self) -> u32 {
        self.number
    }

    fn width(&self) -> f32 {
        self.layout.width
    }

    fn height(&self) -> f32 {
        self.layout.height
    }

    fn find_tables(&self) -> Result<Vec<DetectedTable>> {
        Ok(self.layout.tables.clone())
    }

    fn extract_text(&self, region: &Region) -> Result<Option<String>> {
        if !region.is_valid() {
            return Err(Error::RegionExtract(format!(
                "invalid region [{}, {}) on page {}",
                region.top, region.bottom, self.number
            )));
        }

        let lines: Vec<&str> = self
            .layout
            .lines
            .iter()
            .filter(|line| region.contains_span(line.top, line.bottom))
            .map(|line| line.text.as_str())
            .collect();

        if lines.is_empty() {
            Ok(None)
        } else {
            Ok(Some(lines.join("\n")))
        }
    }
}
