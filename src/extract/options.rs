//! Extraction options and configuration.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options for rebuilding a document from layout output.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Error handling mode for per-page table detection failures
    pub error_mode: ErrorMode,

    /// Page selection (which pages to process)
    pub pages: PageSelection,

    /// Whether to fuse continuation tables
    pub merge_tables: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (pages whose tables cannot be detected are
    /// treated as plain text).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Enable or disable the table merge pass.
    pub fn merge_tables(mut self, merge: bool) -> Self {
        self.merge_tables = merge;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            pages: PageSelection::All,
            merge_tables: true,
        }
    }
}

/// Error handling mode during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any table detection error
    #[default]
    Strict,
    /// Skip failed detections and continue
    Lenient,
}

/// Page selection for extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Process all pages
    #[default]
    All,
    /// Process a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Process a list of disjoint ranges (inclusive, 1-indexed, sorted)
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        let invalid = || Error::InvalidPageRange(s.to_string());

        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let start: u32 = start.trim().parse().map_err(|_| invalid())?;
                let end: u32 = end.trim().parse().map_err(|_| invalid())?;
                if start == 0 || start > end {
                    return Err(invalid());
                }
                return Ok(PageSelection::Range(start..=end));
            }
        }

        let mut ranges = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            let (start, end) = match part.split_once('-') {
                Some((start, end)) => (
                    start.trim().parse::<u32>().map_err(|_| invalid())?,
                    end.trim().parse::<u32>().map_err(|_| invalid())?,
                ),
                None => {
                    let p: u32 = part.parse().map_err(|_| invalid())?;
                    (p, p)
                }
            };
            if start == 0 || start > end {
                return Err(invalid());
            }
            ranges.push(start..=end);
        }

        Ok(PageSelection::Ranges(coalesce(ranges)))
    }
}

/// Sort ranges and join the ones that overlap or touch.
fn coalesce(mut ranges: Vec<RangeInclusive<u32>>) -> Vec<RangeInclusive<u32>> {
    ranges.sort_unstable_by_key(|r| *r.start());

    let mut joined: Vec<RangeInclusive<u32>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match joined.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => joined.push(range),
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_options_builder() {
        let options = ExtractOptions::new()
            .lenient()
            .merge_tables(false)
            .with_pages(PageSelection::Range(2..=4));

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(!options.merge_tables);
        assert_eq!(options.pages, PageSelection::Range(2..=4));
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.merge_tables);
        assert_eq!(options.pages, PageSelection::All);
    }

    #[test]
    fn test_page_selection_includes() {
        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));

        let pages = PageSelection::Ranges(vec![1..=1, 3..=3, 5..=7]);
        assert!(pages.includes(1));
        assert!(!pages.includes(2));
        assert!(pages.includes(6));
        assert!(!pages.includes(8));
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(
            PageSelection::parse("1-10").unwrap(),
            PageSelection::Range(1..=10)
        );
        assert_eq!(
            PageSelection::parse("5,1,3-4,3").unwrap(),
            PageSelection::Ranges(vec![1..=1, 3..=5])
        );
        assert_eq!(
            PageSelection::parse("7, 2-3 ,9").unwrap(),
            PageSelection::Ranges(vec![2..=3, 7..=7, 9..=9])
        );
    }

    #[test]
    fn test_page_selection_wide_range_stays_compact() {
        let selection = PageSelection::parse("1,2-4294967295").unwrap();

        assert_eq!(selection, PageSelection::Ranges(vec![1..=u32::MAX]));
        assert!(selection.includes(50_000_000));
        assert!(selection.includes(u32::MAX));
    }

    #[test]
    fn test_page_selection_overlapping_ranges() {
        assert_eq!(
            PageSelection::parse("10-20,1-3,15-30,4").unwrap(),
            PageSelection::Ranges(vec![1..=4, 10..=30])
        );
    }

    #[test]
    fn test_page_selection_parse_invalid() {
        assert!(matches!(
            PageSelection::parse("x-3"),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(PageSelection::parse("5-2").is_err());
        assert!(PageSelection::parse("0").is_err());
        assert!(PageSelection::parse("1,,2").is_err());
    }
}
