//! Rendering options and configuration.

use std::fmt;
use std::sync::Arc;

/// Leading words of Korean total/subtotal rows: total, grand total,
/// subtotal, sum.
pub const DEFAULT_SUMMARY_KEYWORDS: [&str; 4] = ["합계", "총계", "소계", "계"];

/// Options for rendering a rebuilt document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// How tables are drawn
    pub table_format: TableFormat,

    /// Which short rows keep their label left and numbers right (HTML only)
    pub summary_rule: SummaryRowRule,

    /// Normalize cell text to Unicode NFC
    pub normalize_unicode: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table format.
    pub fn with_table_format(mut self, format: TableFormat) -> Self {
        self.table_format = format;
        self
    }

    /// Set the summary-row rule.
    pub fn with_summary_rule(mut self, rule: SummaryRowRule) -> Self {
        self.summary_rule = rule;
        self
    }

    /// Enable or disable NFC normalization of cell text.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            table_format: TableFormat::Html,
            summary_rule: SummaryRowRule::default(),
            normalize_unicode: true,
        }
    }
}

/// How to draw tables in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Fixed-width box drawing
    Ascii,
    /// Minimal `<table>` markup
    #[default]
    Html,
}

type SummaryPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Decides whether a table row is a total/subtotal row.
///
/// The predicate sees the row's first cell after normalization.
#[derive(Clone)]
pub enum SummaryRowRule {
    /// The first cell starts with one of these words
    Keywords(Vec<String>),
    /// Caller-supplied predicate
    Custom(SummaryPredicate),
    /// No row is a summary row
    Disabled,
}

impl SummaryRowRule {
    /// Build a keyword rule.
    pub fn keywords<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        SummaryRowRule::Keywords(words.into_iter().map(Into::into).collect())
    }

    /// Build a rule from a predicate.
    pub fn custom(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        SummaryRowRule::Custom(Arc::new(predicate))
    }

    /// Check whether a row starting with `first_cell` is a summary row.
    pub fn is_summary(&self, first_cell: &str) -> bool {
        let first_cell = first_cell.trim();
        match self {
            SummaryRowRule::Keywords(words) => words
                .iter()
                .any(|w| !w.is_empty() && first_cell.starts_with(w.as_str())),
            SummaryRowRule::Custom(predicate) => predicate(first_cell),
            SummaryRowRule::Disabled => false,
        }
    }
}

impl Default for SummaryRowRule {
    fn default() -> Self {
        Self::keywords(DEFAULT_SUMMARY_KEYWORDS)
    }
}

impl fmt::Debug for SummaryRowRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryRowRule::Keywords(words) => f.debug_tuple("Keywords").field(words).finish(),
            SummaryRowRule::Custom(_) => f.write_str("Custom(..)"),
            SummaryRowRule::Disabled => f.write_str("Disabled"),
        }
    }
}
