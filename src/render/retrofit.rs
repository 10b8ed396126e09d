//! Re-rendering ASCII tables of existing text output as HTML.
//!
//! Text produced with ASCII tables can be converted to HTML tables without
//! going back to the layout collaborator: the fixed-width rows between the
//! table delimiters are parsed back into a grid and drawn again.

use regex::{Captures, Regex};

use crate::model::CellGrid;

use super::text::{TABLE_END, TABLE_START};
use super::{format_table, RenderOptions, TableFormat};

/// Converts delimited ASCII tables inside text to HTML tables.
pub struct TableRetrofitter {
    block_regex: Regex,
    options: RenderOptions,
}

impl TableRetrofitter {
    /// Create a retrofitter with default render options.
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create a retrofitter with custom render options.
    ///
    /// The table format in `options` is ignored; output is always HTML.
    pub fn with_options(options: RenderOptions) -> Self {
        let pattern = format!(
            r"(?s){}(.*?){}",
            regex::escape(TABLE_START),
            regex::escape(TABLE_END)
        );
        Self {
            block_regex: Regex::new(&pattern).expect("table block pattern is valid"),
            options,
        }
    }

    /// Replace every ASCII table block in `text` with its HTML rendering.
    ///
    /// Blocks without any `|` rows are left untouched.
    ///
    /// ASCII output pads short rows on the right, while HTML puts the padding
    /// of a summary row right after its label. Trailing empty cells of
    /// summary rows are therefore treated as padding and moved. A summary
    /// row that really ended in empty cells cannot be told apart and is
    /// shifted the same way.
    pub fn convert(&self, text: &str) -> String {
        self.block_regex
            .replace_all(text, |caps: &Captures| {
                let grid = parse_ascii_table(&caps[1]);
                if grid.is_empty() {
                    return caps[0].to_string();
                }
                let grid = self.unpad_summary_rows(grid);
                let html = format_table(&grid, TableFormat::Html, &self.options);
                format!("\n{}\n{}\n{}\n", TABLE_START, html, TABLE_END)
            })
            .into_owned()
    }

    /// Drop trailing empty cells from summary rows, keeping the label.
    fn unpad_summary_rows(&self, grid: CellGrid) -> CellGrid {
        let rule = &self.options.summary_rule;
        let rows = grid
            .into_rows()
            .into_iter()
            .map(|mut row| {
                let is_summary = row
                    .first()
                    .and_then(|c| c.as_deref())
                    .is_some_and(|first| rule.is_summary(first));
                if is_summary {
                    while row.len() > 1 && row.last().is_some_and(|c| c.as_deref() == Some("")) {
                        row.pop();
                    }
                }
                row
            })
            .collect();
        CellGrid::from_rows(rows)
    }
}

impl Default for TableRetrofitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert delimited ASCII tables inside `text` to HTML tables.
pub fn convert_ascii_tables_to_html(text: &str) -> String {
    TableRetrofitter::new().convert(text)
}

/// Parse the body of an ASCII table back into a grid.
///
/// Border lines are discarded; each `|` row is split on the column
/// separator and its cells trimmed.
pub fn parse_ascii_table(body: &str) -> CellGrid {
    let mut grid = CellGrid::new();

    for line in body.trim().lines() {
        let Some(inner) = line.strip_prefix('|') else {
            continue;
        };
        let inner = inner.strip_suffix('|').unwrap_or(inner);
        grid.push_row(
            inner
                .split('|')
                .map(|cell| Some(cell.trim().to_string()))
                .collect(),
        );
    }

    grid
}
