//! Cell grid normalization shared by the table renderers.

use unicode_normalization::UnicodeNormalization;

use crate::model::{Cell, CellGrid};

use super::{RenderOptions, TableFormat};

/// A rectangular grid of cleaned cell text, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedGrid {
    rows: Vec<Vec<String>>,
    columns: usize,
}

impl NormalizedGrid {
    /// Get the rows; every row has [`columns`](Self::columns) cells.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Convert back into a cell grid with every cell present.
    pub fn to_cell_grid(&self) -> CellGrid {
        CellGrid::from_strings(self.rows.iter().map(|r| r.iter().cloned()))
    }
}

/// Clean and pad a grid for the given table format.
///
/// Absent cells become empty strings, line breaks become a space (ASCII) or
/// disappear (HTML), and cells are trimmed. Every row is padded to the widest
/// row. In HTML, short summary rows get their padding right after the first
/// cell so the label stays left and the figures line up under the header.
///
/// Returns `None` for a grid with no rows or an empty first row.
pub fn normalize(
    grid: &CellGrid,
    format: TableFormat,
    options: &RenderOptions,
) -> Option<NormalizedGrid> {
    if !grid.is_renderable() {
        return None;
    }

    let line_break = match format {
        TableFormat::Ascii => " ",
        TableFormat::Html => "",
    };

    let rows: Vec<Vec<String>> = grid
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| clean_cell(cell, line_break, options.normalize_unicode))
                .collect()
        })
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

    let rows = rows
        .into_iter()
        .map(|row| pad_row(row, columns, format, options))
        .collect();

    Some(NormalizedGrid { rows, columns })
}

fn clean_cell(cell: &Cell, line_break: &str, nfc: bool) -> String {
    let raw = cell.as_deref().unwrap_or("");
    let text: String = if nfc { raw.nfc().collect() } else { raw.to_string() };
    text.replace("\r\n", line_break)
        .replace(['\n', '\r'], line_break)
        .trim()
        .to_string()
}

fn pad_row(
    mut row: Vec<String>,
    columns: usize,
    format: TableFormat,
    options: &RenderOptions,
) -> Vec<String> {
    let missing = columns - row.len();
    if missing == 0 {
        return row;
    }

    let summary = format == TableFormat::Html
        && row
            .first()
            .is_some_and(|first| options.summary_rule.is_summary(first));

    if summary {
        row.splice(1..1, std::iter::repeat(String::new()).take(missing));
    } else {
        row.resize(columns, String::new());
    }
    row
}
