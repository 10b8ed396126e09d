//! Table formatting entry point.

use crate::model::CellGrid;

use super::ascii::render_ascii;
use super::html::render_html;
use super::{normalize, RenderOptions, TableFormat};

/// Format a cell grid in the given table format.
///
/// A grid with no rows, or whose first row is empty, formats to an empty
/// string.
pub fn format_table(grid: &CellGrid, format: TableFormat, options: &RenderOptions) -> String {
    let Some(normalized) = normalize(grid, format, options) else {
        return String::new();
    };

    match format {
        TableFormat::Ascii => render_ascii(&normalized),
        TableFormat::Html => render_html(&normalized),
    }
}
