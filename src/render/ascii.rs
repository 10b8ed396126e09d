//! Fixed-width ASCII table drawing.

use super::NormalizedGrid;

/// Narrowest column, so empty columns still read as columns.
const MIN_COLUMN_WIDTH: usize = 2;

/// Draw a grid as an ASCII box table.
///
/// A border line is drawn above the first row and below every row.
pub fn render_ascii(grid: &NormalizedGrid) -> String {
    let widths = column_widths(grid);

    let border = {
        let mut line = String::from("+");
        for w in &widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    };

    let mut lines = Vec::with_capacity(grid.rows().len() * 2 + 1);
    lines.push(border.clone());

    for row in grid.rows() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| ljust(cell, w))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
        lines.push(border.clone());
    }

    lines.join("\n")
}

fn column_widths(grid: &NormalizedGrid) -> Vec<usize> {
    (0..grid.columns())
        .map(|i| {
            grid.rows()
                .iter()
                .map(|row| row[i].chars().count())
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN_WIDTH)
        })
        .collect()
}

fn ljust(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}
