//! Minimal HTML table markup.

use super::NormalizedGrid;

/// Render a grid as a bordered `<table>`.
///
/// The first row becomes header cells. Cell text is emitted as-is.
pub fn render_html(grid: &NormalizedGrid) -> String {
    let mut lines = Vec::with_capacity(grid.rows().len() * (grid.columns() + 2) + 2);
    lines.push("<table border='1'>".to_string());

    for (i, row) in grid.rows().iter().enumerate() {
        let tag = if i == 0 { "th" } else { "td" };
        lines.push("  <tr>".to_string());
        for cell in row {
            lines.push(format!("    <{tag}>{cell}</{tag}>"));
        }
        lines.push("  </tr>".to_string());
    }

    lines.push("</table>".to_string());
    lines.join("\n")
}
