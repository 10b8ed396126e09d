//! Cell grid types.

use serde::{Deserialize, Serialize};

/// A single table cell as reported by the layout collaborator.
///
/// `None` marks a cell the detector found but could not fill (merged or
/// blank cells in ruled tables).
pub type Cell = Option<String>;

/// The row/cell matrix of one table.
///
/// Rows are independently sized. Ragged grids are expected input and are
/// only squared up at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellGrid {
    rows: Vec<Vec<Cell>>,
}

impl CellGrid {
    /// Create a new empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from raw rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Create a grid from string rows; every cell is present.
    pub fn from_strings<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|s| Some(s.into())).collect())
                .collect(),
        }
    }

    /// Add a row to the grid.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Move all rows of `other` to the end of this grid.
    pub fn append(&mut self, other: CellGrid) {
        self.rows.extend(other.rows);
    }

    /// Get the rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Consume the grid and return its rows.
    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the widest row length.
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if the grid has something to render: at least one row, and a
    /// non-empty first row.
    pub fn is_renderable(&self) -> bool {
        self.rows.first().is_some_and(|r| !r.is_empty())
    }
}

impl From<Vec<Vec<Cell>>> for CellGrid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = CellGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.max_columns(), 0);
        assert!(!grid.is_renderable());
    }

    #[test]
    fn test_grid_ragged() {
        let grid = CellGrid::from_rows(vec![
            vec![Some("a".into()), Some("b".into()), None],
            vec![Some("c".into())],
        ]);
        assert_eq!(grid.max_columns(), 3);
        assert!(grid.is_renderable());
    }

    #[test]
    fn test_grid_append_keeps_order() {
        let mut first = CellGrid::from_strings([["h1", "h2"], ["1", "2"]]);
        let second = CellGrid::from_strings([["3", "4"]]);
        first.append(second);

        assert_eq!(first.row_count(), 3);
        assert_eq!(first.rows()[2], vec![Some("3".into()), Some("4".into())]);
    }

    #[test]
    fn test_empty_first_row_not_renderable() {
        let grid = CellGrid::from_rows(vec![vec![], vec![Some("x".into())]]);
        assert!(!grid.is_renderable());
    }

    #[test]
    fn test_grid_serializes_as_nested_arrays() {
        let grid = CellGrid::from_rows(vec![vec![Some("a".into()), None]]);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[["a",null]]"#);
    }
}
