//! Raw text grid handed to the resolution engine.

/// A bounded window of spreadsheet rows, each an ordered sequence of text
/// cells. Rows may be ragged; missing cells read as empty. The engine never
/// mutates a grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Convenience constructor for literal grids in tests and callers.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = &'static str>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cell text at (row, column); `None` for out-of-bounds positions in
    /// either dimension, so ragged rows read safely.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count of cells with non-whitespace content in a row.
    pub fn row_width(&self, index: usize) -> usize {
        self.rows
            .get(index)
            .map(|row| row.iter().filter(|cell| !cell.trim().is_empty()).count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_cells_read_safely() {
        let grid = Grid::from_rows([vec!["a", "b"], vec!["c"]]);
        assert_eq!(grid.cell(0, 1), Some("b"));
        assert_eq!(grid.cell(1, 1), None);
        assert_eq!(grid.cell(5, 0), None);
    }

    #[test]
    fn row_width_counts_non_empty_cells() {
        let grid = Grid::from_rows([vec!["a", " ", "", "b"]]);
        assert_eq!(grid.row_width(0), 2);
        assert_eq!(grid.row_width(3), 0);
    }
}
