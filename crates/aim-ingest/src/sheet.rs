//! Sheet extraction: grid + detected header → structured table.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use aim_match::HeaderDetector;
use aim_model::{FieldRegistry, Grid};

use crate::grid_reader::read_grid;

/// A sheet with its header resolved: the detected header row, the header
/// cell texts, and the data rows beneath it padded to the header width.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub header_row: usize,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Extracts the table from an already-loaded grid.
    pub fn from_grid(registry: &FieldRegistry, grid: &Grid) -> Self {
        let header_row = HeaderDetector::new(registry).detect(grid);
        let headers: Vec<String> = grid
            .row(header_row)
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        let mut rows = Vec::new();
        for record in grid.rows().iter().skip(header_row + 1) {
            let mut row = Vec::with_capacity(headers.len());
            for index in 0..headers.len() {
                row.push(record.get(index).cloned().unwrap_or_default());
            }
            rows.push(row);
        }
        debug!(header_row, columns = headers.len(), rows = rows.len(), "sheet extracted");
        Self {
            header_row,
            headers,
            rows,
        }
    }
}

/// Loads a CSV export and resolves its header in one step.
pub fn read_sheet(registry: &FieldRegistry, path: &Path) -> Result<SheetTable> {
    let grid = read_grid(path)?;
    Ok(SheetTable::from_grid(registry, &grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_rows_are_padded_to_header_width() {
        let grid = Grid::from_rows([
            vec!["Serial Number", "Asset Tag", "Status"],
            vec!["SN-00912"],
            vec!["SN-11202", "A048214", "In Use", "extra"],
        ]);
        let table = SheetTable::from_grid(FieldRegistry::standard(), &grid);
        assert_eq!(table.header_row, 0);
        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.rows[0], vec!["SN-00912", "", ""]);
        // Cells past the header width are dropped.
        assert_eq!(table.rows[1], vec!["SN-11202", "A048214", "In Use"]);
    }

    #[test]
    fn rows_above_the_header_are_excluded() {
        let grid = Grid::from_rows([
            vec!["Asset Inventory", ""],
            vec!["Serial Number", "Asset Tag"],
            vec!["SN-00912", "A048213"],
        ]);
        let table = SheetTable::from_grid(FieldRegistry::standard(), &grid);
        assert_eq!(table.header_row, 1);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "SN-00912");
    }

    #[test]
    fn empty_grid_yields_empty_table() {
        let table = SheetTable::from_grid(FieldRegistry::standard(), &Grid::default());
        assert_eq!(table.header_row, 0);
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }
}
