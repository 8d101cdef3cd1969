//! CSV to [`Grid`] loading.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use aim_model::Grid;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV export into a raw grid.
///
/// No header semantics are assumed at this layer: every record becomes a row
/// of trimmed cells, ragged rows are kept ragged, and rows with no content at
/// all are dropped. Header detection happens downstream on the grid.
pub fn read_grid(path: &Path) -> Result<Grid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), path = %path.display(), "grid loaded");
    Ok(Grid::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn loads_cells_and_skips_blank_rows() {
        let file = write_csv("Serial Number,Asset Tag\n,,\nSN-00912,A048213\n");
        let grid = read_grid(file.path()).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.cell(0, 0), Some("Serial Number"));
        assert_eq!(grid.cell(1, 1), Some("A048213"));
    }

    #[test]
    fn trims_whitespace_and_bom() {
        let file = write_csv("\u{feff}Serial Number, Asset Tag \nSN-00912,A048213\n");
        let grid = read_grid(file.path()).unwrap();
        assert_eq!(grid.cell(0, 0), Some("Serial Number"));
        assert_eq!(grid.cell(0, 1), Some("Asset Tag"));
    }

    #[test]
    fn keeps_ragged_rows_ragged() {
        let file = write_csv("a,b,c\nd\n");
        let grid = read_grid(file.path()).unwrap();
        assert_eq!(grid.row(1).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_grid(Path::new("/no/such/file.csv")).is_err());
    }
}
