//! Caller-managed memoization of detection results.
//!
//! The engine holds no state between calls; a caller that re-renders the
//! same sheet repeatedly may pass back the cache returned here to skip
//! re-detection. Staleness is entirely the caller's problem: the cache must
//! be dropped whenever the grid or the mapping set changes.

use aim_model::{DetectionCache, Grid, column_letter};

use crate::detect::HeaderDetector;

/// Returns the header row for `grid`, reusing `cache` when supplied, and the
/// cache to carry forward.
pub fn detect_with_cache(
    detector: &HeaderDetector<'_>,
    grid: &Grid,
    cache: Option<&DetectionCache>,
) -> (usize, DetectionCache) {
    if let Some(existing) = cache {
        return (existing.header_row, existing.clone());
    }
    let header_row = detector.detect(grid);
    (header_row, build_cache(grid, header_row))
}

/// Builds a fresh cache snapshot from a detected header row: column letter →
/// header cell text for every non-empty header cell.
pub fn build_cache(grid: &Grid, header_row: usize) -> DetectionCache {
    let mut cache = DetectionCache {
        header_row,
        ..DetectionCache::default()
    };
    if let Some(row) = grid.row(header_row) {
        for (column, cell) in row.iter().enumerate() {
            let trimmed = cell.trim();
            if trimmed.is_empty() {
                continue;
            }
            cache
                .display_names
                .insert(column_letter(column), trimmed.to_string());
        }
    }
    cache
}

#[cfg(test)]
mod tests {
    use super::*;
    use aim_model::FieldRegistry;

    #[test]
    fn fresh_detection_builds_display_names() {
        let grid = Grid::from_rows([
            vec!["Serial Number", "", "Asset Tag"],
            vec!["SN-00912", "", "A048213"],
        ]);
        let detector = HeaderDetector::new(FieldRegistry::standard());
        let (row, cache) = detect_with_cache(&detector, &grid, None);
        assert_eq!(row, 0);
        assert_eq!(cache.header_row, 0);
        assert_eq!(cache.display_names.get("A").map(String::as_str), Some("Serial Number"));
        assert_eq!(cache.display_names.get("C").map(String::as_str), Some("Asset Tag"));
        assert!(!cache.display_names.contains_key("B"));
    }

    #[test]
    fn supplied_cache_short_circuits_detection() {
        let grid = Grid::from_rows([vec!["Serial Number"], vec!["SN-00912"]]);
        let detector = HeaderDetector::new(FieldRegistry::standard());
        let stale = DetectionCache {
            header_row: 7,
            ..DetectionCache::default()
        };
        // The engine trusts the cache blindly; invalidation is the caller's.
        let (row, carried) = detect_with_cache(&detector, &grid, Some(&stale));
        assert_eq!(row, 7);
        assert_eq!(carried.header_row, 7);
    }
}
