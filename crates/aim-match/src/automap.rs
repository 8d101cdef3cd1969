//! Auto-mapping of requested canonical fields onto a resolved header row.

use std::collections::BTreeSet;

use tracing::debug;

use aim_model::{
    AmbiguousMatch, AutoMappingResult, ColumnCandidate, FieldRegistry, MappedColumn, column_letter,
};

use crate::matcher::FieldMatcher;

/// Default confidence threshold for committing a column assignment. Stricter
/// than header scanning: a mis-assigned column silently corrupts every
/// downstream edit, so near-misses surface as unmatched instead.
pub const DEFAULT_MAP_CONFIDENCE: f64 = 0.85;

/// Assigns requested canonical field keys to header columns, one-to-one.
///
/// Every requested key lands in exactly one of the result's three sets:
/// committed `mappings`, `unmatched_fields`, or `ambiguous_matches`. A field
/// with several qualifying columns is never tie-broken here; the ambiguity is
/// a caller-visible outcome for external disambiguation.
#[derive(Debug, Clone, Copy)]
pub struct AutoMapper<'r> {
    matcher: FieldMatcher<'r>,
    min_confidence: f64,
    start_column: usize,
}

impl<'r> AutoMapper<'r> {
    pub fn new(registry: &'r FieldRegistry) -> Self {
        Self {
            matcher: FieldMatcher::new(registry),
            min_confidence: DEFAULT_MAP_CONFIDENCE,
            start_column: 0,
        }
    }

    /// Overrides the commit threshold for this mapper.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Skips columns before `start_column` entirely (sheets with leading
    /// bookkeeping columns).
    pub fn with_start_column(mut self, start_column: usize) -> Self {
        self.start_column = start_column;
        self
    }

    /// Maps `requested` keys against `header_cells` in list order.
    pub fn map_fields(&self, requested: &[String], header_cells: &[String]) -> AutoMappingResult {
        let registry = self.matcher.registry();
        let mut result = AutoMappingResult::default();
        // Columns consumed by unique assignments, global across the call: a
        // column never serves two fields.
        let mut used_columns: BTreeSet<usize> = BTreeSet::new();

        for key in requested {
            if !registry.contains(key) {
                // Unknown keys skip matching entirely.
                result.unmatched_fields.push(key.clone());
                continue;
            }

            let mut candidates: Vec<ColumnCandidate> = Vec::new();
            for (column, cell) in header_cells.iter().enumerate().skip(self.start_column) {
                if used_columns.contains(&column) {
                    continue;
                }
                if let Some(found) = self.matcher.match_field(cell, key, self.min_confidence) {
                    candidates.push(ColumnCandidate {
                        column_index: column,
                        column_letter: column_letter(column),
                        confidence: found.confidence,
                        match_type: found.match_type,
                    });
                }
            }

            match candidates.len() {
                0 => result.unmatched_fields.push(key.clone()),
                1 => {
                    let candidate = candidates.remove(0);
                    used_columns.insert(candidate.column_index);
                    result.mappings.push(MappedColumn {
                        field_key: key.clone(),
                        column_index: candidate.column_index,
                        column_letter: candidate.column_letter,
                        confidence: candidate.confidence,
                        match_type: candidate.match_type,
                    });
                }
                _ => result.ambiguous_matches.push(AmbiguousMatch {
                    field_key: key.clone(),
                    candidates,
                }),
            }
        }

        debug!(
            mapped = result.mappings.len(),
            unmatched = result.unmatched_fields.len(),
            ambiguous = result.ambiguous_matches.len(),
            "auto-mapping complete"
        );
        result
    }
}
