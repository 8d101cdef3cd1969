//! Header-row detection over a bounded scan window.
//!
//! Naive best-header heuristics are fooled by instructional rows ("select
//! from the dropdown") and by rows whose labels merely resemble the target
//! fields. Scoring therefore combines three kinds of evidence per row:
//! decoy-pattern penalties, field-match confidence, and forward validation
//! of strong fields against the data actually below the candidate row.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use aim_model::{FieldRegistry, Grid};

use crate::matcher::FieldMatcher;
use crate::similarity::normalize_text;

/// Rows inspected as header candidates when the caller does not say otherwise.
pub const DEFAULT_SCAN_WINDOW: usize = 5;
/// Rows searched below a candidate header for a validator-satisfying value.
const LOOKAHEAD_ROWS: usize = 5;
/// Permissive matching threshold for header scanning; paraphrased labels
/// still count as evidence here, unlike in auto-mapping.
const HEADER_MATCH_THRESHOLD: f64 = 0.7;
/// Confidence at which a match earns the exact-ish bonus.
const HIGH_CONFIDENCE: f64 = 0.9;

const DECOY_CELL_PENALTY: f64 = 2.0;
const HIGH_CONFIDENCE_BONUS: f64 = 0.5;
const DISTINCT_FIELD_BONUS: f64 = 0.25;
const VALIDATED_FIELD_BONUS: f64 = 0.75;
const UNVALIDATED_FIELD_PENALTY: f64 = 0.5;
const NO_VALIDATION_PENALTY: f64 = 0.5;

/// Placeholder column labels, boilerplate instruction sentences, and generic
/// sheet titles. Matched against normalized cell text. A hit disqualifies
/// the cell from field matching entirely; decoys never count as evidence.
static DECOY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^column [a-z0-9]+$",
        r"^field \d+$",
        r"^(untitled|unnamed|header|heading)( \d+)?$",
        r"^(sheet|table|page) ?\d*$",
        r"^(asset )?(inventory|list|export|template|report)$",
        r"\b(select|choose|pick) (one|from|an option)\b",
        r"\b(fill in|enter (a|the|your)|instructions|do not edit|drop ?down|required field)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("decoy pattern"))
    .collect()
});

/// True if a cell looks like a placeholder label or instruction text rather
/// than a real column header.
pub fn is_decoy_header(cell: &str) -> bool {
    let normalized = normalize_text(cell);
    if normalized.is_empty() {
        return false;
    }
    DECOY_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(&normalized))
}

/// Finds the most plausible header row within a grid's scan window.
///
/// Detection is deterministic and total: the same grid always yields the
/// same index, and a best-effort row (0 by default) is returned even when no
/// candidate scores above the floor. There is no "no header" outcome.
#[derive(Debug, Clone, Copy)]
pub struct HeaderDetector<'r> {
    matcher: FieldMatcher<'r>,
    scan_window: usize,
}

impl<'r> HeaderDetector<'r> {
    pub fn new(registry: &'r FieldRegistry) -> Self {
        Self {
            matcher: FieldMatcher::new(registry),
            scan_window: DEFAULT_SCAN_WINDOW,
        }
    }

    /// Overrides the number of rows considered as header candidates.
    pub fn with_scan_window(mut self, rows: usize) -> Self {
        self.scan_window = rows.max(1);
        self
    }

    /// Returns the best header row index for the grid.
    pub fn detect(&self, grid: &Grid) -> usize {
        let mut best_index = 0usize;
        let mut best_score = 0.0f64; // score floor; nothing above it keeps row 0
        let window = grid.len().min(self.scan_window);
        for row in 0..window {
            let score = self.score_row(grid, row);
            if score > best_score {
                best_index = row;
                best_score = score;
            }
        }
        debug!(header_row = best_index, score = best_score, "header detected");
        best_index
    }

    /// Scores one row as a header candidate, normalized by the count of
    /// non-empty cells so wide and narrow sheets are comparable.
    fn score_row(&self, grid: &Grid, row_index: usize) -> f64 {
        let Some(row) = grid.row(row_index) else {
            return 0.0;
        };
        let registry = self.matcher.registry();

        let mut match_score = 0.0f64;
        let mut penalty = 0.0f64;
        let mut matched_fields: BTreeSet<String> = BTreeSet::new();
        let mut claimed_strong: BTreeSet<String> = BTreeSet::new();
        let mut validated_strong: BTreeSet<String> = BTreeSet::new();
        let mut width = 0usize;

        for (column, cell) in row.iter().enumerate() {
            if cell.trim().is_empty() {
                continue;
            }
            width += 1;

            // Decoy precedence: a cell that matches a decoy pattern is
            // penalized and excluded before any field matching runs, even if
            // it would also have matched an alias.
            if is_decoy_header(cell) {
                penalty += DECOY_CELL_PENALTY;
                continue;
            }

            let Some(found) = self.matcher.find_best_match(cell, HEADER_MATCH_THRESHOLD) else {
                continue;
            };
            match_score += found.confidence;
            if found.confidence >= HIGH_CONFIDENCE {
                match_score += HIGH_CONFIDENCE_BONUS;
            }
            let key = found.field.key.clone();
            matched_fields.insert(key.clone());

            if registry.is_strong(&key) {
                claimed_strong.insert(key.clone());
                if lookahead_validates(registry, grid, row_index, column, &key) {
                    validated_strong.insert(key);
                } else {
                    penalty += UNVALIDATED_FIELD_PENALTY;
                }
            }
        }

        if width == 0 {
            return 0.0;
        }

        let mut bonus = 0.0f64;
        if matched_fields.len() >= 2 {
            bonus += DISTINCT_FIELD_BONUS * matched_fields.len() as f64;
        }
        bonus += VALIDATED_FIELD_BONUS * validated_strong.len() as f64;
        if !claimed_strong.is_empty() && validated_strong.is_empty() {
            penalty += NO_VALIDATION_PENALTY;
        }

        (match_score - penalty + bonus) / width as f64
    }
}

/// Looks below a candidate header in the same column for a value satisfying
/// the strong field's validator. Stops at the first hit; loose fields are
/// never looked up since they have no reliable ground truth.
fn lookahead_validates(
    registry: &FieldRegistry,
    grid: &Grid,
    header_row: usize,
    column: usize,
    key: &str,
) -> bool {
    let last = grid.len().min(header_row + 1 + LOOKAHEAD_ROWS);
    for row in (header_row + 1)..last {
        if let Some(value) = grid.cell(row, column)
            && !value.trim().is_empty()
            && registry.validate_value(key, value)
        {
            return true;
        }
    }
    false
}
