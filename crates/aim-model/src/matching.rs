//! Match and mapping result types.
//!
//! These are the ephemeral outputs of the resolution engine plus the stored
//! mapping shape exchanged with the persistence collaborator. Nothing here is
//! cached by the engine itself; callers own every lifetime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// How a header string matched a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Post-normalization equality with the field's display name.
    Exact,
    /// Post-normalization equality with one of the field's aliases.
    Alias,
    /// Similarity above threshold against one of the field's aliases.
    Fuzzy,
}

/// Result of matching one header string against the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: CanonicalField,
    /// Confidence in [0, 1].
    pub confidence: f64,
    pub match_type: MatchType,
    /// The alias that produced the match, for alias/fuzzy matches.
    pub matched_alias: Option<String>,
}

/// A committed column assignment for one requested field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappedColumn {
    pub field_key: String,
    pub column_index: usize,
    /// Spreadsheet letter form of `column_index` (`A`, `B`, …).
    pub column_letter: String,
    pub confidence: f64,
    pub match_type: MatchType,
}

/// One candidate column for a field that matched more than once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnCandidate {
    pub column_index: usize,
    pub column_letter: String,
    pub confidence: f64,
    pub match_type: MatchType,
}

/// A requested field with two or more qualifying columns. Left for an
/// external decision; the mapper never tie-breaks these silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbiguousMatch {
    pub field_key: String,
    pub candidates: Vec<ColumnCandidate>,
}

/// Outcome of auto-mapping a batch of requested field keys against one
/// header row.
///
/// `mappings`, `unmatched_fields`, and `ambiguous_matches` partition the
/// requested key list: every requested key appears in exactly one of the
/// three, and no column index is referenced by two mappings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoMappingResult {
    pub mappings: Vec<MappedColumn>,
    pub unmatched_fields: Vec<String>,
    pub ambiguous_matches: Vec<AmbiguousMatch>,
}

impl AutoMappingResult {
    /// Field-key → column-index view of the committed mappings, in the shape
    /// the name synthesizer consumes.
    pub fn column_by_key(&self) -> BTreeMap<String, usize> {
        self.mappings
            .iter()
            .map(|mapping| (mapping.field_key.clone(), mapping.column_index))
            .collect()
    }

    /// Total count of requested keys this result accounts for.
    pub fn requested_len(&self) -> usize {
        self.mappings.len() + self.unmatched_fields.len() + self.ambiguous_matches.len()
    }
}

/// A persisted column↔field association, as supplied by the persistence
/// collaborator. The engine treats `field` as an opaque display string and
/// re-identifies columns by letter position, never by re-deriving identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredColumnMapping {
    /// Column letter (`A`, `B`, …, `AA`, …).
    pub column: String,
    /// Field display name at save time.
    pub field: String,
    /// Display order.
    pub order: u32,
}

/// A sheet's saved mapping set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetMappingConfig {
    pub sheet_id: String,
    pub mappings: Vec<StoredColumnMapping>,
    pub unmatched_fields: Vec<String>,
}

/// Caller-managed cache of one sheet's detection outcome.
///
/// Purely a performance optimization: the engine accepts it as optional
/// input and returns a fresh one as output, but provides no invalidation.
/// Callers must discard it whenever the grid or mapping set changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionCache {
    pub header_row: usize,
    /// Column letter → display name for the detected header cells.
    pub display_names: BTreeMap<String, String>,
}
