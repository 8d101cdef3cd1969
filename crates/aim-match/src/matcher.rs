//! Header-text to canonical-field matching.

use aim_model::{CanonicalField, FieldMatch, FieldRegistry, MatchType};

use crate::similarity::{normalize_text, similarity};

/// Matches single header strings against a field registry.
///
/// Matching runs in two tiers: exact post-normalization equality against
/// every field's display name wins outright at confidence 1.0; otherwise
/// every alias of every field is scored and the strictly highest score above
/// the caller's threshold wins, with ties kept by registry order. The
/// threshold is a parameter because call sites differ: auto-mapping is
/// strict, header scanning is permissive.
#[derive(Debug, Clone, Copy)]
pub struct FieldMatcher<'r> {
    registry: &'r FieldRegistry,
}

impl<'r> FieldMatcher<'r> {
    pub fn new(registry: &'r FieldRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r FieldRegistry {
        self.registry
    }

    /// Finds the best-matching field for a header string, or `None` when
    /// nothing clears `min_confidence`. No match is a valid result, not an
    /// error.
    pub fn find_best_match(&self, header: &str, min_confidence: f64) -> Option<FieldMatch> {
        let normalized = normalize_text(header);
        if normalized.is_empty() {
            return None;
        }

        // Display-name exactness always wins over any alias score.
        for field in self.registry.fields() {
            if normalize_text(&field.display_name) == normalized {
                return Some(exact_match(field));
            }
        }

        let mut best: Option<FieldMatch> = None;
        for field in self.registry.fields() {
            if let Some(candidate) = best_alias_match(field, header, min_confidence) {
                let replace = best
                    .as_ref()
                    .is_none_or(|current| candidate.confidence > current.confidence);
                if replace {
                    best = Some(candidate);
                }
            }
        }
        best
    }

    /// Matches a header string against one specific field only, using the
    /// same exact-then-alias tiers. Used by the auto-mapper, which resolves
    /// requested keys one at a time.
    pub fn match_field(&self, header: &str, key: &str, min_confidence: f64) -> Option<FieldMatch> {
        let field = self.registry.get(key)?;
        let normalized = normalize_text(header);
        if normalized.is_empty() {
            return None;
        }
        if normalize_text(&field.display_name) == normalized {
            return Some(exact_match(field));
        }
        best_alias_match(field, header, min_confidence)
    }
}

fn exact_match(field: &CanonicalField) -> FieldMatch {
    FieldMatch {
        field: field.clone(),
        confidence: 1.0,
        match_type: MatchType::Exact,
        matched_alias: None,
    }
}

/// Best-scoring alias of one field, or `None` below threshold. Earlier
/// aliases win ties, mirroring registry-order tie-breaking across fields.
fn best_alias_match(
    field: &CanonicalField,
    header: &str,
    min_confidence: f64,
) -> Option<FieldMatch> {
    let mut best: Option<FieldMatch> = None;
    for alias in &field.aliases {
        let score = similarity(header, alias);
        if score < min_confidence {
            continue;
        }
        let replace = best
            .as_ref()
            .is_none_or(|current| score > current.confidence);
        if replace {
            best = Some(FieldMatch {
                field: field.clone(),
                confidence: score,
                match_type: if score == 1.0 {
                    MatchType::Alias
                } else {
                    MatchType::Fuzzy
                },
                matched_alias: Some(alias.clone()),
            });
        }
    }
    best
}
