//! Text normalization and similarity scoring.
//!
//! Similarity is Jaro-Winkler over normalized strings, with normalized
//! equality short-circuiting to 1.0. The Jaro-Winkler implementation comes
//! from `rapidfuzz` (standard matching window of `max(len)/2 - 1`,
//! transposition counting, and a prefix bonus of `0.1 * prefix * (1 - jaro)`
//! with the common prefix capped at four characters).

use rapidfuzz::distance::jaro_winkler::similarity as jaro_winkler;

/// Normalizes header text for comparison: lowercases, strips punctuation
/// (every non-alphanumeric character becomes a separator), and collapses
/// runs of whitespace. Total over all input, including the empty string.
pub fn normalize_text(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Similarity between two strings in [0, 1].
///
/// Returns 1.0 when the normalized forms are equal (including two strings
/// that are both empty after normalization), 0.0 when exactly one side
/// normalizes to empty, and the Jaro-Winkler score of the normalized forms
/// otherwise.
pub fn similarity(a: &str, b: &str) -> f64 {
    let left = normalize_text(a);
    let right = normalize_text(b);
    match (left.is_empty(), right.is_empty()) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            if left == right {
                1.0
            } else {
                jaro_winkler(left.chars(), right.chars())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_collapses_whitespace() {
        assert_eq!(normalize_text("  Serial   Number "), "serial number");
        assert_eq!(normalize_text("Serial #"), "serial");
        assert_eq!(normalize_text("Asset-Tag_No."), "asset tag no");
        assert_eq!(normalize_text("***"), "");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("Serial Number", "Serial Number"), 1.0);
        assert_eq!(similarity("serial_number", "Serial Number"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("##", "--"), 1.0);
    }

    #[test]
    fn empty_versus_nonempty_scores_zero() {
        assert_eq!(similarity("", "serial"), 0.0);
        assert_eq!(similarity("serial", ""), 0.0);
        assert_eq!(similarity("###", "serial"), 0.0);
    }

    #[test]
    fn jaro_winkler_reference_value() {
        // Classic reference pair: JW("martha", "marhta") = 0.9611.
        let score = similarity("martha", "marhta");
        assert!((score - 0.9611).abs() < 1e-3, "got {score}");
    }

    #[test]
    fn near_matches_score_below_one() {
        let score = similarity("serial number", "serial num");
        assert!(score > 0.9 && score < 1.0, "got {score}");
    }

    #[test]
    fn symmetric_for_sample_pairs() {
        for (a, b) in [
            ("serial number", "serial no"),
            ("Asset Tag", "tag"),
            ("model", "mode1"),
            ("", "x"),
        ] {
            assert_eq!(similarity(a, b), similarity(b, a), "asymmetric for {a:?}/{b:?}");
        }
    }
}
