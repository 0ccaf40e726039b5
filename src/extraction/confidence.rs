//! Heuristic confidence scoring for extracted values.
//!
//! Scores are shape/context heuristics, not calibrated probabilities. The
//! individual boosts and bounds are tuning values, kept as named constants so
//! they can be adjusted without touching the scoring logic.

use crate::extraction::patterns::{AADHAAR_SHAPE, DATE_SHAPE, PAN_SHAPE};

/// Starting score for any non-empty value.
pub const BASE_CONFIDENCE: f64 = 0.7;
/// Added when the value occurs verbatim in the source text.
pub const VERBATIM_BOOST: f64 = 0.2;
/// Added when the value is date-shaped.
pub const DATE_SHAPE_BOOST: f64 = 0.15;
/// Added when the value is Aadhaar- or PAN-shaped.
pub const ID_SHAPE_BOOST: f64 = 0.2;
/// Shape boosts never push the score past this.
pub const SHAPE_BOOST_CEILING: f64 = 0.95;
/// Final floor for non-empty values.
pub const MIN_CONFIDENCE: f64 = 0.1;
/// Final ceiling for any value.
pub const MAX_CONFIDENCE: f64 = 0.99;

/// Confidence assigned to a PERSON or DATE span from the NER capability.
pub const NER_PERSON_CONFIDENCE: f64 = 0.8;
pub const NER_DATE_CONFIDENCE: f64 = 0.8;
/// Confidence assigned to a location span from the NER capability.
pub const NER_LOCATION_CONFIDENCE: f64 = 0.7;

/// PAN adjustment when the caller declared the source a PAN card.
pub const PAN_DOCUMENT_BOOST: f64 = 0.15;
pub const PAN_DOCUMENT_CEILING: f64 = 0.95;
/// PAN adjustment when the caller declared a different ID document.
pub const PAN_DOCUMENT_PENALTY: f64 = 0.2;
pub const PAN_DOCUMENT_FLOOR: f64 = 0.3;

/// Score an extracted value against the text it came from.
///
/// Empty values always score 0.0, the canonical "not found" state. Everything
/// else lands in [0.1, 0.99].
pub fn score(value: &str, source_text: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }

    let mut confidence = BASE_CONFIDENCE;

    // The extractors preserve original casing while matching
    // case-insensitively, so the verbatim check folds case too.
    if source_text
        .to_lowercase()
        .contains(&value.to_lowercase())
    {
        confidence += VERBATIM_BOOST;
    }

    if DATE_SHAPE.is_match(value) {
        confidence = (confidence + DATE_SHAPE_BOOST).min(SHAPE_BOOST_CEILING);
    }
    if AADHAAR_SHAPE.is_match(value) {
        confidence = (confidence + ID_SHAPE_BOOST).min(SHAPE_BOOST_CEILING);
    }
    if PAN_SHAPE.is_match(value) {
        confidence = (confidence + ID_SHAPE_BOOST).min(SHAPE_BOOST_CEILING);
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_scores_zero() {
        assert_eq!(score("", "anything at all"), 0.0);
    }

    #[test]
    fn test_base_without_verbatim_occurrence() {
        assert!((score("Ramesh Kumar", "unrelated text") - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_verbatim_boost_is_case_insensitive() {
        let text = "name: ramesh kumar";
        assert!((score("Ramesh Kumar", text) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_aadhaar_shape_caps_at_095() {
        let text = "aadhaar no: 1234 5678 9123";
        // 0.7 base + 0.2 verbatim + 0.2 shape, capped at 0.95.
        assert!((score("1234 5678 9123", text) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_date_shape_boost() {
        // 0.7 base + 0.2 verbatim + 0.15 shape = 1.05, capped at 0.95.
        assert!((score("12-03-1994", "dob: 12-03-1994") - 0.95).abs() < 1e-9);
        // Without the verbatim hit the date shape lands at 0.85.
        assert!((score("12-03-1994", "nothing") - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_pan_shape_boost() {
        assert!((score("ABCDE1234F", "pan ABCDE1234F") - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_bounds() {
        for (value, text) in [("x", ""), ("12-03-1994", "dob: 12-03-1994")] {
            let confidence = score(value, text);
            assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&confidence));
        }
    }
}
