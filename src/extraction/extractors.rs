//! Per-entity extraction functions.
//!
//! Every extractor is a pure function from recognized text to an optional
//! value. Absence is always `None`, never an error; nothing in here panics on
//! arbitrary input. Pattern priority lives in [`super::patterns`].

use crate::extraction::dates;
use crate::extraction::patterns::{
    ADDRESS_BLOCK_PATTERN, ADDRESS_PATTERNS, AADHAAR_PATTERNS, BIRTH_KEYWORDS,
    CAPITALIZED_NAME_PATTERN, DOB_PATTERNS, FEMALE_WORDS, MALE_WORDS, NAME_PATTERNS,
    OTHER_GENDER_WORDS, PAN_CONTEXT_KEYWORDS, PAN_CONTEXT_WINDOW, PAN_KEYWORDS, PAN_PATTERN,
    PARENT_NAME_PATTERNS, PLACE_NAMES, POSTAL_ADDRESS_PATTERNS, VOTER_ID_PATTERNS,
};
use crate::models::{NerHint, NerLabel};

const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 100;
const MIN_POSTAL_ADDRESS_LEN: usize = 11;

/// Extract a person name. Fallback order is fixed: labeled patterns, then the
/// longest run of capitalized words, then the longest PERSON hint.
pub fn extract_name(text: &str, hints: &[NerHint]) -> Option<String> {
    for pattern in NAME_PATTERNS.iter() {
        for captures in pattern.captures_iter(text) {
            if let Some(matched) = captures.get(1) {
                let cleaned = matched
                    .as_str()
                    .trim()
                    .trim_end_matches([':', '.', ',', ';'])
                    .trim();
                if plausible_name(cleaned) {
                    return Some(cleaned.to_string());
                }
            }
        }
    }

    // No label matched; take the longest capitalized word sequence.
    if let Some(candidate) = CAPITALIZED_NAME_PATTERN
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
        .max_by_key(|candidate| candidate.len())
    {
        return Some(candidate.to_string());
    }

    hints
        .iter()
        .filter(|hint| hint.label == NerLabel::Person && hint.text.len() > 2)
        .map(|hint| hint.text.trim())
        .max_by_key(|candidate| candidate.len())
        .map(|candidate| candidate.to_string())
}

fn plausible_name(candidate: &str) -> bool {
    (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&candidate.len())
        && candidate.split_whitespace().count() >= 1
}

/// Extract a date of birth, normalized to dashes. Candidates that fail
/// calendar validation or fall outside [1900, current year] are skipped and
/// the scan continues with the next candidate.
pub fn extract_date_of_birth(text: &str) -> Option<String> {
    for pattern in DOB_PATTERNS.iter() {
        for captures in pattern.captures_iter(text) {
            if let Some(matched) = captures.get(1) {
                if let Some((normalized, date)) = dates::parse_candidate(matched.as_str()) {
                    if dates::within_birth_range(date) {
                        return Some(normalized);
                    }
                }
            }
        }
    }
    None
}

/// Classify gender from whole-word keyword hits, male then female then other.
pub fn extract_gender(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let groups: [(&str, &[&str]); 3] = [
        ("Male", MALE_WORDS),
        ("Female", FEMALE_WORDS),
        ("Other", OTHER_GENDER_WORDS),
    ];
    for (label, words) in groups {
        for word in words {
            if contains_whole_word(&lower, word) {
                return Some(label.to_string());
            }
        }
    }
    None
}

/// Substring search with an explicit non-alphabetic boundary check on both
/// sides. Regex `\b` is not enough here: the one-letter tokens "m" and "f"
/// must never fire inside a word.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    for (start, matched) in haystack.match_indices(needle) {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphabetic());
        let after_ok = haystack[start + matched.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphabetic());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

/// Extract an address through a staged chain; each stage runs only when the
/// previous one produced nothing.
pub fn extract_address(text: &str) -> Option<String> {
    // Stage 1: labeled patterns, longest capture of the first matching label.
    for pattern in ADDRESS_PATTERNS.iter() {
        if let Some(longest) = pattern
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .map(|m| m.as_str().trim())
            .filter(|candidate| !candidate.is_empty())
            .max_by_key(|candidate| candidate.len())
        {
            return Some(longest.to_string());
        }
    }

    // Stage 2: a 6-digit PIN code adjacent to a text span.
    for pattern in POSTAL_ADDRESS_PATTERNS.iter() {
        for captures in pattern.captures_iter(text) {
            if let (Some(first), Some(second)) = (captures.get(1), captures.get(2)) {
                let combined = format!("{} {}", first.as_str().trim(), second.as_str().trim());
                if combined.len() >= MIN_POSTAL_ADDRESS_LEN {
                    return Some(combined);
                }
            }
        }
    }

    // Stage 3: first paragraph mentioning a known city or state.
    for paragraph in text.split('\n') {
        let lower = paragraph.to_lowercase();
        if PLACE_NAMES.iter().any(|place| lower.contains(place)) {
            let trimmed = paragraph.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    // Stage 4: any substantial block containing a place name or a digit.
    for captures in ADDRESS_BLOCK_PATTERN.captures_iter(text) {
        if let Some(matched) = captures.get(1) {
            let block = matched.as_str();
            let lower = block.to_lowercase();
            if PLACE_NAMES.iter().any(|place| lower.contains(place))
                || block.chars().any(|c| c.is_ascii_digit())
            {
                return Some(block.trim().to_string());
            }
        }
    }

    None
}

/// Extract an Aadhaar number, regrouped as `XXXX XXXX XXXX`.
pub fn extract_aadhaar(text: &str) -> Option<String> {
    for pattern in AADHAAR_PATTERNS.iter() {
        for captures in pattern.captures_iter(text) {
            if let Some(matched) = captures.get(1) {
                let digits: String = matched
                    .as_str()
                    .chars()
                    .filter(|c| c.is_ascii_digit())
                    .collect();
                if digits.len() == 12 {
                    return Some(format!(
                        "{} {} {}",
                        &digits[..4],
                        &digits[4..8],
                        &digits[8..]
                    ));
                }
            }
        }
    }
    None
}

/// Extract a PAN number, uppercased. The shape alone is not enough: a global
/// PAN keyword anywhere in the text accepts the first match outright, and
/// otherwise a context keyword must sit within a small window around the
/// candidate.
pub fn extract_pan(text: &str) -> Option<String> {
    let candidates: Vec<regex::Match> = PAN_PATTERN
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let lower = text.to_lowercase();
    if PAN_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        return Some(candidates[0].as_str().to_uppercase());
    }

    for candidate in candidates {
        let start = floor_char_boundary(text, candidate.start().saturating_sub(PAN_CONTEXT_WINDOW));
        let end = ceil_char_boundary(text, (candidate.end() + PAN_CONTEXT_WINDOW).min(text.len()));
        let window = text[start..end].to_uppercase();
        if PAN_CONTEXT_KEYWORDS
            .iter()
            .any(|keyword| window.contains(keyword))
        {
            return Some(candidate.as_str().to_uppercase());
        }
    }

    None
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

/// Extract a voter ID, uppercased.
pub fn extract_voter_id(text: &str) -> Option<String> {
    for pattern in VOTER_ID_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            if let Some(matched) = captures.get(1) {
                return Some(matched.as_str().to_uppercase());
            }
        }
    }
    None
}

/// Extract a parent/guardian/spouse name from its dedicated labels.
pub fn extract_parent_name(text: &str) -> Option<String> {
    for pattern in PARENT_NAME_PATTERNS.iter() {
        for captures in pattern.captures_iter(text) {
            if let Some(matched) = captures.get(1) {
                let cleaned = matched.as_str().trim();
                if plausible_name(cleaned) {
                    return Some(cleaned.to_string());
                }
            }
        }
    }
    None
}

/// True when the lowercased text mentions birth at all; gates DATE hints.
pub fn mentions_birth(lower_text: &str) -> bool {
    BIRTH_KEYWORDS
        .iter()
        .any(|keyword| lower_text.contains(keyword))
}
