//! Orchestrates extractors, optional NER hints and the scorer into one
//! [`EntitySet`] per document.

use log::debug;

use crate::extraction::confidence::{
    self, NER_DATE_CONFIDENCE, NER_LOCATION_CONFIDENCE, NER_PERSON_CONFIDENCE,
    PAN_DOCUMENT_BOOST, PAN_DOCUMENT_CEILING, PAN_DOCUMENT_FLOOR, PAN_DOCUMENT_PENALTY,
};
use crate::extraction::{dates, extractors};
use crate::models::{DocumentTypeHint, EntitySet, ExtractedEntity, NerHint, NerLabel};

pub struct EntityAssembler;

impl EntityAssembler {
    /// Assemble an entity set from recognized text alone.
    pub fn assemble(text: &str) -> EntitySet {
        Self::assemble_with(text, None, &[])
    }

    /// Assemble an entity set, optionally informed by the caller-declared
    /// document type and hints from an external NER capability.
    ///
    /// The six required slots (name, dob, gender, address, aadhaar, pan) are
    /// always present in the result, empty with 0.0 confidence when nothing
    /// was found. Deterministic: identical inputs yield an identical set.
    pub fn assemble_with(
        text: &str,
        document_type: Option<DocumentTypeHint>,
        hints: &[NerHint],
    ) -> EntitySet {
        let mut set = EntitySet::default();
        let lower = text.to_lowercase();

        // NER hints seed only still-empty slots; a DATE hint counts only when
        // the text mentions birth at all.
        for hint in hints {
            if hint.text.trim().is_empty() {
                continue;
            }
            match hint.label {
                NerLabel::Person if set.name.is_empty() => {
                    set.name = ExtractedEntity::new(hint.text.trim(), NER_PERSON_CONFIDENCE);
                }
                NerLabel::Date if set.dob.is_empty() && extractors::mentions_birth(&lower) => {
                    set.dob = ExtractedEntity::new(hint.text.trim(), NER_DATE_CONFIDENCE);
                }
                NerLabel::Location if set.address.is_empty() => {
                    set.address = ExtractedEntity::new(hint.text.trim(), NER_LOCATION_CONFIDENCE);
                }
                _ => {}
            }
        }

        if set.name.is_empty() {
            if let Some(name) = extractors::extract_name(text, hints) {
                set.name = Self::scored(name, text);
            }
        }

        if set.dob.is_empty() {
            if let Some(dob) = extractors::extract_date_of_birth(text) {
                set.dob = Self::scored(dob, text);
            }
        }

        // Age is derived, never searched for. A non-parseable dob (an
        // NER-seeded free-form date, say) simply yields no age.
        if !set.dob.is_empty() {
            if let Some((_, date)) = dates::parse_candidate(&set.dob.value) {
                let age = dates::age_from_dob(date).to_string();
                set.age = Some(Self::scored(age, text));
            }
        }

        if set.gender.is_empty() {
            if let Some(gender) = extractors::extract_gender(text) {
                set.gender = Self::scored(gender, text);
            }
        }

        if set.address.is_empty() {
            if let Some(address) = extractors::extract_address(text) {
                set.address = Self::scored(address, text);
            }
        }

        if set.aadhaar.is_empty() {
            if let Some(aadhaar) = extractors::extract_aadhaar(text) {
                set.aadhaar = Self::scored(aadhaar, text);
            }
        }

        if set.pan.is_empty() {
            if let Some(pan) = extractors::extract_pan(text) {
                let mut entity = Self::scored(pan, text);
                entity.confidence = Self::adjust_pan_confidence(entity.confidence, document_type);
                set.pan = entity;
            }
        }

        if let Some(voter_id) = extractors::extract_voter_id(text) {
            set.voter_id = Some(Self::scored(voter_id, text));
        }

        if let Some(parent_name) = extractors::extract_parent_name(text) {
            set.parent_name = Some(Self::scored(parent_name, text));
        }

        debug!(
            "assembled entities: name={:?} dob={:?} gender={:?} aadhaar={:?} pan={:?}",
            set.name.value, set.dob.value, set.gender.value, set.aadhaar.value, set.pan.value
        );

        set
    }

    fn scored(value: String, text: &str) -> ExtractedEntity {
        let score = confidence::score(&value, text);
        ExtractedEntity::new(value, score)
    }

    /// Blend the caller-declared document type into the PAN confidence: a
    /// declared PAN card raises it, a different declared ID document lowers
    /// it. Applied after the generic scorer.
    fn adjust_pan_confidence(confidence: f64, document_type: Option<DocumentTypeHint>) -> f64 {
        match document_type {
            Some(DocumentTypeHint::Pan) => {
                (confidence + PAN_DOCUMENT_BOOST).min(PAN_DOCUMENT_CEILING)
            }
            Some(DocumentTypeHint::Aadhaar) | Some(DocumentTypeHint::Voter) => {
                (confidence - PAN_DOCUMENT_PENALTY).max(PAN_DOCUMENT_FLOOR)
            }
            None => confidence,
        }
    }
}
