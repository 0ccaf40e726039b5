//! Deterministic transformation from an [`EntitySet`] into a form-specific
//! field/value map plus a matching confidence map.
//!
//! Every form transform copies selected entities under form-specific names,
//! applies at most one derived field, and creates the user/authority-supplied
//! placeholder fields with empty values and 0.0 confidence. The filled form
//! and the confidence map always share exactly the same key set.

use crate::models::{
    ConfidenceMap, EntitySet, ExtractedEntity, FieldValue, FilledForm, FormType,
};

/// Derivation penalty applied when a field is computed from another entity
/// rather than copied (place of birth from address).
pub const DERIVED_FIELD_PENALTY: f64 = 0.8;

pub struct FormMapper;

impl FormMapper {
    /// Map an entity set onto the given form type. Unknown form types arrive
    /// here already parsed to `Generic`; that arm is the exhaustive fallback.
    pub fn map(entities: &EntitySet, form_type: FormType) -> (FilledForm, ConfidenceMap) {
        match form_type {
            FormType::IncomeCertificate => Self::map_income_certificate(entities),
            FormType::BirthCertificate => Self::map_birth_certificate(entities),
            FormType::RationCard => Self::map_ration_card(entities),
            FormType::Generic => Self::map_generic(entities),
        }
    }

    fn map_income_certificate(entities: &EntitySet) -> (FilledForm, ConfidenceMap) {
        let mut form = FilledForm::new();
        let mut scores = ConfidenceMap::new();

        copy(&mut form, &mut scores, "applicant_name", Some(&entities.name));
        copy(
            &mut form,
            &mut scores,
            "father_or_husband_name",
            entities.parent_name.as_ref(),
        );
        copy(&mut form, &mut scores, "date_of_birth", Some(&entities.dob));
        copy(
            &mut form,
            &mut scores,
            "permanent_address",
            Some(&entities.address),
        );
        copy(&mut form, &mut scores, "gender", Some(&entities.gender));
        copy(
            &mut form,
            &mut scores,
            "aadhaar_number",
            Some(&entities.aadhaar),
        );

        // Supplied later by the applicant.
        for name in ["financial_year", "annual_income", "occupation", "signature", "date"] {
            placeholder(&mut form, &mut scores, name);
        }

        (form, scores)
    }

    fn map_birth_certificate(entities: &EntitySet) -> (FilledForm, ConfidenceMap) {
        let mut form = FilledForm::new();
        let mut scores = ConfidenceMap::new();

        copy(&mut form, &mut scores, "person_name", Some(&entities.name));
        copy(&mut form, &mut scores, "date_of_birth", Some(&entities.dob));

        // The one derived field: the place is the tail of the address, at a
        // fixed confidence discount.
        let place = place_from_address(&entities.address.value);
        form.insert("place_of_birth".to_string(), FieldValue::text(place));
        scores.insert(
            "place_of_birth".to_string(),
            entities.address.confidence * DERIVED_FIELD_PENALTY,
        );

        copy(&mut form, &mut scores, "gender", Some(&entities.gender));
        copy(
            &mut form,
            &mut scores,
            "father_name",
            entities.parent_name.as_ref(),
        );

        // Mother's name never comes out of a single-person ID document;
        // the rest is assigned by the registering authority.
        for name in [
            "mother_name",
            "registration_number",
            "date_of_registration",
            "signature_of_officer",
        ] {
            placeholder(&mut form, &mut scores, name);
        }

        (form, scores)
    }

    fn map_ration_card(entities: &EntitySet) -> (FilledForm, ConfidenceMap) {
        let mut form = FilledForm::new();
        let mut scores = ConfidenceMap::new();

        copy(&mut form, &mut scores, "head_of_family", Some(&entities.name));
        copy(
            &mut form,
            &mut scores,
            "father_or_husband_name",
            entities.parent_name.as_ref(),
        );
        copy(&mut form, &mut scores, "date_of_birth", Some(&entities.dob));
        copy(&mut form, &mut scores, "address", Some(&entities.address));
        copy(&mut form, &mut scores, "gender", Some(&entities.gender));
        copy(
            &mut form,
            &mut scores,
            "aadhaar_number",
            Some(&entities.aadhaar),
        );

        placeholder(&mut form, &mut scores, "ration_card_number");
        placeholder(&mut form, &mut scores, "card_type");
        // Multi-valued; the applicant lists members later.
        form.insert("family_members".to_string(), FieldValue::empty_list());
        scores.insert("family_members".to_string(), 0.0);
        placeholder(&mut form, &mut scores, "signature");

        (form, scores)
    }

    /// Fallback for unknown form types: every present entity becomes a
    /// `field_<kind>` entry with its value and confidence copied verbatim.
    fn map_generic(entities: &EntitySet) -> (FilledForm, ConfidenceMap) {
        let mut form = FilledForm::new();
        let mut scores = ConfidenceMap::new();

        for (kind, entity) in entities.entries() {
            let field_name = format!("field_{}", kind.key());
            form.insert(field_name.clone(), FieldValue::text(entity.value.clone()));
            scores.insert(field_name, entity.confidence);
        }

        (form, scores)
    }
}

fn copy(
    form: &mut FilledForm,
    scores: &mut ConfidenceMap,
    field_name: &str,
    entity: Option<&ExtractedEntity>,
) {
    match entity {
        Some(entity) => {
            form.insert(field_name.to_string(), FieldValue::text(entity.value.clone()));
            scores.insert(field_name.to_string(), entity.confidence);
        }
        None => placeholder(form, scores, field_name),
    }
}

fn placeholder(form: &mut FilledForm, scores: &mut ConfidenceMap, field_name: &str) {
    form.insert(field_name.to_string(), FieldValue::empty());
    scores.insert(field_name.to_string(), 0.0);
}

/// Take the portion of an address after its last comma; a commaless address
/// is used whole.
fn place_from_address(address: &str) -> String {
    address
        .rsplit(',')
        .next()
        .unwrap_or(address)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::schema;
    use crate::models::EntityKind;
    use std::collections::BTreeSet;

    fn sample_entities() -> EntitySet {
        EntitySet {
            name: ExtractedEntity::new("Ramesh Kumar", 0.9),
            dob: ExtractedEntity::new("12-03-1994", 0.95),
            age: Some(ExtractedEntity::new("30", 0.7)),
            gender: ExtractedEntity::new("Male", 0.9),
            address: ExtractedEntity::new("12 MG Road, Pune", 0.9),
            aadhaar: ExtractedEntity::new("1234 5678 9123", 0.95),
            pan: ExtractedEntity::empty(),
            voter_id: None,
            parent_name: Some(ExtractedEntity::new("Suresh Kumar", 0.9)),
        }
    }

    fn key_set(form: &FilledForm) -> BTreeSet<&str> {
        form.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_key_sets_always_match() {
        let entities = sample_entities();
        for form_type in [
            FormType::IncomeCertificate,
            FormType::BirthCertificate,
            FormType::RationCard,
            FormType::Generic,
        ] {
            let (form, scores) = FormMapper::map(&entities, form_type);
            let form_keys: BTreeSet<&str> = key_set(&form);
            let score_keys: BTreeSet<&str> = scores.keys().map(String::as_str).collect();
            assert_eq!(form_keys, score_keys, "{:?}", form_type);
        }
    }

    #[test]
    fn test_concrete_forms_cover_their_schema_exactly() {
        let entities = sample_entities();
        for form_type in [
            FormType::IncomeCertificate,
            FormType::BirthCertificate,
            FormType::RationCard,
        ] {
            let (form, _) = FormMapper::map(&entities, form_type);
            let schema_names: BTreeSet<&str> = schema::fields(form_type)
                .iter()
                .map(|spec| spec.name)
                .collect();
            assert_eq!(key_set(&form), schema_names, "{:?}", form_type);
        }
    }

    #[test]
    fn test_income_certificate_renames_and_placeholders() {
        let (form, scores) = FormMapper::map(&sample_entities(), FormType::IncomeCertificate);
        assert_eq!(form["applicant_name"].as_text().unwrap(), "Ramesh Kumar");
        assert_eq!(scores["applicant_name"], 0.9);
        assert_eq!(
            form["father_or_husband_name"].as_text().unwrap(),
            "Suresh Kumar"
        );
        assert_eq!(form["financial_year"].as_text().unwrap(), "");
        assert_eq!(scores["financial_year"], 0.0);
        assert_eq!(scores["signature"], 0.0);
    }

    #[test]
    fn test_birth_certificate_place_derivation() {
        let (form, scores) = FormMapper::map(&sample_entities(), FormType::BirthCertificate);
        assert_eq!(form["place_of_birth"].as_text().unwrap(), "Pune");
        assert!((scores["place_of_birth"] - 0.72).abs() < 1e-9);
    }

    #[test]
    fn test_place_derivation_without_comma_uses_whole_address() {
        let mut entities = sample_entities();
        entities.address = ExtractedEntity::new("Pune", 0.5);
        let (form, scores) = FormMapper::map(&entities, FormType::BirthCertificate);
        assert_eq!(form["place_of_birth"].as_text().unwrap(), "Pune");
        assert!((scores["place_of_birth"] - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_absent_parent_name_maps_to_empty_field() {
        let mut entities = sample_entities();
        entities.parent_name = None;
        let (form, scores) = FormMapper::map(&entities, FormType::RationCard);
        assert_eq!(form["father_or_husband_name"].as_text().unwrap(), "");
        assert_eq!(scores["father_or_husband_name"], 0.0);
    }

    #[test]
    fn test_empty_entity_set_fills_ration_card_with_blanks() {
        let (form, scores) = FormMapper::map(&EntitySet::default(), FormType::RationCard);
        let schema_names: BTreeSet<&str> = schema::fields(FormType::RationCard)
            .iter()
            .map(|spec| spec.name)
            .collect();
        assert_eq!(key_set(&form), schema_names);
        for (name, value) in &form {
            match value {
                FieldValue::Text(text) => assert!(text.is_empty(), "{}", name),
                FieldValue::List(items) => assert!(items.is_empty(), "{}", name),
            }
            assert_eq!(scores[name], 0.0, "{}", name);
        }
    }

    #[test]
    fn test_generic_mapping_prefixes_entity_keys() {
        let entities = sample_entities();
        let (form, scores) = FormMapper::map(&entities, FormType::Generic);
        assert_eq!(form["field_name"].as_text().unwrap(), "Ramesh Kumar");
        assert_eq!(form["field_pan"].as_text().unwrap(), "");
        assert_eq!(scores["field_pan"], 0.0);
        assert_eq!(form["field_age"].as_text().unwrap(), "30");
        // Optional kinds absent from the set produce no field.
        assert!(!form.contains_key(&format!("field_{}", EntityKind::VoterId.key())));
    }
}
