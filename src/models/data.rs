use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Closed set of extractable identity fields.
///
/// `Name`, `DateOfBirth`, `Gender`, `Address`, `AadhaarNumber` and `PanNumber`
/// are always attempted and always present in an [`EntitySet`]; `Age` is
/// derived from an accepted date of birth; `VoterId` and `ParentName` are only
/// present when something was actually found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Name,
    DateOfBirth,
    Age,
    Gender,
    Address,
    AadhaarNumber,
    PanNumber,
    VoterId,
    ParentName,
}

impl EntityKind {
    /// Stable wire key used in serialized maps and generic form field names.
    pub fn key(&self) -> &'static str {
        match self {
            EntityKind::Name => "name",
            EntityKind::DateOfBirth => "dob",
            EntityKind::Age => "age",
            EntityKind::Gender => "gender",
            EntityKind::Address => "address",
            EntityKind::AadhaarNumber => "aadhaar",
            EntityKind::PanNumber => "pan",
            EntityKind::VoterId => "voter_id",
            EntityKind::ParentName => "parent_name",
        }
    }
}

/// A single extracted value with its heuristic confidence.
///
/// Invariant: confidence is 0.0 exactly when the value is empty (the canonical
/// "not found" state); otherwise it lies in [0.1, 0.99].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    pub value: String,
    pub confidence: f64,
}

impl ExtractedEntity {
    pub fn new(value: impl Into<String>, confidence: f64) -> Self {
        ExtractedEntity {
            value: value.into(),
            confidence,
        }
    }

    /// The canonical "not found" entity.
    pub fn empty() -> Self {
        ExtractedEntity::default()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// The full entity mapping produced by one extraction pass.
///
/// Modeled as a fixed-size struct rather than an open map so the six required
/// slots cannot be observed missing; callers check confidence, not presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySet {
    pub name: ExtractedEntity,
    pub dob: ExtractedEntity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<ExtractedEntity>,
    pub gender: ExtractedEntity,
    pub address: ExtractedEntity,
    pub aadhaar: ExtractedEntity,
    pub pan: ExtractedEntity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_id: Option<ExtractedEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<ExtractedEntity>,
}

impl EntitySet {
    /// Every present entry in stable order: required slots interleaved with
    /// whichever optional slots are filled.
    pub fn entries(&self) -> Vec<(EntityKind, &ExtractedEntity)> {
        let mut entries = vec![
            (EntityKind::Name, &self.name),
            (EntityKind::DateOfBirth, &self.dob),
        ];
        if let Some(age) = &self.age {
            entries.push((EntityKind::Age, age));
        }
        entries.push((EntityKind::Gender, &self.gender));
        entries.push((EntityKind::Address, &self.address));
        entries.push((EntityKind::AadhaarNumber, &self.aadhaar));
        entries.push((EntityKind::PanNumber, &self.pan));
        if let Some(voter_id) = &self.voter_id {
            entries.push((EntityKind::VoterId, voter_id));
        }
        if let Some(parent_name) = &self.parent_name {
            entries.push((EntityKind::ParentName, parent_name));
        }
        entries
    }

    pub fn get(&self, kind: EntityKind) -> Option<&ExtractedEntity> {
        match kind {
            EntityKind::Name => Some(&self.name),
            EntityKind::DateOfBirth => Some(&self.dob),
            EntityKind::Age => self.age.as_ref(),
            EntityKind::Gender => Some(&self.gender),
            EntityKind::Address => Some(&self.address),
            EntityKind::AadhaarNumber => Some(&self.aadhaar),
            EntityKind::PanNumber => Some(&self.pan),
            EntityKind::VoterId => self.voter_id.as_ref(),
            EntityKind::ParentName => self.parent_name.as_ref(),
        }
    }
}

/// Supported government form schemas. Unknown slugs parse to `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    IncomeCertificate,
    BirthCertificate,
    RationCard,
    Generic,
}

impl FormType {
    pub fn parse(slug: &str) -> FormType {
        match slug {
            "income_certificate" => FormType::IncomeCertificate,
            "birth_certificate" => FormType::BirthCertificate,
            "ration_card" => FormType::RationCard,
            _ => FormType::Generic,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            FormType::IncomeCertificate => "income_certificate",
            FormType::BirthCertificate => "birth_certificate",
            FormType::RationCard => "ration_card",
            FormType::Generic => "generic",
        }
    }
}

/// Rendered input kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
}

/// Static description of one form field; never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormFieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// A filled form value. Most fields are plain text; multi-valued fields such
/// as the ration card family member list carry a string list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    pub fn empty_list() -> Self {
        FieldValue::List(Vec::new())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            FieldValue::List(_) => None,
        }
    }
}

/// Field name to value, ordered for stable serialization.
pub type FilledForm = BTreeMap<String, FieldValue>;

/// Field name to confidence; always the same key set as the [`FilledForm`]
/// it was produced with.
pub type ConfidenceMap = BTreeMap<String, f64>;

/// Caller-declared kind of the source document, used to adjust PAN confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentTypeHint {
    Aadhaar,
    Pan,
    Voter,
}

impl DocumentTypeHint {
    pub fn parse(slug: &str) -> Option<DocumentTypeHint> {
        match slug {
            "aadhaar" => Some(DocumentTypeHint::Aadhaar),
            "pan" => Some(DocumentTypeHint::Pan),
            "voter" => Some(DocumentTypeHint::Voter),
            _ => None,
        }
    }
}

/// Label attached to an external NER hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NerLabel {
    Person,
    Date,
    Location,
}

/// A span suggested by an optional external NER capability. Absence of the
/// capability only skips hint seeding; nothing else changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NerHint {
    pub label: NerLabel,
    pub text: String,
}

impl NerHint {
    pub fn new(label: NerLabel, text: impl Into<String>) -> Self {
        NerHint {
            label,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_type_parse_round_trip() {
        for form_type in [
            FormType::IncomeCertificate,
            FormType::BirthCertificate,
            FormType::RationCard,
            FormType::Generic,
        ] {
            assert_eq!(FormType::parse(form_type.slug()), form_type);
        }
    }

    #[test]
    fn test_unknown_form_type_falls_back_to_generic() {
        assert_eq!(FormType::parse("driving_licence"), FormType::Generic);
        assert_eq!(FormType::parse(""), FormType::Generic);
    }

    #[test]
    fn test_default_entity_set_has_required_slots() {
        let set = EntitySet::default();
        let entries = set.entries();
        let keys: Vec<&str> = entries.iter().map(|(kind, _)| kind.key()).collect();
        assert_eq!(
            keys,
            vec!["name", "dob", "gender", "address", "aadhaar", "pan"]
        );
        for (_, entity) in entries {
            assert!(entity.is_empty());
            assert_eq!(entity.confidence, 0.0);
        }
    }

    #[test]
    fn test_optional_entries_appear_when_filled() {
        let set = EntitySet {
            voter_id: Some(ExtractedEntity::new("ABC1234567", 0.9)),
            ..EntitySet::default()
        };
        assert!(set
            .entries()
            .iter()
            .any(|(kind, _)| *kind == EntityKind::VoterId));
        assert!(set.get(EntityKind::ParentName).is_none());
    }

    #[test]
    fn test_field_value_serializes_untagged() {
        let text = serde_json::to_string(&FieldValue::text("Pune")).unwrap();
        assert_eq!(text, "\"Pune\"");
        let list = serde_json::to_string(&FieldValue::empty_list()).unwrap();
        assert_eq!(list, "[]");
    }
}
