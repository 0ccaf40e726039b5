//! Static form schemas and the renderer-facing lookup tables (titles, field
//! labels, filing instructions, required-document checklists). Built at
//! compile time, never mutated.

use crate::models::{FieldKind, FormFieldSpec, FormType};

const fn field(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    required: bool,
) -> FormFieldSpec {
    FormFieldSpec {
        name,
        label,
        kind,
        required,
    }
}

pub const INCOME_CERTIFICATE_FIELDS: &[FormFieldSpec] = &[
    field("applicant_name", "Name of Applicant", FieldKind::Text, true),
    field("father_or_husband_name", "Father's/Husband's Name", FieldKind::Text, true),
    field("date_of_birth", "Date of Birth", FieldKind::Text, false),
    field("permanent_address", "Permanent Address", FieldKind::Textarea, true),
    field("gender", "Gender", FieldKind::Text, false),
    field("aadhaar_number", "Aadhaar Number", FieldKind::Text, false),
    field("financial_year", "Financial Year", FieldKind::Text, true),
    field("annual_income", "Annual Income", FieldKind::Text, true),
    field("occupation", "Occupation", FieldKind::Text, true),
    field("signature", "Signature", FieldKind::Text, true),
    field("date", "Date", FieldKind::Text, true),
];

pub const BIRTH_CERTIFICATE_FIELDS: &[FormFieldSpec] = &[
    field("person_name", "Name of Person", FieldKind::Text, true),
    field("date_of_birth", "Date of Birth", FieldKind::Text, true),
    field("place_of_birth", "Place of Birth", FieldKind::Text, true),
    field("gender", "Gender", FieldKind::Text, true),
    field("father_name", "Father's Name", FieldKind::Text, false),
    field("mother_name", "Mother's Name", FieldKind::Text, false),
    field("registration_number", "Registration Number", FieldKind::Text, false),
    field("date_of_registration", "Date of Registration", FieldKind::Text, false),
    field("signature_of_officer", "Signature of Officer", FieldKind::Text, false),
];

pub const RATION_CARD_FIELDS: &[FormFieldSpec] = &[
    field("head_of_family", "Head of Family", FieldKind::Text, true),
    field("father_or_husband_name", "Father's/Husband's Name", FieldKind::Text, false),
    field("date_of_birth", "Date of Birth", FieldKind::Text, false),
    field("address", "Address", FieldKind::Textarea, true),
    field("gender", "Gender", FieldKind::Text, false),
    field("aadhaar_number", "Aadhaar Number", FieldKind::Text, false),
    field("ration_card_number", "Ration Card Number", FieldKind::Text, false),
    field("card_type", "Card Type (APL/BPL)", FieldKind::Text, true),
    field("family_members", "Family Members", FieldKind::Textarea, true),
    field("signature", "Signature", FieldKind::Text, true),
];

/// Ordered field list for a form type. `Generic` has no static schema; its
/// fields mirror whatever entities were extracted.
pub fn fields(form_type: FormType) -> &'static [FormFieldSpec] {
    match form_type {
        FormType::IncomeCertificate => INCOME_CERTIFICATE_FIELDS,
        FormType::BirthCertificate => BIRTH_CERTIFICATE_FIELDS,
        FormType::RationCard => RATION_CARD_FIELDS,
        FormType::Generic => &[],
    }
}

pub fn title(form_type: FormType) -> &'static str {
    match form_type {
        FormType::IncomeCertificate => "Income Certificate",
        FormType::BirthCertificate => "Birth Certificate",
        FormType::RationCard => "Ration Card",
        FormType::Generic => "Generic Form",
    }
}

/// Human label for a field name, for the document renderer. Falls back to
/// title-casing the underscore-separated name.
pub fn field_label(name: &str) -> String {
    match name {
        "applicant_name" => "Applicant Name".to_string(),
        "father_or_husband_name" => "Father's / Husband's Name".to_string(),
        "date_of_birth" => "Date of Birth".to_string(),
        "gender" => "Gender".to_string(),
        "permanent_address" => "Permanent Address".to_string(),
        "address" => "Address".to_string(),
        "aadhaar_number" => "Aadhaar Number".to_string(),
        "financial_year" => "Financial Year".to_string(),
        "annual_income" => "Annual Income".to_string(),
        "occupation" => "Occupation".to_string(),
        "signature" => "Applicant's Signature".to_string(),
        "date" => "Date".to_string(),
        "person_name" => "Person Name".to_string(),
        "place_of_birth" => "Place of Birth".to_string(),
        "father_name" => "Father's Name".to_string(),
        "mother_name" => "Mother's Name".to_string(),
        "registration_number" => "Registration Number".to_string(),
        "date_of_registration" => "Date of Registration".to_string(),
        "signature_of_officer" => "Signature of Officer".to_string(),
        "head_of_family" => "Head of Family".to_string(),
        "ration_card_number" => "Ration Card Number".to_string(),
        "card_type" => "Card Type".to_string(),
        "family_members" => "Family Members Details".to_string(),
        other => other
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" "),
    }
}

/// Filing instructions printed on the rendered form.
pub fn instructions(form_type: FormType) -> &'static [&'static str] {
    match form_type {
        FormType::IncomeCertificate | FormType::RationCard => &[
            "All fields marked with * are mandatory",
            "Provide authentic information as per your documents",
            "Attach required documents as mentioned in the checklist",
            "Submit with proper signature and date",
        ],
        FormType::BirthCertificate => &[
            "All fields marked with * are mandatory",
            "Provide authentic information as per birth records",
            "Attach required documents as mentioned in the checklist",
            "Submit with proper signature and date",
        ],
        FormType::Generic => &[],
    }
}

/// Supporting documents to attach, per form type.
pub fn required_documents(form_type: FormType) -> &'static [&'static str] {
    match form_type {
        FormType::IncomeCertificate => &[
            "Aadhaar Card (Aadhaar number)",
            "Address Proof",
            "Income Proof (if available)",
            "Passport Size Photo",
        ],
        FormType::BirthCertificate => &[
            "Hospital Birth Record",
            "Parent's ID Proof (Aadhaar, Voter ID, etc.)",
            "Address Proof",
            "Early School Certificate (if available)",
            "Ration Card (if available)",
        ],
        FormType::RationCard => &[
            "Aadhaar Card (for all family members)",
            "Address Proof",
            "Income Certificate (if applicable)",
            "Caste Certificate (if applicable)",
            "Passport Size Photos (2 for new card, 1 for update)",
            "Bank Passbook (first page copy)",
        ],
        FormType::Generic => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemas_have_unique_field_names() {
        for form_type in [
            FormType::IncomeCertificate,
            FormType::BirthCertificate,
            FormType::RationCard,
        ] {
            let specs = fields(form_type);
            assert!(!specs.is_empty());
            let mut names: Vec<&str> = specs.iter().map(|spec| spec.name).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), specs.len(), "{:?}", form_type);
        }
    }

    #[test]
    fn test_generic_has_no_static_schema() {
        assert!(fields(FormType::Generic).is_empty());
        assert!(instructions(FormType::Generic).is_empty());
        assert!(required_documents(FormType::Generic).is_empty());
    }

    #[test]
    fn test_field_label_fallback_title_cases() {
        assert_eq!(field_label("aadhaar_number"), "Aadhaar Number");
        assert_eq!(field_label("some_new_field"), "Some New Field");
    }
}
