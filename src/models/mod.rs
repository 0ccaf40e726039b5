pub mod data;

pub use data::{
    ConfidenceMap, DocumentTypeHint, EntityKind, EntitySet, ExtractedEntity, FieldKind,
    FieldValue, FilledForm, FormFieldSpec, FormType, NerHint, NerLabel,
};
