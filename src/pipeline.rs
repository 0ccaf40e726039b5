//! End-to-end orchestration: recognized text in, entity set plus filled form
//! out. The OCR stage and the PDF renderer live outside this crate; this
//! pipeline only consumes the recognizer's UTF-8 output and produces plain
//! mapping data for the renderer and the transport layer.

use log::info;
use serde::Serialize;

use crate::extraction::EntityAssembler;
use crate::forms::FormMapper;
use crate::models::{ConfidenceMap, DocumentTypeHint, EntitySet, FilledForm, FormType, NerHint};

/// The complete result of one extraction and mapping request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillResult {
    pub form_type: FormType,
    pub entities: EntitySet,
    pub form: FilledForm,
    pub confidence: ConfidenceMap,
}

pub struct FormFillPipeline;

impl FormFillPipeline {
    /// Run extraction and mapping over recognized text.
    pub fn process(text: &str, form_type: FormType) -> FillResult {
        Self::process_with(text, form_type, None, &[])
    }

    /// Like [`process`](Self::process), with a declared source document type
    /// and hints from an external NER capability.
    pub fn process_with(
        text: &str,
        form_type: FormType,
        document_type: Option<DocumentTypeHint>,
        hints: &[NerHint],
    ) -> FillResult {
        let entities = EntityAssembler::assemble_with(text, document_type, hints);
        let (form, confidence) = FormMapper::map(&entities, form_type);

        let filled = confidence.values().filter(|c| **c > 0.0).count();
        info!(
            "mapped {} entities onto {} form: {}/{} fields filled",
            entities.entries().len(),
            form_type.slug(),
            filled,
            form.len()
        );

        FillResult {
            form_type,
            entities,
            form,
            confidence,
        }
    }
}
