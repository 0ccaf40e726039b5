use thiserror::Error;

/// Errors at the edges of the pipeline. Nothing inside the extraction or
/// mapping core is fatal: extractors report absence as empty values and an
/// unknown form type falls back to the generic mapping. These variants cover
/// the external seams only.
#[derive(Debug, Error)]
pub enum FormFillError {
    #[error("text recognition failed: {0}")]
    Recognition(String),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognition_error_message() {
        let err = FormFillError::Recognition("cannot read scan.txt".to_string());
        assert_eq!(
            err.to_string(),
            "text recognition failed: cannot read scan.txt"
        );
    }
}
