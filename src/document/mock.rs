//! Deterministic classifier for tests and examples.

use super::classifier::DocumentClassifier;
use super::error::ClassifyError;
use super::types::RecognizedText;

/// [`DocumentClassifier`] that always returns a fixed label, or a fixed
/// error when constructed with [`FixedLabelClassifier::unavailable`].
pub struct FixedLabelClassifier {
    label: Option<String>,
}

impl FixedLabelClassifier {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    /// A classifier whose model failed to load.
    pub fn unavailable() -> Self {
        Self { label: None }
    }
}

impl DocumentClassifier for FixedLabelClassifier {
    fn classify(&self, texts: &[RecognizedText]) -> Result<String, ClassifyError> {
        if texts.is_empty() {
            return Err(ClassifyError::NoText);
        }

        self.label
            .clone()
            .ok_or(ClassifyError::ModelUnavailable)
    }
}
