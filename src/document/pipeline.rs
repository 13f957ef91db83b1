//! Document inspection pipeline: merge → classify → verify.

use std::sync::Arc;

use tracing::{debug, info};

use super::classifier::{DocumentClassifier, REPORT_CARD_LABEL};
use super::error::ClassifyError;
use super::merge::merge_split_fragments;
use super::types::{RecognizedText, StatusVerdict};
use super::verify::verify_status;

/// Result of inspecting one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReport {
    /// Classifier label for the document.
    pub label: String,
    /// OCR fragments after split-merge post-processing.
    pub merged: Vec<RecognizedText>,
    /// Status verdict; present only when the document is a report card.
    pub verdict: Option<StatusVerdict>,
}

impl DocumentReport {
    /// Returns `true` if the classifier labeled this a report card.
    pub fn is_report_card(&self) -> bool {
        self.label == REPORT_CARD_LABEL
    }
}

/// Runs OCR output through merge post-processing, classification, and
/// (for report cards) status verification.
pub struct DocumentPipeline {
    classifier: Arc<dyn DocumentClassifier>,
}

impl DocumentPipeline {
    pub fn new(classifier: Arc<dyn DocumentClassifier>) -> Self {
        Self { classifier }
    }

    /// Inspects one document's recognized text.
    ///
    /// Classifier failures propagate; the status verifier itself never
    /// fails (it degrades to an error verdict).
    pub fn inspect(&self, units: &[RecognizedText]) -> Result<DocumentReport, ClassifyError> {
        let merged = merge_split_fragments(units);
        debug!(
            fragments = units.len(),
            after_merge = merged.len(),
            "post-processed ocr fragments"
        );

        let label = self.classifier.classify(&merged)?;

        let verdict = if label == REPORT_CARD_LABEL {
            let verdict = verify_status(&merged);
            info!(label = %label, status = %verdict.status, "document inspected");
            Some(verdict)
        } else {
            info!(label = %label, "document inspected (status verification skipped)");
            None
        };

        Ok(DocumentReport {
            label,
            merged,
            verdict,
        })
    }
}
