use serde::{Deserialize, Serialize};

/// One text fragment produced by the OCR collaborator.
///
/// Sequence order follows detection order, not reading order. Confidence
/// is a percentage in `0.0..=100.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedText {
    pub text: String,
    pub confidence: f32,
}

impl RecognizedText {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Pass/fail status extracted from a report card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Passed,
    Failed,
    Unknown,
    Error,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Passed => "passed",
            DocumentStatus::Failed => "failed",
            DocumentStatus::Unknown => "unknown",
            DocumentStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of status verification over one document.
///
/// Computed fresh per document and never persisted by this crate.
/// `evidence` lists the phrases that drove the decision, for audit and
/// admin review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusVerdict {
    pub status: DocumentStatus,
    pub message: String,
    pub evidence: Vec<String>,
}

impl StatusVerdict {
    pub fn new(status: DocumentStatus, message: impl Into<String>, evidence: Vec<String>) -> Self {
        Self {
            status,
            message: message.into(),
            evidence,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(DocumentStatus::Unknown, message, Vec::new())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DocumentStatus::Error, message, Vec::new())
    }
}
