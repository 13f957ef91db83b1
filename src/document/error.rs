use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classification model not available")]
    ModelUnavailable,

    #[error("no text to classify")]
    NoText,

    #[error("classification failed: {reason}")]
    ClassificationFailed { reason: String },
}
