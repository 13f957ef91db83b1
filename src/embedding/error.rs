use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding model not available")]
    ModelUnavailable,

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },
}
