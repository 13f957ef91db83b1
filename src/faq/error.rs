use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::faq::store::FaqStoreError;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error("faq store error: {0}")]
    Store(#[from] FaqStoreError),
}
