//! FAQ storage capability.
//!
//! The source of truth for FAQ entries lives outside this crate (the web
//! application's database). The core only needs the active entries in a
//! stable order, plus a side channel for recording questions it could not
//! answer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaqStoreError {
    #[error("faq storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("faq query failed: {reason}")]
    QueryFailed { reason: String },
}

/// A single FAQ entry as loaded from storage.
///
/// Immutable once indexed; the in-memory index is replaced wholesale on
/// reload rather than patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i64,
}

fn default_active() -> bool {
    true
}

/// Read access to FAQ storage.
pub trait FaqStore: Send + Sync {
    /// Returns the active entries ordered by `(sort_order, id)`.
    fn load_active(&self) -> Result<Vec<FaqEntry>, FaqStoreError>;

    /// Records a question the matcher could not answer, so admins can
    /// curate it. Callers treat failures as fire-and-forget.
    fn record_unanswered(&self, question: &str) -> Result<(), FaqStoreError>;
}
