//! Usher core library (used by the admission web service and integration
//! tests).
//!
//! Two subsystems do the real work:
//!
//! - **FAQ matching** ([`faq`]): embeds a student's question, scores it
//!   against the FAQ knowledge base (semantic similarity + lexical overlap
//!   + intent consistency), and decides whether the best candidate is
//!   trustworthy enough to answer with.
//! - **Document analysis** ([`document`]): rejoins OCR fragments that were
//!   split across recognition boxes, and extracts a pass/fail verdict from
//!   report-card text while ignoring grading-scale boilerplate.
//!
//! The model runtimes (sentence embedder, document classifier) and the FAQ
//! database live outside this crate, behind the [`embedding::TextEmbedder`],
//! [`document::DocumentClassifier`], and [`faq::FaqStore`] traits. Mock
//! implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod document;
pub mod embedding;
pub mod faq;
pub mod text;

pub use config::{Config, ConfigError};

pub use embedding::{EmbeddingError, TextEmbedder};
#[cfg(any(test, feature = "mock"))]
pub use embedding::HashEmbedder;

pub use faq::{
    DEFAULT_THRESHOLD, FALLBACK_MESSAGE, FaqEntry, FaqIndex, FaqIndexHandle, FaqMatcher, FaqStore,
    FaqStoreError, MatchError, MatchOutcome, NO_KNOWLEDGE_BASE_MESSAGE, ScoredCandidate,
};
#[cfg(any(test, feature = "mock"))]
pub use faq::InMemoryFaqStore;

pub use document::{
    ClassifyError, DocumentClassifier, DocumentPipeline, DocumentReport, DocumentStatus,
    NOT_REPORT_CARD_LABEL, REPORT_CARD_LABEL, RecognizedText, StatusVerdict,
    merge_split_fragments, verify_status,
};
#[cfg(any(test, feature = "mock"))]
pub use document::FixedLabelClassifier;

pub use text::{Intent, classify_intent, tokenize};
