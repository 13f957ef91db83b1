//! Scanned-document analysis: OCR post-processing, classification seam,
//! and report-card pass/fail verification.
//!
//! The OCR recognizer and the document classifier are external
//! collaborators; this module owns what happens between them: rejoining
//! split fragments, gating on the "Report Card" label, and extracting a
//! pass/fail verdict from noisy text.

pub mod classifier;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod types;
pub mod verify;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use classifier::{DocumentClassifier, NOT_REPORT_CARD_LABEL, REPORT_CARD_LABEL};
pub use error::ClassifyError;
pub use merge::merge_split_fragments;
pub use pipeline::{DocumentPipeline, DocumentReport};
pub use types::{DocumentStatus, RecognizedText, StatusVerdict};
pub use verify::verify_status;

#[cfg(any(test, feature = "mock"))]
pub use mock::FixedLabelClassifier;
