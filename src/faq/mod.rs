//! Semantic FAQ matching.
//!
//! The pipeline for one query: embed the question, score every FAQ entry
//! (semantic similarity blended with lexical overlap, penalized on intent
//! mismatch), then let the acceptance policy decide between returning the
//! stored answer and a fallback reply. See [`FaqMatcher::match_question`].

pub mod error;
pub mod index;
pub mod matcher;
pub mod scoring;
pub mod store;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::MatchError;
pub use index::{FaqIndex, FaqIndexHandle};
pub use matcher::{FALLBACK_MESSAGE, FaqMatcher, MatchOutcome, NO_KNOWLEDGE_BASE_MESSAGE};
pub use scoring::{DEFAULT_THRESHOLD, ScoredCandidate};
pub use store::{FaqEntry, FaqStore, FaqStoreError};

#[cfg(any(test, feature = "mock"))]
pub use mock::InMemoryFaqStore;
