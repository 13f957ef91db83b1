//! Versioned FAQ embedding index with atomic snapshot reload.
//!
//! A [`FaqIndex`] is an immutable snapshot: entries, unit embeddings,
//! token sets, and intents, all positionally aligned. Readers clone an
//! `Arc` to the current snapshot and can never observe a half-rebuilt
//! index; [`FaqIndexHandle::reload`] builds a complete replacement
//! off-lock and swaps it in.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::embedding::{EmbeddingError, TextEmbedder};
use crate::faq::error::MatchError;
use crate::faq::store::{FaqEntry, FaqStore};
use crate::text::{Intent, classify_intent, tokenize};

/// Immutable snapshot of the FAQ knowledge base.
///
/// Invariant: `entries`, `embeddings`, `token_sets`, and `intents` always
/// have identical length. Enforced at construction; snapshots are never
/// mutated afterwards.
#[derive(Debug)]
pub struct FaqIndex {
    entries: Vec<FaqEntry>,
    embeddings: Vec<Vec<f32>>,
    token_sets: Vec<HashSet<String>>,
    intents: Vec<Option<Intent>>,
    version: u64,
}

impl FaqIndex {
    /// An empty snapshot (version 0). The matcher treats this as
    /// "no knowledge base".
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            embeddings: Vec::new(),
            token_sets: Vec::new(),
            intents: Vec::new(),
            version: 0,
        }
    }

    /// Builds a snapshot by embedding every question in one batch and
    /// precomputing token sets and intents.
    pub fn build(
        entries: Vec<FaqEntry>,
        embedder: &dyn TextEmbedder,
        version: u64,
    ) -> Result<Self, MatchError> {
        let questions: Vec<&str> = entries.iter().map(|e| e.question.as_str()).collect();
        let embeddings = embedder.encode(&questions)?;

        if embeddings.len() != entries.len() {
            return Err(MatchError::Embedding(EmbeddingError::InferenceFailed {
                reason: format!(
                    "embedder returned {} vectors for {} questions",
                    embeddings.len(),
                    entries.len()
                ),
            }));
        }

        let token_sets = entries
            .iter()
            .map(|e| tokenize(&e.question).into_iter().collect())
            .collect();
        let intents = entries.iter().map(|e| classify_intent(&e.question)).collect();

        Ok(Self {
            entries,
            embeddings,
            token_sets,
            intents,
            version,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot version; increments on every successful reload.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn entry(&self, i: usize) -> &FaqEntry {
        &self.entries[i]
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn embedding(&self, i: usize) -> &[f32] {
        &self.embeddings[i]
    }

    pub fn tokens(&self, i: usize) -> &HashSet<String> {
        &self.token_sets[i]
    }

    pub fn intent(&self, i: usize) -> Option<Intent> {
        self.intents[i]
    }
}

/// Shared handle to the current [`FaqIndex`] snapshot.
///
/// The handle is the only shared mutable state in the crate. Reload is
/// atomic from a reader's perspective: the write lock is held only for the
/// pointer swap, never during embedding.
pub struct FaqIndexHandle {
    current: RwLock<Arc<FaqIndex>>,
}

impl Default for FaqIndexHandle {
    fn default() -> Self {
        Self::empty()
    }
}

impl FaqIndexHandle {
    /// Creates a handle holding an empty snapshot.
    pub fn empty() -> Self {
        Self {
            current: RwLock::new(Arc::new(FaqIndex::empty())),
        }
    }

    /// Creates a handle holding a prebuilt snapshot.
    pub fn new(index: FaqIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<FaqIndex> {
        self.current.read().clone()
    }

    /// Rebuilds the index from `store` and swaps it in, returning the new
    /// version. On failure the previous snapshot stays in place.
    pub fn reload(
        &self,
        store: &dyn FaqStore,
        embedder: &dyn TextEmbedder,
    ) -> Result<u64, MatchError> {
        let entries = store.load_active().inspect_err(|e| {
            warn!(error = %e, "faq reload aborted: store unavailable");
        })?;

        let version = self.snapshot().version() + 1;
        let count = entries.len();
        let index = FaqIndex::build(entries, embedder, version).inspect_err(|e| {
            warn!(error = %e, "faq reload aborted: embedding failed");
        })?;

        *self.current.write() = Arc::new(index);

        info!(version, entries = count, "faq index reloaded");
        Ok(version)
    }
}
