//! Acceptance policy and suggestion ranking.
//!
//! A query is answered only when the best candidate clears the acceptance
//! predicate *and* does not conflict with the query's interrogative
//! intent. Rejected questions are logged to the store (best effort) so
//! admins can curate new FAQ entries.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::embedding::{EmbeddingError, TextEmbedder};
use crate::faq::error::MatchError;
use crate::faq::index::{FaqIndex, FaqIndexHandle};
use crate::faq::scoring::{self, OVERLAP_FLOOR, SEMANTIC_FLOOR, ScoredCandidate};
use crate::faq::store::FaqStore;
use crate::text::{classify_intent, tokenize};

/// Reply used when the knowledge base is empty or missing.
pub const NO_KNOWLEDGE_BASE_MESSAGE: &str =
    "I'm sorry, I couldn't find any FAQs in the database.";

/// Reply used when no candidate clears the acceptance predicate.
pub const FALLBACK_MESSAGE: &str = "Sorry, I don't have the knowledge to answer that yet.\n\
     I'll notify an admin about your question and we'll add the answer soon.\n\
     Please come back in a while.";

/// Outcome of one FAQ match.
///
/// The reported confidence is informational: for `Fallback` it is the
/// combined score of the best *rejected* candidate, not a claim of
/// correctness.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// A candidate cleared the acceptance predicate.
    Answered { answer: String, confidence: f32 },
    /// The best candidate was rejected; the question was logged for
    /// curation.
    Fallback { confidence: f32 },
    /// No FAQ entries are loaded.
    NoKnowledgeBase,
}

impl MatchOutcome {
    /// The user-facing reply text.
    pub fn reply(&self) -> &str {
        match self {
            MatchOutcome::Answered { answer, .. } => answer,
            MatchOutcome::Fallback { .. } => FALLBACK_MESSAGE,
            MatchOutcome::NoKnowledgeBase => NO_KNOWLEDGE_BASE_MESSAGE,
        }
    }

    /// The confidence attached to the reply (0.0 for `NoKnowledgeBase`).
    pub fn confidence(&self) -> f32 {
        match self {
            MatchOutcome::Answered { confidence, .. }
            | MatchOutcome::Fallback { confidence } => *confidence,
            MatchOutcome::NoKnowledgeBase => 0.0,
        }
    }

    /// Returns `true` if a stored answer was returned.
    pub fn is_answered(&self) -> bool {
        matches!(self, MatchOutcome::Answered { .. })
    }
}

/// Semantic FAQ matcher over a shared index snapshot.
pub struct FaqMatcher {
    index: FaqIndexHandle,
    embedder: Arc<dyn TextEmbedder>,
    store: Arc<dyn FaqStore>,
    config: Config,
}

impl FaqMatcher {
    /// Creates a matcher with an empty index. Call [`FaqMatcher::reload`]
    /// to populate it from the store.
    pub fn new(embedder: Arc<dyn TextEmbedder>, store: Arc<dyn FaqStore>, config: Config) -> Self {
        Self {
            index: FaqIndexHandle::empty(),
            embedder,
            store,
            config,
        }
    }

    /// Rebuilds the FAQ index from the store, returning the new version.
    pub fn reload(&self) -> Result<u64, MatchError> {
        self.index.reload(self.store.as_ref(), self.embedder.as_ref())
    }

    /// Returns the current index snapshot.
    pub fn snapshot(&self) -> Arc<FaqIndex> {
        self.index.snapshot()
    }

    /// Matches `question` against the knowledge base.
    ///
    /// `threshold` overrides the configured acceptance threshold for this
    /// call only. Returns `Err` only for embedding failures; an empty
    /// knowledge base and a rejected match are ordinary outcomes.
    pub fn match_question(
        &self,
        question: &str,
        threshold: Option<f32>,
    ) -> Result<MatchOutcome, MatchError> {
        let snapshot = self.index.snapshot();
        if snapshot.is_empty() {
            debug!("match requested against empty knowledge base");
            return Ok(MatchOutcome::NoKnowledgeBase);
        }

        let query_embedding = self.embed_query(question)?;
        let query_tokens: HashSet<String> = tokenize(question).into_iter().collect();
        let query_intent = classify_intent(question);

        let candidates =
            scoring::score_candidates(&snapshot, &query_embedding, &query_tokens, query_intent);
        // Non-empty because the snapshot is non-empty and scoring maps 1:1.
        let best = argmax_combined(&candidates);

        let threshold = threshold.unwrap_or(self.config.match_threshold);
        let mut accept = best.semantic >= SEMANTIC_FLOOR.max(threshold)
            || (best.combined >= threshold && best.overlap >= OVERLAP_FLOOR);

        // Intent override: a confident-looking match that answers the
        // wrong kind of question is still a wrong answer.
        let intent_conflict = matches!(
            (query_intent, best.intent),
            (Some(q), Some(c)) if q != c
        );
        if accept && intent_conflict {
            debug!(
                query_intent = ?query_intent,
                candidate_intent = ?best.intent,
                "rejecting match on intent mismatch"
            );
            accept = false;
        }

        debug!(
            best_index = best.index,
            semantic = best.semantic,
            overlap = best.overlap,
            combined = best.combined,
            threshold,
            accept,
            "scored best candidate"
        );

        if accept {
            let entry = snapshot.entry(best.index);
            info!(
                faq_id = entry.id,
                confidence = best.combined,
                "faq match accepted"
            );
            return Ok(MatchOutcome::Answered {
                answer: entry.answer.clone(),
                confidence: best.combined,
            });
        }

        // Best effort: a logging failure must not change the reply.
        if let Err(e) = self.store.record_unanswered(question) {
            warn!(error = %e, "failed to record unanswered question");
        }

        Ok(MatchOutcome::Fallback {
            confidence: best.combined,
        })
    }

    /// Returns up to `suggestion_limit` FAQ questions ranked by semantic
    /// similarity alone, filtered to similarity above
    /// `suggestion_min_similarity`.
    ///
    /// Independent of the acceptance policy: suggestions may be surfaced
    /// even when the main match was rejected.
    pub fn suggest(&self, question: &str) -> Result<Vec<String>, MatchError> {
        let snapshot = self.index.snapshot();
        if snapshot.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self.embed_query(question)?;

        let mut ranked: Vec<(usize, f32)> = (0..snapshot.len())
            .map(|i| (i, scoring::dot(snapshot.embedding(i), &query_embedding)))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(ranked
            .into_iter()
            .filter(|&(_, similarity)| similarity > self.config.suggestion_min_similarity)
            .take(self.config.suggestion_limit)
            .map(|(i, _)| snapshot.entry(i).question.clone())
            .collect())
    }

    fn embed_query(&self, question: &str) -> Result<Vec<f32>, MatchError> {
        self.embedder
            .encode(&[question])?
            .into_iter()
            .next()
            .ok_or_else(|| {
                MatchError::Embedding(EmbeddingError::InferenceFailed {
                    reason: "embedder returned no vector for query".to_string(),
                })
            })
    }
}

/// Argmax by combined score; the first (lowest) index wins ties.
fn argmax_combined(candidates: &[ScoredCandidate]) -> &ScoredCandidate {
    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        if candidate.combined > best.combined {
            best = candidate;
        }
    }
    best
}
