//! Candidate scoring: semantic similarity, lexical overlap, and the
//! combined acceptance score.
//!
//! The constants here are tuned values carried over from the production
//! system. They have no documented derivation; keep them as-is unless the
//! acceptance behavior is deliberately being re-tuned.

use std::collections::HashSet;

use crate::faq::index::FaqIndex;
use crate::text::Intent;

/// Weight of embedding similarity in the combined score.
pub const SEMANTIC_WEIGHT: f32 = 0.7;

/// Weight of lexical overlap in the combined score.
pub const OVERLAP_WEIGHT: f32 = 0.3;

/// Multiplier applied to a candidate's combined score when its intent
/// differs from the query's. Penalized, not eliminated.
pub const INTENT_MISMATCH_PENALTY: f32 = 0.6;

/// Minimum semantic score that accepts on its own.
pub const SEMANTIC_FLOOR: f32 = 0.7;

/// Minimum lexical overlap required by the combined-score acceptance
/// branch.
pub const OVERLAP_FLOOR: f32 = 0.3;

/// Default acceptance threshold when none is supplied per call.
pub const DEFAULT_THRESHOLD: f32 = 0.7;

/// Minimum semantic similarity for the suggestion ranker.
pub const SUGGESTION_MIN_SIMILARITY: f32 = 0.3;

/// Per-query scores for one FAQ candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Position in the FAQ index.
    pub index: usize,
    /// Dot product of unit embeddings (cosine similarity).
    pub semantic: f32,
    /// Lexical overlap ratio against the query tokens.
    pub overlap: f32,
    /// Weighted blend, after any intent penalty.
    pub combined: f32,
    /// The candidate question's intent, if any.
    pub intent: Option<Intent>,
}

/// Dot product of two equal-length vectors. Since both sides are
/// unit-normalized, this is cosine similarity.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Ratio of shared tokens to *query* tokens.
///
/// Deliberately asymmetric: a short query fully contained in a long FAQ
/// question scores 1.0, while the reverse direction is diluted. Returns
/// 0.0 when either set is empty.
pub fn overlap_ratio(query_tokens: &HashSet<String>, faq_tokens: &HashSet<String>) -> f32 {
    if query_tokens.is_empty() || faq_tokens.is_empty() {
        return 0.0;
    }

    let intersection = query_tokens.intersection(faq_tokens).count();
    intersection as f32 / query_tokens.len() as f32
}

/// Scores every entry in `index` against the query, producing one
/// candidate per entry in index order.
pub fn score_candidates(
    index: &FaqIndex,
    query_embedding: &[f32],
    query_tokens: &HashSet<String>,
    query_intent: Option<Intent>,
) -> Vec<ScoredCandidate> {
    (0..index.len())
        .map(|i| {
            let semantic = dot(index.embedding(i), query_embedding);
            let overlap = overlap_ratio(query_tokens, index.tokens(i));
            let intent = index.intent(i);

            let mut combined = SEMANTIC_WEIGHT * semantic + OVERLAP_WEIGHT * overlap;
            if let (Some(query), Some(candidate)) = (query_intent, intent) {
                if query != candidate {
                    combined *= INTENT_MISMATCH_PENALTY;
                }
            }

            ScoredCandidate {
                index: i,
                semantic,
                overlap,
                combined,
                intent,
            }
        })
        .collect()
}
