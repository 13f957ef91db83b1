//! Deterministic embedders for tests and examples (no model runtime).

use std::collections::HashMap;

use super::{EmbeddingError, TextEmbedder, normalize};

/// Hash-seeded deterministic embedder.
///
/// Each text is hashed to seed an LCG that fills the vector, which is then
/// unit-normalized. Identical texts always produce identical embeddings;
/// distinct texts are effectively orthogonal at reasonable dimensions.
///
/// For tests that need *controlled* similarity between specific texts, use
/// [`HashEmbedder::with_fixture`] to pin exact vectors.
pub struct HashEmbedder {
    dim: usize,
    fixtures: HashMap<String, Vec<f32>>,
    fail: bool,
}

impl HashEmbedder {
    /// Creates an embedder producing vectors of `dim` components.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            fixtures: HashMap::new(),
            fail: false,
        }
    }

    /// Pins an exact (pre-normalization) vector for `text`.
    pub fn with_fixture(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.fixtures.insert(text.to_string(), vector);
        self
    }

    /// Makes every `encode` call fail with `ModelUnavailable`.
    pub fn failing(dim: usize) -> Self {
        Self {
            dim,
            fixtures: HashMap::new(),
            fail: true,
        }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        if let Some(pinned) = self.fixtures.get(text) {
            let mut v = pinned.clone();
            normalize(&mut v);
            return v;
        }

        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(self.dim);
        let mut state = seed;
        for _ in 0..self.dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        normalize(&mut embedding);
        embedding
    }
}

impl TextEmbedder for HashEmbedder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if self.fail {
            return Err(EmbeddingError::ModelUnavailable);
        }

        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}
