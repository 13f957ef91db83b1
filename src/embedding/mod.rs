//! Embedding provider capability.
//!
//! The core never talks to a model runtime directly; it consumes a
//! [`TextEmbedder`] that turns a batch of strings into unit-normalized
//! vectors. Scoring relies on unit norm (dot product == cosine), so every
//! implementation must normalize its output.
//!
//! [`HashEmbedder`] is the deterministic test implementation.

pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::EmbeddingError;

#[cfg(any(test, feature = "mock"))]
pub use mock::HashEmbedder;

/// Batch text-to-vector encoder.
///
/// Contract: output vectors are unit-normalized, one per input in input
/// order, and deterministic for identical input.
pub trait TextEmbedder: Send + Sync {
    /// Encodes `texts` into unit-normalized embedding vectors.
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

/// Normalizes `vector` to unit length in place. A zero vector is left
/// unchanged.
pub fn normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}
