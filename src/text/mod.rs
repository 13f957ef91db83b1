//! Tokenization and interrogative-intent classification.
//!
//! Shared by the FAQ matcher for lexical overlap and intent-consistency
//! checks. This is a heuristic layer, not a grammatical parse.

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+").expect("token regex"));

/// Minimum token length kept by [`tokenize`]. Shorter runs are noise
/// ("is", "to", "of") and would inflate lexical overlap.
const MIN_TOKEN_LEN: usize = 3;

/// Coarse question category derived from an interrogative marker.
///
/// Used as a cheap semantic-consistency check between a query and a FAQ
/// question. Variant order is the tie-break order for [`classify_intent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Who,
    Where,
    When,
    What,
    How,
    Why,
    Which,
}

impl Intent {
    /// All intents in classification priority order (first match wins).
    pub const ALL: [Intent; 7] = [
        Intent::Who,
        Intent::Where,
        Intent::When,
        Intent::What,
        Intent::How,
        Intent::Why,
        Intent::Which,
    ];

    /// The lower-case marker word for this intent.
    pub fn marker(self) -> &'static str {
        match self {
            Intent::Who => "who",
            Intent::Where => "where",
            Intent::When => "when",
            Intent::What => "what",
            Intent::How => "how",
            Intent::Why => "why",
            Intent::Which => "which",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

/// Splits `text` into lower-cased alphanumeric tokens, dropping tokens of
/// length ≤ 2.
///
/// Empty input yields an empty vec, never an error.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .collect()
}

/// Classifies the interrogative intent of `text`, if any.
///
/// Prefers a marker at the very start of the trimmed, lower-cased text
/// immediately followed by a space or `?`; otherwise falls back to the
/// first marker found anywhere as a whole word. Ties are broken by
/// [`Intent::ALL`] order.
pub fn classify_intent(text: &str) -> Option<Intent> {
    if text.is_empty() {
        return None;
    }

    let s = text.trim().to_lowercase();

    for intent in Intent::ALL {
        let marker = intent.marker();
        if s.starts_with(&format!("{marker} ")) || s.starts_with(&format!("{marker}?")) {
            return Some(intent);
        }
    }

    // Not leading: accept the marker anywhere as a whole word.
    let padded = format!(" {s} ");
    Intent::ALL
        .into_iter()
        .find(|intent| padded.contains(&format!(" {} ", intent.marker())))
}
