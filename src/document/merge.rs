//! Recombination of OCR fragments split across recognition boxes.
//!
//! Recognition sometimes splits one printed line into two boxes ("General
//! Average" / "for the Semester"). The downstream keyword analysis depends
//! on those phrases staying intact, so known splits are rejoined here.
//!
//! This is a closed, hand-curated pattern list, not a general segmentation
//! algorithm; unlisted splits pass through untouched. Known limitation.

use tracing::debug;

use super::types::RecognizedText;

/// `(current, next)` fragment pairs that belong to one line.
const SPLIT_PATTERNS: [(&str, &str); 3] = [
    ("general average", "for the semester"),
    ("1st semester", "final grade"),
    ("school year", "2024 - 2025"),
];

/// Merges adjacent fragments matching a known split pattern.
///
/// Pairwise left-to-right scan: on a match, the two fragments become one
/// unit with their texts joined by a space and the higher of the two
/// confidences, and the scan advances past both.
pub fn merge_split_fragments(units: &[RecognizedText]) -> Vec<RecognizedText> {
    let mut merged = Vec::with_capacity(units.len());
    let mut i = 0;

    while i < units.len() {
        if i + 1 < units.len() {
            let current = units[i].text.trim();
            let next = units[i + 1].text.trim();
            let is_split = SPLIT_PATTERNS.iter().any(|&(a, b)| {
                current.to_lowercase() == a && next.to_lowercase() == b
            });

            if is_split {
                let text = format!("{current} {next}");
                let confidence = units[i].confidence.max(units[i + 1].confidence);
                debug!(text = %text, "rejoined split ocr fragments");
                merged.push(RecognizedText { text, confidence });
                i += 2;
                continue;
            }
        }

        merged.push(units[i].clone());
        i += 1;
    }

    merged
}
