//! Pass/fail status verification over merged OCR text.
//!
//! The hard part is that every report card prints a grading-scale legend
//! ("Below 75 = Failed ... Outstanding ... Satisfactory"), so the word
//! "failed" alone proves nothing. Detection therefore runs in layers:
//! explicit failure phrases, contextual whole-word "failed" hits near
//! academic vocabulary, weaker secondary keywords, and passing keywords,
//! with rubric boilerplate suppressing naive hits on both sides.
//!
//! Resolution is deliberately conservative: on any ambiguity, failure wins,
//! so the system never reassures a failing student by mistake.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, error, info};

use super::types::{DocumentStatus, RecognizedText, StatusVerdict};

/// Explicit phrases that reliably indicate an actual failure.
const PRIMARY_FAILURE_REMARKS: [&str; 11] = [
    "failed remarks",
    "failed grade",
    "failed subject",
    "failed course",
    "failed in",
    "has failed",
    "student failed",
    "grade failed",
    "failed mark",
    "failed status",
    "academic failure",
];

/// Rubric-legend phrases. Their presence marks grading-scale context,
/// which suppresses naive failure-keyword hits.
const GRADING_SCALE_MARKERS: [&str; 8] = [
    "below 75",
    "did not meet expectations",
    "grading scale",
    "descriptors",
    "outstanding",
    "very satisfactory",
    "satisfactory",
    "fairly satisfactory",
];

/// Weaker failure signals; only meaningful without passing keywords.
const SECONDARY_FAILURE_KEYWORDS: [&str; 15] = [
    "incomplete",
    "incomplete grade",
    "needs improvement",
    "unsatisfactory",
    "remedial",
    "retake",
    "repeat",
    "not passed",
    "did not pass",
    "conditional",
    "probation",
    "academic warning",
    "insufficient",
    "deficient",
    "below average",
];

/// Keywords indicating a passing result.
const PASSING_KEYWORDS: [&str; 13] = [
    "passed",
    "pass",
    "satisfactory",
    "good",
    "excellent",
    "outstanding",
    "very good",
    "above average",
    "promoted",
    "promotion",
    "completed",
    "successful",
    "achieved",
];

/// Passing keywords that are also rubric adjectives. In grading-scale
/// context these come from the printed legend, not the student's remarks,
/// and must not count as a passing signal.
const RUBRIC_ADJECTIVES: [&str; 4] = [
    "outstanding",
    "very satisfactory",
    "satisfactory",
    "fairly satisfactory",
];

/// Academic-context words that qualify a "failed" hit as a real subject
/// failure.
const SUBJECT_CONTEXT_WORDS: [&str; 5] = ["subject", "grade", "quarter", "semester", "final"];

/// Rubric words that disqualify a "failed" hit even inside an academic
/// window.
const SCALE_CONTEXT_WORDS: [&str; 5] = [
    "descriptors",
    "grading scale",
    "below 75",
    "outstanding",
    "satisfactory",
];

/// Bytes inspected on each side of a whole-word "failed" occurrence.
const CONTEXT_WINDOW: usize = 50;

pub const FAILED_MESSAGE: &str = "You have failed remarks";
pub const PASSED_MESSAGE: &str = "You have passed";
pub const UNKNOWN_MESSAGE: &str = "Unable to determine pass/fail status";
pub const NO_TEXT_MESSAGE: &str = "No text to analyze";

static FAILED_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfailed\b").expect("failed-word regex"));

/// Verifies the pass/fail status of a report card.
///
/// Never panics: any internal failure during analysis is reported as a
/// [`DocumentStatus::Error`] verdict.
pub fn verify_status(units: &[RecognizedText]) -> StatusVerdict {
    match catch_unwind(AssertUnwindSafe(|| analyze(units))) {
        Ok(verdict) => verdict,
        Err(panic) => {
            let reason = panic_message(panic.as_ref());
            error!(reason = %reason, "status analysis panicked");
            StatusVerdict::error(format!("Error analyzing report card: {reason}"))
        }
    }
}

fn analyze(units: &[RecognizedText]) -> StatusVerdict {
    if units.is_empty() {
        return StatusVerdict::unknown(NO_TEXT_MESSAGE);
    }

    let blob = units
        .iter()
        .map(|u| u.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let scale_context = GRADING_SCALE_MARKERS.iter().any(|m| blob.contains(m));
    if scale_context {
        debug!("grading-scale boilerplate present; failure keywords gated");
    }

    let mut evidence: Vec<String> = Vec::new();
    let mut primary_failure = false;

    if !scale_context {
        for remark in PRIMARY_FAILURE_REMARKS {
            if blob.contains(remark) {
                primary_failure = true;
                evidence.push(remark.to_string());
                info!(remark, "primary failure remark found");
            }
        }
    }

    let subject_failures = if scale_context {
        0
    } else {
        count_subject_failures(&blob)
    };
    if subject_failures > 0 {
        primary_failure = true;
        evidence.push(format!("subject failures detected ({subject_failures})"));
    }

    let mut secondary_hits: Vec<String> = Vec::new();
    if !scale_context {
        for keyword in SECONDARY_FAILURE_KEYWORDS {
            if blob.contains(keyword) {
                secondary_hits.push(keyword.to_string());
                debug!(keyword, "secondary failure keyword found");
            }
        }
    }

    let passing_hits: Vec<String> = PASSING_KEYWORDS
        .iter()
        .filter(|&&keyword| {
            // Rubric adjectives in scale context come from the legend.
            !(scale_context && RUBRIC_ADJECTIVES.contains(&keyword))
        })
        .filter(|&&keyword| blob.contains(keyword))
        .map(|&keyword| keyword.to_string())
        .collect();

    let verdict = resolve(primary_failure, evidence, secondary_hits, passing_hits);
    info!(status = %verdict.status, "report card status analysis complete");
    verdict
}

/// Counts whole-word "failed" occurrences whose ±50-byte window contains
/// academic vocabulary and no rubric vocabulary.
fn count_subject_failures(blob: &str) -> usize {
    if !blob.contains("failed") {
        return 0;
    }

    FAILED_WORD_RE
        .find_iter(blob)
        .filter(|m| {
            let context = context_window(blob, m.start(), m.end());
            let academic = SUBJECT_CONTEXT_WORDS.iter().any(|w| context.contains(w));
            let rubric = SCALE_CONTEXT_WORDS.iter().any(|w| context.contains(w));
            if academic && !rubric {
                debug!(context, "subject failure context hit");
                true
            } else {
                false
            }
        })
        .count()
}

/// Symmetric byte window around `[start, end)`, clamped to char
/// boundaries. The keyword vocabulary is ASCII, so the clamp only affects
/// how much surrounding non-ASCII text is inspected.
fn context_window(blob: &str, start: usize, end: usize) -> &str {
    let mut lo = start.saturating_sub(CONTEXT_WINDOW);
    while !blob.is_char_boundary(lo) {
        lo -= 1;
    }

    let mut hi = (end + CONTEXT_WINDOW).min(blob.len());
    while !blob.is_char_boundary(hi) {
        hi += 1;
    }

    &blob[lo..hi]
}

/// Failure-wins-ties resolution.
fn resolve(
    primary_failure: bool,
    mut evidence: Vec<String>,
    secondary_hits: Vec<String>,
    passing_hits: Vec<String>,
) -> StatusVerdict {
    if primary_failure {
        return StatusVerdict::new(DocumentStatus::Failed, FAILED_MESSAGE, evidence);
    }

    if !secondary_hits.is_empty() && passing_hits.is_empty() {
        return StatusVerdict::new(DocumentStatus::Failed, FAILED_MESSAGE, secondary_hits);
    }

    if !passing_hits.is_empty() && secondary_hits.is_empty() {
        return StatusVerdict::new(DocumentStatus::Passed, PASSED_MESSAGE, passing_hits);
    }

    if !passing_hits.is_empty() {
        // Mixed signals: failure takes precedence over reassurance.
        evidence.extend(secondary_hits);
        return StatusVerdict::new(DocumentStatus::Failed, FAILED_MESSAGE, evidence);
    }

    StatusVerdict::unknown(UNKNOWN_MESSAGE)
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
