//! Document classifier capability.
//!
//! The classifier is an external oracle (a trained model behind the web
//! layer). The core only needs its label: status verification runs when a
//! document is classified as [`REPORT_CARD_LABEL`].

use super::error::ClassifyError;
use super::types::RecognizedText;

/// Label that gates status verification.
pub const REPORT_CARD_LABEL: &str = "Report Card";

/// Label for everything that is not a report card.
pub const NOT_REPORT_CARD_LABEL: &str = "Not Report Card";

/// Classifies a recognized-text sequence into a document label.
pub trait DocumentClassifier: Send + Sync {
    /// Returns the document label for `texts`.
    fn classify(&self, texts: &[RecognizedText]) -> Result<String, ClassifyError>;
}
