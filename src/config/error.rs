use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {name}: '{value}' is not a number")]
    ParseError { name: &'static str, value: String },

    #[error("invalid {name}: {value} (must be within (0.0, 1.0])")]
    ThresholdOutOfRange { name: &'static str, value: f32 },

    #[error("invalid suggestion limit: {value} (must be at least 1)")]
    InvalidSuggestionLimit { value: usize },
}
