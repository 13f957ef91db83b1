use super::*;
use serial_test::serial;
use std::env;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_usher_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("USHER_MATCH_THRESHOLD");
        env::remove_var("USHER_SUGGESTION_LIMIT");
        env::remove_var("USHER_SUGGESTION_MIN_SIMILARITY");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.match_threshold, 0.7);
    assert_eq!(config.suggestion_limit, 3);
    assert_eq!(config.suggestion_min_similarity, 0.3);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_usher_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.match_threshold, 0.7);
    assert_eq!(config.suggestion_limit, 3);
}

#[test]
#[serial]
fn test_from_env_custom_threshold() {
    clear_usher_env();

    with_env_vars(&[("USHER_MATCH_THRESHOLD", "0.85")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.match_threshold, 0.85);
    });
}

#[test]
#[serial]
fn test_from_env_custom_suggestion_limit() {
    clear_usher_env();

    with_env_vars(&[("USHER_SUGGESTION_LIMIT", "5")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.suggestion_limit, 5);
    });
}

#[test]
#[serial]
fn test_from_env_threshold_not_a_number() {
    clear_usher_env();

    with_env_vars(&[("USHER_MATCH_THRESHOLD", "high")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("USHER_MATCH_THRESHOLD"));
    });
}

#[test]
#[serial]
fn test_from_env_threshold_out_of_range() {
    clear_usher_env();

    with_env_vars(&[("USHER_MATCH_THRESHOLD", "1.5")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOutOfRange { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_zero_suggestion_limit() {
    clear_usher_env();

    with_env_vars(&[("USHER_SUGGESTION_LIMIT", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSuggestionLimit { .. }));
    });
}

#[test]
fn test_validate_zero_threshold_rejected() {
    let config = Config {
        match_threshold: 0.0,
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ThresholdOutOfRange { .. }));
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::ThresholdOutOfRange {
        name: "USHER_MATCH_THRESHOLD",
        value: 1.5,
    };
    assert!(err.to_string().contains("USHER_MATCH_THRESHOLD"));
    assert!(err.to_string().contains("1.5"));
}
