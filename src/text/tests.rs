use super::*;

#[test]
fn test_tokenize_lowercases_and_splits() {
    let tokens = tokenize("What are the Admission Requirements?");
    assert_eq!(tokens, vec!["what", "are", "the", "admission", "requirements"]);
}

#[test]
fn test_tokenize_drops_short_tokens() {
    let tokens = tokenize("Is it ok to go in?");
    assert!(tokens.is_empty());

    let tokens = tokenize("BS in CS at PSAU");
    assert_eq!(tokens, vec!["psau"]);
}

#[test]
fn test_tokenize_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
}

#[test]
fn test_tokenize_alphanumeric_runs() {
    let tokens = tokenize("room-101, bldg#3: 2nd-floor");
    assert_eq!(tokens, vec!["room", "101", "bldg", "2nd", "floor"]);
}

#[test]
fn test_classify_intent_leading_marker() {
    assert_eq!(classify_intent("Where is the registrar's office?"), Some(Intent::Where));
    assert_eq!(classify_intent("what are the requirements"), Some(Intent::What));
    assert_eq!(classify_intent("How?"), Some(Intent::How));
}

#[test]
fn test_classify_intent_embedded_marker() {
    assert_eq!(
        classify_intent("Please tell me where the office is"),
        Some(Intent::Where)
    );
}

#[test]
fn test_classify_intent_whole_word_only() {
    // "somewhere" and "whatever" must not match as markers.
    assert_eq!(classify_intent("I left it somewhere near whatever building"), None);
}

#[test]
fn test_classify_intent_priority_order() {
    // Both "who" and "what" appear embedded; enumeration order prefers "who".
    assert_eq!(
        classify_intent("Tell me what to bring and who to contact"),
        Some(Intent::Who)
    );
}

#[test]
fn test_classify_intent_leading_beats_embedded() {
    // Leading "what" wins over embedded "who" despite "who" ranking first.
    assert_eq!(
        classify_intent("What should I ask and who do I ask"),
        Some(Intent::What)
    );
}

#[test]
fn test_classify_intent_none() {
    assert_eq!(classify_intent(""), None);
    assert_eq!(classify_intent("Admission requirements please"), None);
}

#[test]
fn test_classify_intent_idempotent() {
    let text = "When does enrollment start?";
    assert_eq!(classify_intent(text), classify_intent(text));
    assert_eq!(classify_intent(text), Some(Intent::When));
}
