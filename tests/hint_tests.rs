use job_autofill::page::control::RawControl;
use job_autofill::page::hint::{
    extract_hint, hint_fingerprint, normalize_hint, truncate_hint, MAX_AI_HINT_LEN,
};

mod common;
use common::text_input;

// ============================================================================
// 1. All cues concatenate into one normalized string
// ============================================================================

#[test]
fn hint_concatenates_cues() {
    let control = RawControl {
        tag: "input".into(),
        input_type: Some("text".into()),
        placeholder: Some("Your name".into()),
        name: Some("first_name".into()),
        id: Some("fn1".into()),
        label_text: Some("First Name:*".into()),
        ..Default::default()
    };

    // Underscores and label punctuation become spaces, everything lowercases.
    assert_eq!(extract_hint(&control), "your name first name fn1 first name");
}

// ============================================================================
// 2. A control with no cues yields an empty hint
// ============================================================================

#[test]
fn hint_empty_without_cues() {
    let control = RawControl {
        tag: "input".into(),
        input_type: Some("text".into()),
        ..Default::default()
    };

    assert_eq!(extract_hint(&control), "");
}

// ============================================================================
// 3. Label punctuation is stripped
// ============================================================================

#[test]
fn normalize_strips_label_punctuation() {
    assert_eq!(normalize_hint("(Preferred) Name:"), "preferred name");
    assert_eq!(normalize_hint("Email Address *"), "email address");
    assert_eq!(normalize_hint("[required] given_name"), "required given name");
}

// ============================================================================
// 4. Whitespace runs collapse to single spaces
// ============================================================================

#[test]
fn normalize_collapses_whitespace() {
    assert_eq!(normalize_hint("First   Name\n\t Last"), "first name last");
    assert_eq!(normalize_hint("   "), "");
}

// ============================================================================
// 5. Aria and wrapper cues participate
// ============================================================================

#[test]
fn hint_includes_aria_and_wrapper_cues() {
    let control = RawControl {
        tag: "input".into(),
        input_type: Some("text".into()),
        aria_label: Some("Mobile number".into()),
        wrapper_label: Some("Contact details".into()),
        preceding_text: Some("Phone".into()),
        ..Default::default()
    };

    let hint = extract_hint(&control);
    assert!(hint.contains("mobile number"));
    assert!(hint.contains("contact details"));
    assert!(hint.contains("phone"));
}

// ============================================================================
// 6. Truncation respects the AI hint cap
// ============================================================================

#[test]
fn truncate_bounds_long_hints() {
    let long = "x".repeat(500);
    let truncated = truncate_hint(&long, MAX_AI_HINT_LEN);
    assert_eq!(truncated.chars().count(), MAX_AI_HINT_LEN);

    assert_eq!(truncate_hint("abc", 2), "ab");
    assert_eq!(truncate_hint("abc", 10), "abc");
}

// ============================================================================
// 7. Fingerprints are stable per control and differ across controls
// ============================================================================

#[test]
fn fingerprint_stable_and_distinct() {
    let a = text_input("email", "Email");
    let b = text_input("phone", "Phone");

    let hint_a = extract_hint(&a);
    let hint_b = extract_hint(&b);

    assert_eq!(hint_fingerprint(&a, &hint_a), hint_fingerprint(&a, &hint_a));
    assert_ne!(hint_fingerprint(&a, &hint_a), hint_fingerprint(&b, &hint_b));
}
