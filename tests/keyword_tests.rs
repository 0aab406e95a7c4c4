use job_autofill::engine::keyword::match_hint;
use job_autofill::registry::model::{FieldRegistry, FieldSpec};

// ============================================================================
// Helper builders
// ============================================================================

fn fixture_registry() -> FieldRegistry {
    FieldRegistry::new(vec![
        FieldSpec::new("f_alpha", &["alpha", "first thing"], &["beta"], "First thing"),
        FieldSpec::new("f_beta", &["beta", "second thing"], &[], "Second thing"),
        FieldSpec::new("f_overlap", &["thing"], &[], "Catch-all thing"),
        FieldSpec::new("f_silent", &[], &[], "Catalogue-only key"),
    ])
}

// ============================================================================
// 1. Inclusion keyword resolves to the rule's key
// ============================================================================

#[test]
fn inclusion_keyword_matches() {
    let registry = fixture_registry();
    let spec = match_hint(&registry, "please enter alpha here").unwrap();
    assert_eq!(spec.key, "f_alpha");
}

// ============================================================================
// 2. Exclusion keyword vetoes an otherwise-matching rule
// ============================================================================

#[test]
fn exclusion_keyword_vetoes() {
    let registry = fixture_registry();
    // Hint contains both "alpha" and "beta": f_alpha is vetoed by its
    // exclude list, f_beta matches next.
    let spec = match_hint(&registry, "alpha beta combined").unwrap();
    assert_eq!(spec.key, "f_beta");
}

// ============================================================================
// 3. Declaration order decides overlapping rules
// ============================================================================

#[test]
fn earlier_rule_wins_overlap() {
    let registry = fixture_registry();
    // "second thing" matches f_beta ("second thing") and f_overlap ("thing");
    // f_beta is declared earlier.
    let spec = match_hint(&registry, "the second thing").unwrap();
    assert_eq!(spec.key, "f_beta");

    // "thing" alone falls through to the catch-all.
    let spec = match_hint(&registry, "some thing else").unwrap();
    assert_eq!(spec.key, "f_overlap");
}

// ============================================================================
// 4. Empty hint and unmatched hint resolve to none
// ============================================================================

#[test]
fn no_match_cases() {
    let registry = fixture_registry();
    assert!(match_hint(&registry, "").is_none());
    assert!(match_hint(&registry, "nothing relevant").is_none());
}

// ============================================================================
// 5. A catalogue-only key (no keywords) never matches
// ============================================================================

#[test]
fn catalogue_only_key_never_matches() {
    let registry = FieldRegistry::new(vec![FieldSpec::new(
        "f_silent",
        &[],
        &[],
        "Catalogue-only key",
    )]);
    assert!(match_hint(&registry, "f_silent silent anything").is_none());
}

// ============================================================================
// 6. Keywords are case-insensitive against the normalized hint
// ============================================================================

#[test]
fn keywords_lowercased_at_construction() {
    let registry = FieldRegistry::new(vec![FieldSpec::new(
        "f_loud",
        &["LOUD KEYWORD"],
        &["QUIET"],
        "Case test",
    )]);

    assert_eq!(
        match_hint(&registry, "a loud keyword here").unwrap().key,
        "f_loud"
    );
    assert!(match_hint(&registry, "a loud keyword but quiet").is_none());
}

// ============================================================================
// 7. Standard catalogue: representative resolutions
// ============================================================================

#[test]
fn standard_registry_resolutions() {
    let registry = FieldRegistry::standard();

    assert_eq!(match_hint(&registry, "first name").unwrap().key, "f_firstName");
    assert_eq!(match_hint(&registry, "surname").unwrap().key, "f_lastName");
    assert_eq!(match_hint(&registry, "email address").unwrap().key, "f_email");
    assert_eq!(match_hint(&registry, "state territory").unwrap().key, "f_state");
    assert_eq!(
        match_hint(&registry, "do you require visa sponsorship").unwrap().key,
        "f_sponsorship"
    );
    assert_eq!(
        match_hint(&registry, "security clearance level").unwrap().key,
        "f_clearance"
    );
    assert_eq!(
        match_hint(&registry, "tax file number").unwrap().key,
        "f_tfn"
    );
}

// ============================================================================
// 8. Standard catalogue: exclusion interplay
// ============================================================================

#[test]
fn standard_registry_exclusions() {
    let registry = FieldRegistry::standard();

    // "emergency" vetoes f_email and nothing else claims the hint.
    assert!(match_hint(&registry, "emergency contact email").is_none());

    // "last name" must not resolve to f_firstName ("last" is excluded there).
    assert_eq!(match_hint(&registry, "last name").unwrap().key, "f_lastName");

    // "emergency contact phone" resolves to the emergency rule, not f_phone.
    assert_eq!(
        match_hint(&registry, "emergency contact phone").unwrap().key,
        "f_emergencyPhone"
    );
}

// ============================================================================
// 9. Work-rights vocabulary resolves ahead of sponsorship
// ============================================================================

#[test]
fn work_rights_vs_sponsorship() {
    let registry = FieldRegistry::standard();

    assert_eq!(
        match_hint(&registry, "what is your right to work status").unwrap().key,
        "f_workRights"
    );
    // "sponsorship" vetoes f_workRights and f_sponsorship picks it up.
    assert_eq!(
        match_hint(&registry, "citizenship status or sponsorship required").unwrap().key,
        "f_sponsorship"
    );
}
