use std::collections::HashSet;

use job_autofill::registry::model::FieldRegistry;

// ============================================================================
// 1. Catalogue size and key shape
// ============================================================================

#[test]
fn standard_catalogue_shape() {
    let registry = FieldRegistry::standard();

    assert_eq!(registry.len(), 61);
    assert!(registry.iter().all(|s| s.key.starts_with("f_")));
}

// ============================================================================
// 2. Keys are unique
// ============================================================================

#[test]
fn standard_keys_unique() {
    let registry = FieldRegistry::standard();
    let keys: HashSet<&str> = registry.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys.len(), registry.len());
}

// ============================================================================
// 3. Every key carries an AI description
// ============================================================================

#[test]
fn standard_descriptions_present() {
    let registry = FieldRegistry::standard();
    assert!(registry.iter().all(|s| !s.description.is_empty()));
}

// ============================================================================
// 4. Only the second address line is catalogue-only
// ============================================================================

#[test]
fn only_street2_is_catalogue_only() {
    let registry = FieldRegistry::standard();

    let keyword_less: Vec<&str> = registry
        .iter()
        .filter(|s| s.keywords.is_empty())
        .map(|s| s.key.as_str())
        .collect();

    assert_eq!(keyword_less, vec!["f_street2"]);
}

// ============================================================================
// 5. Keyword patterns are stored lowercase
// ============================================================================

#[test]
fn patterns_stored_lowercase() {
    let registry = FieldRegistry::standard();

    for spec in registry.iter() {
        for pattern in spec.keywords.iter().chain(spec.exclude.iter()) {
            assert_eq!(
                pattern,
                &pattern.to_lowercase(),
                "pattern '{}' of {} is not lowercase",
                pattern,
                spec.key
            );
        }
    }
}

// ============================================================================
// 6. Lookup by key
// ============================================================================

#[test]
fn registry_lookup() {
    let registry = FieldRegistry::standard();

    assert!(registry.contains("f_tfn"));
    assert!(registry.contains("f_wwcc"));
    assert!(!registry.contains("f_unknown"));

    let spec = registry.get("f_gender").unwrap();
    assert!(spec.exclude.contains(&"pronoun".to_string()));
}
