use std::fs;
use std::path::PathBuf;

use job_autofill::engine::error::AutofillError;
use job_autofill::profile::model::Profile;
use job_autofill::profile::store::ProfileStore;

// ============================================================================
// Helpers
// ============================================================================

fn temp_store(test_name: &str) -> (ProfileStore, PathBuf) {
    let dir = std::env::temp_dir().join(format!(
        "job-autofill-tests-{}-{}",
        std::process::id(),
        test_name
    ));
    let _ = fs::remove_dir_all(&dir);
    (ProfileStore::new(&dir), dir)
}

fn sample_profile() -> Profile {
    let mut profile = Profile::new();
    profile.set("f_firstName", "Jane");
    profile.set("f_lastName", "Citizen");
    profile.set("f_email", "jane@example.com");
    profile.set("f_phone", "");
    profile
}

// ============================================================================
// 1. Populated filter drops unset and empty values
// ============================================================================

#[test]
fn populated_filters_empty_values() {
    let profile = sample_profile();

    let populated: Vec<(&str, &str)> = profile.populated().collect();
    assert_eq!(populated.len(), 3);
    assert!(populated.iter().all(|(_, v)| !v.is_empty()));

    assert_eq!(profile.populated_value("f_firstName"), Some("Jane"));
    assert_eq!(profile.populated_value("f_phone"), None);
    assert_eq!(profile.populated_value("f_missing"), None);
}

// ============================================================================
// 2. The JSON document mirrors the mapping one-to-one
// ============================================================================

#[test]
fn profile_json_roundtrip() {
    let profile = sample_profile();
    let doc = profile.to_json();

    // Transparent serialization: the document is the bare mapping.
    let raw: serde_json::Value = serde_json::from_str(&doc).unwrap();
    assert_eq!(raw["f_firstName"], "Jane");
    assert!(raw.get("values").is_none());

    let parsed = Profile::from_json(&doc).unwrap();
    assert_eq!(parsed, profile);
}

// ============================================================================
// 3. Save / load / list through the store
// ============================================================================

#[test]
fn store_save_load_list() {
    let (store, dir) = temp_store("save-load-list");
    let profile = sample_profile();

    store.save("grad-apps", &profile).unwrap();
    store.save("big4", &profile).unwrap();

    assert_eq!(store.list(), vec!["big4".to_string(), "grad-apps".to_string()]);
    assert_eq!(store.load("grad-apps").unwrap(), profile);

    let _ = fs::remove_dir_all(dir);
}

// ============================================================================
// 4. Loading a missing profile is ProfileNotFound
// ============================================================================

#[test]
fn store_missing_profile() {
    let (store, dir) = temp_store("missing");

    match store.load("nope") {
        Err(AutofillError::ProfileNotFound { name }) => assert_eq!(name, "nope"),
        other => panic!("expected ProfileNotFound, got {:?}", other),
    }

    let _ = fs::remove_dir_all(dir);
}

// ============================================================================
// 5. Import parses-then-saves; export reproduces the document
// ============================================================================

#[test]
fn store_import_export() {
    let (store, dir) = temp_store("import-export");

    let doc = r#"{"f_firstName":"Jane","f_state":"VIC"}"#;
    let imported = store.import("from-file", doc).unwrap();
    assert_eq!(imported.get("f_state"), Some("VIC"));

    let exported = store.export("from-file").unwrap();
    let parsed = Profile::from_json(&exported).unwrap();
    assert_eq!(parsed, imported);

    // Malformed documents are rejected without touching the store.
    assert!(matches!(
        store.import("bad", "not json"),
        Err(AutofillError::ProfileFormat { .. })
    ));
    assert_eq!(store.list(), vec!["from-file".to_string()]);

    let _ = fs::remove_dir_all(dir);
}
