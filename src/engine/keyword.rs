use crate::registry::model::{FieldRegistry, FieldSpec};

// ============================================================================
// Keyword matcher — deterministic, offline rule resolution
// ============================================================================

/// Resolve a hint to at most one field spec: the first entry in registry
/// order with a keyword contained in the hint and no exclude keyword
/// contained in it. The hint is expected pre-normalized (lowercase,
/// whitespace-collapsed); keywords are stored lowercase at construction.
pub fn match_hint<'r>(registry: &'r FieldRegistry, hint: &str) -> Option<&'r FieldSpec> {
    if hint.is_empty() {
        return None;
    }

    registry.iter().find(|spec| rule_matches(spec, hint))
}

fn rule_matches(spec: &FieldSpec, hint: &str) -> bool {
    if !spec.keywords.iter().any(|k| hint.contains(k.as_str())) {
        return false;
    }
    if spec.exclude.iter().any(|k| hint.contains(k.as_str())) {
        return false;
    }
    true
}
