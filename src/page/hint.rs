use crate::page::control::RawControl;

// ============================================================================
// Hint extraction — normalized labelling text for one control
// ============================================================================

/// Maximum hint length when building AI descriptors. Keeps prompts small on
/// pages with verbose wrapper text.
pub const MAX_AI_HINT_LEN: usize = 300;

/// Collect every labelling cue of a control into one normalized string:
/// lowercased, label punctuation (`* _ : ( ) [ ]`) replaced with spaces,
/// whitespace runs collapsed. Returns an empty string when the control
/// carries no cues at all.
pub fn extract_hint(control: &RawControl) -> String {
    let parts: [&str; 13] = [
        control.placeholder.as_deref().unwrap_or(""),
        control.name.as_deref().unwrap_or(""),
        control.id.as_deref().unwrap_or(""),
        control.aria_label.as_deref().unwrap_or(""),
        control.labelledby_text.as_deref().unwrap_or(""),
        control.title.as_deref().unwrap_or(""),
        control.data_label.as_deref().unwrap_or(""),
        control.data_name.as_deref().unwrap_or(""),
        control.label_text.as_deref().unwrap_or(""),
        control.ancestor_label.as_deref().unwrap_or(""),
        control.wrapper_label.as_deref().unwrap_or(""),
        control.preceding_text.as_deref().unwrap_or(""),
        control.adjacent_text.as_deref().unwrap_or(""),
    ];

    normalize_hint(&parts.join(" "))
}

/// Normalization applied to the concatenated cue text.
pub fn normalize_hint(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped: String = lowered
        .chars()
        .map(|c| match c {
            '*' | '_' | ':' | '(' | ')' | '[' | ']' => ' ',
            other => other,
        })
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a hint for AI descriptors, at a char boundary.
pub fn truncate_hint(hint: &str, max_len: usize) -> String {
    if hint.chars().count() <= max_len {
        return hint.to_string();
    }
    hint.chars().take(max_len).collect()
}

/// Stable identity for a control across runs: sha1 of name, id and hint.
/// Used to correlate trace events without logging positional indices alone.
pub fn hint_fingerprint(control: &RawControl, hint: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(control.name.as_deref().unwrap_or("").as_bytes());
    hasher.update(b"|");
    hasher.update(control.id.as_deref().unwrap_or("").as_bytes());
    hasher.update(b"|");
    hasher.update(hint.as_bytes());
    format!("{:x}", hasher.finalize())
}
