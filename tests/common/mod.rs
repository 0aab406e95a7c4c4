use job_autofill::page::control::{RawControl, SelectOption};

// ============================================================================
// Fixture builders — snapshot records for in-memory pages
// ============================================================================

fn some(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn text_input(name: &str, label: &str) -> RawControl {
    RawControl {
        tag: "input".into(),
        input_type: Some("text".into()),
        name: some(name),
        label_text: some(label),
        ..Default::default()
    }
}

pub fn textarea(name: &str, label: &str) -> RawControl {
    RawControl {
        tag: "textarea".into(),
        name: some(name),
        label_text: some(label),
        ..Default::default()
    }
}

pub fn select(name: &str, label: &str, options: &[(&str, &str)]) -> RawControl {
    RawControl {
        tag: "select".into(),
        name: some(name),
        label_text: some(label),
        options: Some(
            options
                .iter()
                .map(|(value, text)| SelectOption {
                    value: value.to_string(),
                    text: text.to_string(),
                })
                .collect(),
        ),
        ..Default::default()
    }
}

pub fn radio(name: &str, value: &str, label: &str) -> RawControl {
    RawControl {
        tag: "input".into(),
        input_type: Some("radio".into()),
        name: some(name),
        value: value.to_string(),
        label_text: some(label),
        ..Default::default()
    }
}

pub fn checkbox(name: &str, label: &str) -> RawControl {
    RawControl {
        tag: "input".into(),
        input_type: Some("checkbox".into()),
        name: some(name),
        label_text: some(label),
        ..Default::default()
    }
}

pub fn hidden_input(name: &str) -> RawControl {
    RawControl {
        tag: "input".into(),
        input_type: Some("hidden".into()),
        name: some(name),
        ..Default::default()
    }
}

pub fn submit_button(label: &str) -> RawControl {
    RawControl {
        tag: "input".into(),
        input_type: Some("submit".into()),
        value: label.to_string(),
        ..Default::default()
    }
}
