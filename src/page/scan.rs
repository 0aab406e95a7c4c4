use std::collections::HashMap;

use crate::page::control::{Candidate, ControlKind, RadioMember, RawControl};
use crate::page::hint::extract_hint;

// ============================================================================
// Candidate scan — classify snapshot records into fillable candidates
// ============================================================================

/// Enumerate the fillable candidates of a page snapshot, in document order.
/// Radio inputs sharing a name fold into one RadioGroup candidate positioned
/// at the first member; unnamed radios cannot be grouped and are dropped.
/// Candidate indices are assigned sequentially over the result.
pub fn scan_candidates(controls: &[RawControl]) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut group_slots: HashMap<String, usize> = HashMap::new();

    for (raw_index, control) in controls.iter().enumerate() {
        if !is_fillable(control) {
            continue;
        }

        let kind = match classify(control) {
            Some(k) => k,
            None => continue,
        };

        if kind == ControlKind::RadioGroup {
            let name = match &control.name {
                Some(n) if !n.is_empty() => n.clone(),
                _ => continue,
            };

            let member = radio_member(raw_index, control);
            match group_slots.get(&name) {
                Some(&slot) => {
                    candidates[slot].members.push(member);
                }
                None => {
                    group_slots.insert(name.clone(), candidates.len());
                    candidates.push(Candidate {
                        index: 0,
                        kind,
                        raw_index,
                        tag: control.tag.clone(),
                        input_type: control.input_type.clone(),
                        name: Some(name),
                        hint: extract_hint(control),
                        options: Vec::new(),
                        members: vec![member],
                    });
                }
            }
            continue;
        }

        candidates.push(Candidate {
            index: 0,
            kind,
            raw_index,
            tag: control.tag.clone(),
            input_type: control.input_type.clone(),
            name: control.name.clone(),
            hint: extract_hint(control),
            options: control.options.clone().unwrap_or_default(),
            members: Vec::new(),
        });
    }

    for (index, candidate) in candidates.iter_mut().enumerate() {
        candidate.index = index;
    }

    candidates
}

fn is_fillable(control: &RawControl) -> bool {
    if control.disabled || control.readonly {
        return false;
    }

    match control.tag.as_str() {
        "textarea" | "select" => true,
        "input" => !matches!(
            control.input_type.as_deref(),
            Some("hidden") | Some("submit") | Some("button") | Some("reset") | Some("file")
                | Some("image")
        ),
        _ => false,
    }
}

fn classify(control: &RawControl) -> Option<ControlKind> {
    match control.tag.as_str() {
        "textarea" => Some(ControlKind::Textarea),
        "select" => Some(ControlKind::Select),
        "input" => match control.input_type.as_deref() {
            Some("radio") => Some(ControlKind::RadioGroup),
            Some("checkbox") => Some(ControlKind::Checkbox),
            _ => Some(ControlKind::Text),
        },
        _ => None,
    }
}

fn radio_member(raw_index: usize, control: &RawControl) -> RadioMember {
    let enclosing = [
        control.ancestor_label.as_deref().unwrap_or(""),
        control.adjacent_text.as_deref().unwrap_or(""),
    ]
    .join(" ");

    RadioMember {
        raw_index,
        value: control.value.clone(),
        label_text: control.label_text.clone().unwrap_or_default(),
        enclosing_text: enclosing.trim().to_string(),
    }
}
