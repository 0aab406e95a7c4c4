use serde::{Deserialize, Serialize};

// ============================================================================
// Page snapshot records and fillable candidates
// ============================================================================

/// One form control as captured by the host-side extractor. Field names match
/// the wire format produced by the DOM snapshot script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawControl {
    pub tag: String,
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub value: String,
    pub checked: bool,
    pub disabled: bool,
    pub readonly: bool,

    // Labelling cues, in the extractor's vocabulary.
    pub placeholder: Option<String>,
    pub title: Option<String>,
    pub aria_label: Option<String>,
    pub labelledby_text: Option<String>,
    pub data_label: Option<String>,
    pub data_name: Option<String>,
    pub label_text: Option<String>,
    pub ancestor_label: Option<String>,
    pub wrapper_label: Option<String>,
    pub preceding_text: Option<String>,
    pub adjacent_text: Option<String>,

    pub options: Option<Vec<SelectOption>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

/// Kind of fillable candidate, after classification and radio-group folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Textarea,
    Select,
    RadioGroup,
    Checkbox,
}

impl ControlKind {
    /// Wire label used in AI descriptors and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Textarea => "textarea",
            ControlKind::Select => "select",
            ControlKind::RadioGroup => "radio",
            ControlKind::Checkbox => "checkbox",
        }
    }

    /// Choice controls carry an enumerated option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, ControlKind::Select | ControlKind::RadioGroup)
    }
}

/// One member of a radio group, with the texts used to resolve which member
/// a target value refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioMember {
    /// Position of the radio input in the page snapshot.
    pub raw_index: usize,
    pub value: String,
    pub label_text: String,
    pub enclosing_text: String,
}

impl RadioMember {
    /// Text a radio is displayed with, for AI option lists.
    pub fn display_text(&self) -> &str {
        if !self.label_text.trim().is_empty() {
            self.label_text.trim()
        } else {
            &self.value
        }
    }
}

/// A fillable candidate produced by one page scan. `index` is stable within
/// the scan and is the identifier the AI response refers back to.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub index: usize,
    pub kind: ControlKind,
    /// Position in the page snapshot; for a radio group, the first member.
    pub raw_index: usize,
    pub tag: String,
    pub input_type: Option<String>,
    pub name: Option<String>,
    pub hint: String,
    /// Populated for Select candidates only.
    pub options: Vec<SelectOption>,
    /// Populated for RadioGroup candidates only.
    pub members: Vec<RadioMember>,
}
