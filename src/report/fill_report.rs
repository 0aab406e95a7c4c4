use serde::{Deserialize, Serialize};

// ============================================================================
// Fill report — per-invocation summary plus per-control diagnostic trace
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStatus {
    /// Control resolved and a value was applied.
    Hit,
    /// Control resolved but filling was not possible (no profile value,
    /// no option matched, element gone).
    Miss,
    /// Control had no resolution at all; expected for irrelevant controls.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillEntry {
    pub index: usize,
    pub hint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub status: FillStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FillEntry {
    pub fn hit(index: usize, hint: &str, field_key: &str, value: &str) -> Self {
        FillEntry {
            index,
            hint: hint.to_string(),
            field_key: Some(field_key.to_string()),
            value: Some(value.to_string()),
            status: FillStatus::Hit,
            reason: None,
        }
    }

    pub fn miss(index: usize, hint: &str, field_key: Option<&str>, reason: &str) -> Self {
        FillEntry {
            index,
            hint: hint.to_string(),
            field_key: field_key.map(|k| k.to_string()),
            value: None,
            status: FillStatus::Miss,
            reason: Some(reason.to_string()),
        }
    }

    pub fn skip(index: usize, hint: &str, reason: &str) -> Self {
        FillEntry {
            index,
            hint: hint.to_string(),
            field_key: None,
            value: None,
            status: FillStatus::Skip,
            reason: Some(reason.to_string()),
        }
    }

    pub fn is_hit(&self) -> bool {
        self.status == FillStatus::Hit
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillReport {
    pub filled_count: usize,
    pub entries: Vec<FillEntry>,
}

impl FillReport {
    pub fn count_of(&self, status: FillStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}
