use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile — field key → value mapping, externally owned
// ============================================================================

/// An applicant profile: field key (`f_*`) to scalar string value. The JSON
/// document form is the bare mapping, one-to-one, which is also the
/// import/export format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    pub values: BTreeMap<String, String>,
}

impl Profile {
    pub fn new() -> Self {
        Profile { values: BTreeMap::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    /// The value for a key, only if non-empty.
    pub fn populated_value(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Populated entries only, in key order. Unset and empty fields are
    /// never sent anywhere.
    pub fn populated(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.populated().next().is_none()
    }

    pub fn from_json(doc: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(doc)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
