use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::report::fill_report::FillEntry;

// ============================================================================
// Trace events — one JSONL record per control decision
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FillTraceEvent {
    pub timestamp_ms: u128,
    /// "keyword" or "ai".
    pub mode: String,
    pub index: usize,
    /// Stable control identity (sha1 over name, id, hint).
    pub control_fp: String,
    pub status: String,
    pub field_key: Option<String>,
    pub reason: Option<String>,
}

impl FillTraceEvent {
    pub fn for_entry(mode: &str, control_fp: &str, entry: &FillEntry) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            mode: mode.to_string(),
            index: entry.index,
            control_fp: control_fp.to_string(),
            status: format!("{:?}", entry.status).to_lowercase(),
            field_key: entry.field_key.clone(),
            reason: entry.reason.clone(),
        }
    }
}
