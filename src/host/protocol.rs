use serde::{Deserialize, Serialize};

use crate::engine::ai_matcher::{CompletionBackend, HttpCompletionBackend};
use crate::engine::autofill::{run_ai, run_keyword};
use crate::page::control::RawControl;
use crate::page::host::PageHost;
use crate::profile::model::Profile;
use crate::registry::model::FieldRegistry;
use crate::report::fill_report::FillReport;
use crate::trace::logger::TraceLogger;

// ============================================================================
// Invocation boundary — request/response shapes of the fill transport
// ============================================================================

/// One autofill invocation as received from the external transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillRequest {
    pub profile: Profile,
    #[serde(rename = "useAI", default)]
    pub use_ai: bool,
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillResponse {
    pub filled_count: usize,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<FillReport>,
}

impl FillResponse {
    pub fn from_report(report: FillReport) -> Self {
        Self {
            filled_count: report.filled_count,
            success: true,
            error: None,
            diagnostics: Some(report),
        }
    }

    pub fn from_error(message: String) -> Self {
        Self {
            filled_count: 0,
            success: false,
            error: Some(message),
            diagnostics: None,
        }
    }
}

/// Reply to the lightweight presence probe the orchestration layer sends
/// before a real fill request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResponse {
    pub alive: bool,
}

impl ProbeResponse {
    pub fn alive() -> Self {
        Self { alive: true }
    }
}

/// Serve one fill request against a page. A backend may be injected for
/// tests; otherwise AI requests get the default HTTP backend carrying the
/// request's API key.
pub fn handle_fill(
    registry: &FieldRegistry,
    request: &FillRequest,
    controls: &[RawControl],
    host: &mut dyn PageHost,
    backend: Option<&dyn CompletionBackend>,
    tracer: &TraceLogger,
) -> FillResponse {
    if !request.use_ai {
        let report = run_keyword(registry, &request.profile, controls, host, tracer);
        return FillResponse::from_report(report);
    }

    let default_backend;
    let backend: &dyn CompletionBackend = match backend {
        Some(b) => b,
        None => {
            default_backend = HttpCompletionBackend {
                api_key: request.api_key.clone(),
                ..HttpCompletionBackend::default()
            };
            &default_backend
        }
    };

    match run_ai(registry, &request.profile, controls, host, backend, tracer) {
        Ok(report) => FillResponse::from_report(report),
        Err(e) => FillResponse::from_error(e.to_string()),
    }
}
