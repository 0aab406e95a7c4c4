use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::error::AutofillError;
use crate::page::control::Candidate;
use crate::page::hint::{truncate_hint, MAX_AI_HINT_LEN};
use crate::profile::model::Profile;
use crate::registry::model::FieldRegistry;

// ============================================================================
// AI matcher — one prompt, one completion call, strict-JSON match mapping
// ============================================================================

/// Option lists in descriptors are capped so a 200-option country select
/// cannot blow up the prompt.
const MAX_DESCRIPTOR_OPTIONS: usize = 20;

const SYSTEM_INSTRUCTION: &str =
    "You are a form-filling assistant. Respond with ONLY valid JSON. No prose, no code fences.";

// ============================================================================
// Completion backend
// ============================================================================

/// A remote completion service: one system instruction, one user prompt,
/// one text reply.
pub trait CompletionBackend {
    fn complete(&self, system: &str, prompt: &str) -> Result<String, AutofillError>;
}

/// OpenAI-style chat-completions backend over blocking HTTP.
pub struct HttpCompletionBackend {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

pub const DEFAULT_AI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";

impl Default for HttpCompletionBackend {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_AI_ENDPOINT.to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl HttpCompletionBackend {
    pub fn new(endpoint: &str, model: &str, api_key: Option<&str>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            model: model.to_string(),
            api_key: api_key.map(|k| k.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: String,
}

impl CompletionBackend for HttpCompletionBackend {
    fn complete(&self, system: &str, prompt: &str) -> Result<String, AutofillError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage { role: "system", content: system.to_string() },
                ChatMessage { role: "user", content: prompt.to_string() },
            ],
            temperature: 0.0,
        };

        let client = reqwest::blocking::Client::new();
        let mut builder = client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder.send().map_err(|e| AutofillError::Service {
            status: None,
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AutofillError::Service {
                status: Some(status.as_u16()),
                message: if body.is_empty() { status.to_string() } else { body },
            });
        }

        let reply: ChatResponse = response.json().map_err(|e| AutofillError::Service {
            status: None,
            message: format!("Unreadable completion body: {}", e),
        })?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AutofillError::ResponseFormat {
                context: "completion body had no choices".into(),
                source: None,
            })
    }
}

/// Canned backend for tests: returns a fixed reply or a fixed failure,
/// no network involved.
pub struct MockCompletionBackend {
    outcome: Result<String, (Option<u16>, String)>,
}

impl MockCompletionBackend {
    pub fn with_response(response: &str) -> Self {
        Self { outcome: Ok(response.to_string()) }
    }

    pub fn with_failure(status: u16, message: &str) -> Self {
        Self { outcome: Err((Some(status), message.to_string())) }
    }
}

impl CompletionBackend for MockCompletionBackend {
    fn complete(&self, _system: &str, _prompt: &str) -> Result<String, AutofillError> {
        match &self.outcome {
            Ok(response) => Ok(response.clone()),
            Err((status, message)) => Err(AutofillError::Service {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

// ============================================================================
// Descriptors — the page fields as enumerated to the model
// ============================================================================

/// One page field as described in the prompt. Built fresh per invocation and
/// discarded after; `index` is what the response refers back to.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub index: usize,
    pub tag: String,
    pub control_type: String,
    pub name: String,
    pub hint: String,
    pub options: Vec<String>,
}

/// Build descriptors for the candidates worth sending: controls with no
/// labelling cues at all are excluded, they could only be guessed at.
pub fn build_descriptors(candidates: &[Candidate]) -> Vec<FieldDescriptor> {
    candidates
        .iter()
        .filter(|c| !c.hint.is_empty())
        .map(|c| {
            let options = if c.kind.is_choice() {
                let texts: Vec<String> = if c.members.is_empty() {
                    c.options.iter().map(|o| o.text.trim().to_string()).collect()
                } else {
                    c.members.iter().map(|m| m.display_text().to_string()).collect()
                };
                texts.into_iter().take(MAX_DESCRIPTOR_OPTIONS).collect()
            } else {
                Vec::new()
            };

            FieldDescriptor {
                index: c.index,
                tag: c.tag.clone(),
                control_type: c.kind.as_str().to_string(),
                name: c.name.clone().unwrap_or_default(),
                hint: truncate_hint(&c.hint, MAX_AI_HINT_LEN),
                options,
            }
        })
        .collect()
}

// ============================================================================
// Prompt construction
// ============================================================================

/// Build the single user prompt: populated profile values, the catalogue
/// descriptions for those keys, and the enumerated page fields.
pub fn build_prompt(
    registry: &FieldRegistry,
    profile: &Profile,
    descriptors: &[FieldDescriptor],
) -> String {
    let profile_lines = profile
        .populated()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("\n");

    let description_lines = profile
        .populated()
        .filter_map(|(k, _)| registry.get(k))
        .map(|spec| format!("{}: {}", spec.key, spec.description))
        .collect::<Vec<_>>()
        .join("\n");

    let field_lines = descriptors
        .iter()
        .map(|d| {
            let mut line = format!("{}. [{}] name=\"{}\" hint: {}", d.index, d.control_type, d.name, d.hint);
            if !d.options.is_empty() {
                line.push_str(&format!("\n   options: {}", d.options.join(" | ")));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are filling an Australian job application form on behalf of an applicant.

APPLICANT PROFILE:
{profile}

FIELD KEY DESCRIPTIONS:
{descriptions}

PAGE FIELDS:
{fields}

Match page fields to profile keys. Return ONLY valid JSON of this exact shape:
{{"matches": {{"<index>": "<fieldKey>"}}}}
For select and radio fields, return {{"<index>": {{"key": "<fieldKey>", "option": "<optionText>"}}}}
inside "matches", where "option" echoes one of that field's listed option texts verbatim.
Omit any field you are not certain about rather than guessing."#,
        profile = profile_lines,
        descriptions = description_lines,
        fields = field_lines,
    )
}

// ============================================================================
// Response parsing
// ============================================================================

/// Parsed match mapping: candidate index (as string) to field key, or to a
/// field key plus the option text to pick for choice controls.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AiMatches {
    pub matches: HashMap<String, AiMatchValue>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AiMatchValue {
    Key(String),
    KeyWithOption { key: String, option: String },
}

impl AiMatchValue {
    pub fn key(&self) -> &str {
        match self {
            AiMatchValue::Key(k) => k,
            AiMatchValue::KeyWithOption { key, .. } => key,
        }
    }

    pub fn option(&self) -> Option<&str> {
        match self {
            AiMatchValue::Key(_) => None,
            AiMatchValue::KeyWithOption { option, .. } => Some(option),
        }
    }
}

/// Parse the raw model reply. Models occasionally wrap the JSON in prose or
/// fences despite instructions; recovery trims to the outermost curly braces
/// before giving up.
pub fn parse_matches(raw: &str) -> Result<AiMatches, AutofillError> {
    let trimmed = raw.trim();

    match serde_json::from_str::<AiMatches>(trimmed) {
        Ok(parsed) => return Ok(parsed),
        Err(first_err) => {
            let start = trimmed.find('{');
            let end = trimmed.rfind('}');
            let (start, end) = match (start, end) {
                (Some(s), Some(e)) if s < e => (s, e),
                _ => {
                    return Err(AutofillError::ResponseFormat {
                        context: "no JSON object in reply".into(),
                        source: Some(first_err),
                    });
                }
            };

            serde_json::from_str::<AiMatches>(&trimmed[start..=end]).map_err(|e| {
                AutofillError::ResponseFormat {
                    context: "after brace-trimming recovery".into(),
                    source: Some(e),
                }
            })
        }
    }
}

/// Full AI matching step: build the prompt, make one completion call, parse.
pub fn match_fields(
    backend: &dyn CompletionBackend,
    registry: &FieldRegistry,
    profile: &Profile,
    descriptors: &[FieldDescriptor],
) -> Result<AiMatches, AutofillError> {
    let prompt = build_prompt(registry, profile, descriptors);
    let reply = backend.complete(SYSTEM_INSTRUCTION, &prompt)?;
    parse_matches(&reply)
}
