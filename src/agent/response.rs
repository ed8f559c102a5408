//! Agent response envelope and proposal extraction.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::model::ProposalData;

/// Response envelope returned by the agent endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<AgentPayload>,

    /// JSON-encoded fallback payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_outputs: Option<ModuleOutputs>,
}

/// Main payload of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentPayload {
    /// Structured result, expected to be an object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Text reply, possibly JSON-encoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

/// Side outputs produced by agent modules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleOutputs {
    #[serde(deserialize_with = "null_as_default")]
    pub artifact_files: Vec<ArtifactFile>,
}

/// A file generated by the agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AgentResponse {
    /// Successful response carrying a structured result.
    pub fn with_result(result: Value) -> Self {
        Self {
            success: true,
            response: Some(AgentPayload {
                result: Some(result),
                message: None,
            }),
            ..Self::default()
        }
    }

    /// Successful response carrying a text message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(AgentPayload {
                result: None,
                message: Some(Value::String(message.into())),
            }),
            ..Self::default()
        }
    }

    /// Response whose body could only be kept as raw text.
    pub fn raw(body: impl Into<String>) -> Self {
        Self {
            success: true,
            raw_response: Some(body.into()),
            ..Self::default()
        }
    }

    /// Failed response with an error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// URL of the first generated artifact file, if any.
    pub fn pdf_url(&self) -> Option<&str> {
        self.module_outputs
            .as_ref()?
            .artifact_files
            .first()?
            .file_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// Where the proposal content was found.
#[derive(Debug, Clone, PartialEq)]
enum Extracted {
    /// A JSON object with named proposal fields
    Fields(Map<String, Value>),
    /// A non-empty value without named fields, e.g. an array result
    Opaque,
    /// Nothing usable
    Empty,
}

impl Extracted {
    fn is_empty(&self) -> bool {
        match self {
            Extracted::Fields(map) => map.is_empty(),
            Extracted::Opaque => false,
            Extracted::Empty => true,
        }
    }
}

/// Extract proposal content from an agent response.
///
/// Tries, in order: the structured `response.result`, the `response.message`
/// text (as JSON, else as the executive summary), and finally the
/// `raw_response` JSON (its `result` field if present). The first non-empty
/// candidate wins; if none is found the proposal is empty. Never fails.
pub fn parse_agent_response(response: &AgentResponse) -> ProposalData {
    let mut extracted = Extracted::Empty;

    if response.success {
        if let Some(payload) = &response.response {
            extracted = from_payload(payload);
        }
    }

    if extracted.is_empty() {
        if let Some(raw) = &response.raw_response {
            debug!("falling back to raw agent response");
            extracted = from_raw(raw);
        }
    }

    match extracted {
        Extracted::Fields(map) => ProposalData::from_map(&map),
        Extracted::Opaque | Extracted::Empty => ProposalData::default(),
    }
}

fn from_payload(payload: &AgentPayload) -> Extracted {
    match &payload.result {
        Some(Value::Object(map)) => {
            debug!("using structured agent result");
            return Extracted::Fields(map.clone());
        }
        Some(Value::Array(items)) => {
            debug!("agent result is an array; no named fields");
            return if items.is_empty() {
                Extracted::Empty
            } else {
                Extracted::Opaque
            };
        }
        _ => {}
    }

    let Some(Value::String(message)) = &payload.message else {
        return Extracted::Empty;
    };
    if message.is_empty() {
        return Extracted::Empty;
    }

    match serde_json::from_str::<Value>(message) {
        Ok(Value::Object(map)) => {
            debug!("parsed agent message as JSON");
            Extracted::Fields(map)
        }
        Ok(_) => Extracted::Empty,
        Err(_) => {
            debug!("agent message is not JSON; using it as executive summary");
            let mut map = Map::new();
            map.insert(
                "executive_summary".to_string(),
                Value::String(message.clone()),
            );
            Extracted::Fields(map)
        }
    }
}

fn from_raw(raw: &str) -> Extracted {
    let Ok(Value::Object(mut map)) = serde_json::from_str::<Value>(raw) else {
        return Extracted::Empty;
    };

    match map.remove("result") {
        Some(Value::Object(result)) => Extracted::Fields(result),
        Some(result) if is_truthy(&result) => Extracted::Opaque,
        Some(result) => {
            map.insert("result".to_string(), result);
            Extracted::Fields(map)
        }
        None => Extracted::Fields(map),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
