//! Decoding of LLM replies against the JSON contracts
//!
//! Replies frequently arrive wrapped in a markdown code fence. At most one
//! fenced block is honored; whatever is inside (or the bare reply) must
//! decode as the exact expected shape or the reply is rejected.

use crate::error::EngineError;
use serde::Deserialize;

/// Raw extraction reply as the model emits it. `value` of `"0"` is the
/// wire-level not-found marker.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionReply {
    #[serde(default = "not_found_value")]
    pub value: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

impl ExtractionReply {
    /// Whether the reply carries an actual value.
    pub fn is_found(&self) -> bool {
        !self.value.trim().is_empty() && self.value.trim() != "0"
    }
}

fn not_found_value() -> String {
    "0".to_string()
}

/// Raw query-parse reply. Either field may be null when the model could
/// not resolve it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryReply {
    #[serde(default)]
    pub datapoint: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}

/// Decode an extraction reply, tolerating a single markdown fence.
pub fn parse_extraction_reply(raw: &str) -> Result<ExtractionReply, EngineError> {
    let payload = strip_fence(raw);
    serde_json::from_str(payload).map_err(|e| {
        EngineError::JsonParse(format!("extraction reply did not match contract: {}", e))
    })
}

/// Decode a query-parse reply, tolerating a single markdown fence.
pub fn parse_query_reply(raw: &str) -> Result<QueryReply, EngineError> {
    let payload = strip_fence(raw);
    serde_json::from_str(payload)
        .map_err(|e| EngineError::JsonParse(format!("query reply did not match contract: {}", e)))
}

/// Return the contents of the first code fence, preferring a ```json
/// fence, or the trimmed input when no fence is present.
fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if let Some(rest) = trimmed.split_once("```json").map(|(_, rest)| rest) {
        if let Some((inner, _)) = rest.split_once("```") {
            return inner.trim();
        }
    }
    if let Some(rest) = trimmed.split_once("```").map(|(_, rest)| rest) {
        if let Some((inner, _)) = rest.split_once("```") {
            return inner.trim();
        }
    }
    trimmed
}
