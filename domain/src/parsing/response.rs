//! Stage-aware parsing of the located JSON object.

use super::json_extract::locate_json_object;
use super::references::normalize_references;
use crate::debate::stage::Stage;
use serde_json::{Map, Value};

/// A JSON object that carries the answer key required by its stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    stage: Stage,
    object: Map<String, Value>,
}

impl ParsedResponse {
    /// The value under the stage's answer key, as text.
    ///
    /// Non-string values are rendered as compact JSON.
    pub fn answer(&self) -> String {
        match self.object.get(self.stage.answer_key()) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Normalized `references` array (http/https URLs only, capped).
    pub fn references(&self) -> Vec<String> {
        match self.object.get("references") {
            Some(Value::Array(items)) => {
                normalize_references(items.iter().filter_map(Value::as_str))
            }
            _ => Vec::new(),
        }
    }
}

/// Parse the first JSON object in `raw` and check the stage's required key.
///
/// Total: returns `None` for missing, malformed, non-object or incomplete
/// JSON, never panics.
pub fn parse_response(raw: &str, stage: Stage) -> Option<ParsedResponse> {
    let candidate = locate_json_object(raw)?;
    parse_object(candidate, stage)
}

/// Strict parse of an already located candidate.
pub fn parse_object(candidate: &str, stage: Stage) -> Option<ParsedResponse> {
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(candidate) else {
        return None;
    };
    if !object.contains_key(stage.answer_key()) {
        return None;
    }
    Some(ParsedResponse { stage, object })
}
