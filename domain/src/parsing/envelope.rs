//! Provider response envelopes.
//!
//! Providers wrap the model's text in their own JSON shapes. The adapter
//! unwraps exactly one top choice before looking for the debate JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shape of a provider's successful response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseEnvelope {
    /// Body is the model text itself
    Bare,
    /// `{"candidates": [{"content": {"parts": [{"text": ...}]}}]}`
    Candidates,
    /// `{"choices": [{"message": {"content": ...}}]}`
    ChatChoices,
}

impl ResponseEnvelope {
    /// Extract the model text from `body`.
    ///
    /// Falls back to the raw body when it is not JSON or lacks the
    /// expected top-level list.
    pub fn unwrap_text(&self, body: &str) -> String {
        if *self == ResponseEnvelope::Bare {
            return body.to_string();
        }
        let Ok(value) = serde_json::from_str::<Value>(body.trim()) else {
            return body.to_string();
        };
        let unwrapped = match self {
            ResponseEnvelope::Bare => None,
            ResponseEnvelope::Candidates => first_of(&value, "candidates").map(candidate_text),
            ResponseEnvelope::ChatChoices => first_of(&value, "choices").map(choice_text),
        };
        unwrapped.unwrap_or_else(|| body.to_string())
    }
}

fn first_of<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key)?.as_array()?.first()
}

fn candidate_text(candidate: &Value) -> String {
    let content = candidate.get("content").unwrap_or(&Value::Null);
    if let Some(parts) = content.get("parts").and_then(Value::as_array) {
        return parts
            .iter()
            .map(|p| p.get("text").and_then(Value::as_str).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ");
    }
    if let Some(text) = content.get("text").and_then(Value::as_str) {
        return text.to_string();
    }
    content.to_string()
}

fn choice_text(choice: &Value) -> String {
    let text = match choice.get("message").or_else(|| choice.get("text")) {
        Some(Value::Object(message)) => message
            .get("content")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .or_else(|| message.get("text").and_then(Value::as_str))
            .unwrap_or("")
            .to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    if text.is_empty() {
        choice.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_is_identity() {
        assert_eq!(ResponseEnvelope::Bare.unwrap_text("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_candidates_parts_joined() {
        let body = json!({
            "candidates": [
                {"content": {"parts": [{"text": "Hello"}, {"text": "world"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        })
        .to_string();
        assert_eq!(ResponseEnvelope::Candidates.unwrap_text(&body), "Hello world");
    }

    #[test]
    fn test_candidates_content_text() {
        let body = json!({"candidates": [{"content": {"text": "direct"}}]}).to_string();
        assert_eq!(ResponseEnvelope::Candidates.unwrap_text(&body), "direct");
    }

    #[test]
    fn test_chat_choices_message_content() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "{\"answer\": \"x\"}"}}]
        })
        .to_string();
        assert_eq!(
            ResponseEnvelope::ChatChoices.unwrap_text(&body),
            "{\"answer\": \"x\"}"
        );
    }

    #[test]
    fn test_chat_choices_legacy_text() {
        let body = json!({"choices": [{"text": "completion"}]}).to_string();
        assert_eq!(ResponseEnvelope::ChatChoices.unwrap_text(&body), "completion");
    }

    #[test]
    fn test_chat_choices_empty_content_serializes_choice() {
        let body = json!({"choices": [{"message": {"content": ""}}]}).to_string();
        let text = ResponseEnvelope::ChatChoices.unwrap_text(&body);
        assert!(text.contains("\"message\""));
    }

    #[test]
    fn test_missing_envelope_returns_body() {
        let body = "plain text reply";
        assert_eq!(ResponseEnvelope::ChatChoices.unwrap_text(body), body);
        let body = json!({"choices": []}).to_string();
        assert_eq!(ResponseEnvelope::ChatChoices.unwrap_text(&body), body);
    }
}
