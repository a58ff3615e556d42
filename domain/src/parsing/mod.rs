//! Recovery of structured answers from free-form model output.
//!
//! Models are asked to end every reply with a JSON object, but they wrap
//! it in prose, Markdown fences or provider envelopes. Recovery runs in
//! independent stages:
//!
//! | Stage | Function | Failure mode |
//! |-------|----------|--------------|
//! | Envelope unwrapping | [`envelope::ResponseEnvelope::unwrap_text`] | body returned as-is |
//! | Object location | [`json_extract::locate_json_object`] | `None` |
//! | Parse + key check | [`response::parse_response`] | `None` |
//! | URL fallback | [`references::scan_urls`] | empty list |
//!
//! [`extract_answer`] chains them into the answer/reference pair the
//! model adapters return.

pub mod envelope;
pub mod json_extract;
pub mod references;
pub mod response;

use crate::debate::stage::Stage;
use serde::{Deserialize, Serialize};

/// Answer text and candidate reference URLs recovered from one reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedAnswer {
    pub answer: String,
    pub references: Vec<String>,
    /// `true` when a JSON object with the stage's answer key was found
    pub structured: bool,
}

/// Recover the stage answer and references from unwrapped model text.
///
/// When no valid object is found, the whole trimmed text becomes the
/// answer and references come from a URL scan over the same text.
pub fn extract_answer(text: &str, stage: Stage) -> ExtractedAnswer {
    match response::parse_response(text, stage) {
        Some(parsed) => {
            let answer = parsed.answer().trim().to_string();
            ExtractedAnswer {
                answer: if answer.is_empty() {
                    text.trim().to_string()
                } else {
                    answer
                },
                references: parsed.references(),
                structured: true,
            }
        }
        None => ExtractedAnswer {
            answer: text.trim().to_string(),
            references: references::normalize_references(references::scan_urls(text)),
            structured: false,
        },
    }
}
