//! Model adapter
//!
//! Turns a [`ModelTransport`] into a uniform `prompt -> (answer, references)`
//! call. Every failure mode comes back as an ordinary reply whose answer is
//! a marker string, so stage execution never branches on transport errors.

use crate::ports::model_transport::{ModelTransport, TransportError};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};
use tribunal_domain::core::string::take_chars;
use tribunal_domain::{DebatePromptTemplate, Stage, extract_answer};

/// Characters of a failed response body kept in the HTTP marker
const ERROR_BODY_CHARS: usize = 800;

/// Normalized result of one model invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterReply {
    /// Extracted answer, or a failure marker
    pub answer: String,
    /// Normalized candidate reference URLs
    pub references: Vec<String>,
    /// Unwrapped model text (equals the marker on failure)
    pub raw: String,
    /// Whether the text carried a well-formed object for the stage
    pub structured: bool,
    /// Whether the answer is a failure marker rather than model output
    pub failed: bool,
}

impl AdapterReply {
    fn marker(text: String) -> Self {
        Self {
            answer: text.clone(),
            references: Vec::new(),
            raw: text,
            structured: false,
            failed: true,
        }
    }

    /// Placeholder recorded when an invocation did not produce a reply at all.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::marker(format!("[Error] {}", message))
    }
}

pub struct ModelAdapter {
    transport: Arc<dyn ModelTransport>,
    timeout: Duration,
}

impl ModelAdapter {
    pub fn new(transport: Arc<dyn ModelTransport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    pub fn name(&self) -> &str {
        self.transport.name()
    }

    pub fn timeout_marker(&self) -> String {
        format!("[{} Timeout]", self.name())
    }

    /// Send `prompt` with the stage preamble and normalize the reply.
    pub async fn invoke(&self, prompt: &str, stage: Stage) -> AdapterReply {
        let name = self.name();
        let combined =
            DebatePromptTemplate::combine(&DebatePromptTemplate::preamble(name, stage), prompt);

        debug!("{} invoking {} ({} chars)", name, stage, combined.len());

        let response = match timeout(self.timeout, self.transport.send(&combined)).await {
            Err(_) | Ok(Err(TransportError::Timeout)) => {
                warn!("{} timed out after {:?}", name, self.timeout);
                return AdapterReply::marker(self.timeout_marker());
            }
            Ok(Err(e)) => {
                warn!("{} transport failed: {}", name, e);
                return AdapterReply::marker(format!("[{} Exception] {}", name, e));
            }
            Ok(Ok(response)) => response,
        };

        if !response.is_success() {
            warn!("{} returned HTTP {}", name, response.status);
            return AdapterReply::marker(format!(
                "[{} HTTP {}] {}",
                name,
                response.status,
                take_chars(&response.body, ERROR_BODY_CHARS)
            ));
        }

        let text = self.transport.envelope().unwrap_text(&response.body);
        let extracted = extract_answer(&text, stage);
        if !extracted.structured {
            debug!("{} reply for {} had no usable JSON object", name, stage);
        }

        AdapterReply {
            answer: extracted.answer,
            references: extracted.references,
            raw: text,
            structured: extracted.structured,
            failed: false,
        }
    }
}
