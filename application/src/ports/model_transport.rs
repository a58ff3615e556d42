//! Model transport port
//!
//! Defines the interface for sending one combined prompt to a model
//! provider and getting its raw reply back.

use async_trait::async_trait;
use thiserror::Error;
use tribunal_domain::ResponseEnvelope;

/// Errors that can occur while talking to a provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("{0}")]
    Other(String),
}

/// Raw provider reply: HTTP-style status and unparsed body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport for one model backend
///
/// Implementations own provider-specific request shapes and sampling
/// parameters; response-shape normalization is left to the caller, guided
/// by [`envelope`](ModelTransport::envelope).
#[async_trait]
pub trait ModelTransport: Send + Sync {
    /// Short provider label used in failure markers (e.g. `Gemini`)
    fn name(&self) -> &str;

    /// How the provider wraps model text in its response body
    fn envelope(&self) -> ResponseEnvelope;

    /// Send a combined prompt
    async fn send(&self, prompt: &str) -> Result<TransportResponse, TransportError>;
}
