//! Model provider transports
//!
//! Each transport sends one combined prompt over HTTP and returns the raw
//! status and body. Response-shape normalization is left to the model
//! adapter in the application layer.

pub mod gemini;
pub mod openrouter;

pub use gemini::GeminiTransport;
pub use openrouter::OpenRouterTransport;

use reqwest::Client;
use std::time::Duration;
use tribunal_application::TransportError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection and sampling settings for one provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// Label shown in transcripts and failure markers
    pub name: String,
    /// Missing keys are sent anyway; the provider answers with an HTTP error
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

fn build_client(timeout: Duration) -> Result<Client, TransportError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .build()
        .map_err(|e| TransportError::Other(format!("failed to create HTTP client: {}", e)))
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::Connection(e.to_string())
    } else {
        TransportError::Other(e.to_string())
    }
}

async fn read_response(response: reqwest::Response) -> Result<tribunal_application::TransportResponse, TransportError> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(map_reqwest_error)?;
    Ok(tribunal_application::TransportResponse::new(status, body))
}
