//! OpenRouter chat-completions transport (DeepSeek by default)

use super::{ProviderSettings, build_client, map_reqwest_error, read_response};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use tribunal_application::{ModelTransport, TransportError, TransportResponse};
use tribunal_domain::ResponseEnvelope;

pub const DEFAULT_OPENROUTER_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_OPENROUTER_MODEL: &str = "deepseek/deepseek-r1:free";

const REFERER: &str = "http://localhost";
const TITLE: &str = "tribunal";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

pub struct OpenRouterTransport {
    settings: ProviderSettings,
    client: Client,
}

impl OpenRouterTransport {
    /// `settings.base_url` is the full chat-completions endpoint.
    pub fn new(settings: ProviderSettings) -> Result<Self, TransportError> {
        let client = build_client(settings.timeout)?;
        Ok(Self { settings, client })
    }
}

#[async_trait]
impl ModelTransport for OpenRouterTransport {
    fn name(&self) -> &str {
        &self.settings.name
    }

    fn envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope::ChatChoices
    }

    async fn send(&self, prompt: &str) -> Result<TransportResponse, TransportError> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        debug!("Sending request to OpenRouter model {}", self.settings.model);
        let mut builder = self
            .client
            .post(&self.settings.base_url)
            .header("HTTP-Referer", REFERER)
            .header("X-Title", TITLE)
            .json(&request);
        if let Some(key) = self.settings.api_key.as_deref() {
            builder = builder.bearer_auth(key.trim());
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        read_response(response).await
    }
}
