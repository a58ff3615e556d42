//! Gemini `generateContent` transport

use super::{ProviderSettings, build_client, map_reqwest_error, read_response};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use tribunal_application::{ModelTransport, TransportError, TransportResponse};
use tribunal_domain::ResponseEnvelope;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

pub struct GeminiTransport {
    settings: ProviderSettings,
    client: Client,
}

impl GeminiTransport {
    pub fn new(settings: ProviderSettings) -> Result<Self, TransportError> {
        let client = build_client(settings.timeout)?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }
}

#[async_trait]
impl ModelTransport for GeminiTransport {
    fn name(&self) -> &str {
        &self.settings.name
    }

    fn envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope::Candidates
    }

    async fn send(&self, prompt: &str) -> Result<TransportResponse, TransportError> {
        let request = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                top_p: self.settings.top_p,
                max_output_tokens: self.settings.max_tokens,
            },
        };

        debug!("Sending request to Gemini model {}", self.settings.model);
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.settings.api_key.as_deref().unwrap_or_default())])
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        read_response(response).await
    }
}
