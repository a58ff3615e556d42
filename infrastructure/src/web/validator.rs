//! HTTP reference validator
//!
//! HEAD first; reachable URLs are fetched again with GET to capture a
//! content snippet.

use super::{WebSettings, content_type, is_textual};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use tribunal_application::{UrlCheck, UrlValidator};
use tribunal_domain::core::string::take_chars;
use tribunal_domain::reference::domain_name::has_scheme;

pub struct HttpUrlValidator {
    client: Client,
    snippet_chars: usize,
}

impl HttpUrlValidator {
    pub fn new(settings: &WebSettings) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: settings.client()?,
            snippet_chars: settings.snippet_chars,
        })
    }

    async fn snippet(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let content_type = content_type(&response);
        if !is_textual(&content_type) {
            return Ok(format!("Content-Type: {}", content_type));
        }
        let body = response.text().await?;
        Ok(take_chars(&body, self.snippet_chars).to_string())
    }
}

#[async_trait]
impl UrlValidator for HttpUrlValidator {
    async fn validate(&self, url: &str) -> UrlCheck {
        if !has_scheme(url) {
            return UrlCheck::invalid("Invalid URL (no scheme)");
        }

        let head = match self.client.head(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("HEAD {} failed: {}", url, e);
                return UrlCheck::invalid(e.to_string());
            }
        };

        let status = head.status().as_u16();
        if !(200..400).contains(&status) {
            return UrlCheck::invalid(format!("HEAD returned status {}", status));
        }

        match self.snippet(url).await {
            Ok(snippet) => UrlCheck::valid(snippet),
            Err(e) => UrlCheck::valid(format!("Reachable (HEAD OK) but GET failed: {}", e)),
        }
    }
}
