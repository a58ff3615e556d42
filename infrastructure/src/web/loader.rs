//! Web document loader
//!
//! Fetches reference pages one at a time and converts HTML to plain text.

use super::{WebSettings, content_type, html_to_text, is_textual};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use tribunal_application::DocumentLoader;
use tribunal_domain::Document;

pub struct WebDocumentLoader {
    client: Client,
}

impl WebDocumentLoader {
    pub fn new(settings: &WebSettings) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: settings.client()?,
        })
    }

    async fn fetch(&self, url: &str) -> Result<Option<Document>, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let content_type = content_type(&response);
        if !is_textual(&content_type) {
            debug!("Skipping {} with content type {}", url, content_type);
            return Ok(None);
        }

        let body = response.text().await?;
        let text = if content_type.contains("html") || content_type.is_empty() {
            html_to_text(&body)
        } else {
            body
        };
        Ok(Some(Document::new(url, text)))
    }
}

#[async_trait]
impl DocumentLoader for WebDocumentLoader {
    async fn load(&self, urls: &[String]) -> Vec<Document> {
        let mut documents = Vec::with_capacity(urls.len());
        for url in urls {
            debug!("Loading URL: {}", url);
            match self.fetch(url).await {
                Ok(Some(document)) => documents.push(document),
                Ok(None) => {}
                Err(e) => warn!("Error loading {}: {}", url, e),
            }
        }
        documents
    }
}
