//! Web access adapters
//!
//! | Adapter | Port | Key Dependency |
//! |---------|------|----------------|
//! | [`HttpUrlValidator`] | `UrlValidator` | `reqwest` |
//! | [`WebDocumentLoader`] | `DocumentLoader` | `reqwest` + `scraper` |

mod html;
pub mod loader;
pub mod validator;

pub use html::html_to_text;
pub use loader::WebDocumentLoader;
pub use validator::HttpUrlValidator;

use reqwest::Client;
use std::time::Duration;
use tribunal_domain::reference::entities::MAX_SNIPPET_CHARS;

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(12);
pub const DEFAULT_USER_AGENT: &str = concat!("tribunal/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP settings for reference validation and document loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSettings {
    pub timeout: Duration,
    /// Characters of page content kept as a reference snippet
    pub snippet_chars: usize,
    pub user_agent: String,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_HTTP_TIMEOUT,
            snippet_chars: MAX_SNIPPET_CHARS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl WebSettings {
    pub fn client(&self) -> Result<Client, reqwest::Error> {
        Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
    }
}

/// Whether a `Content-Type` value should be read as text.
fn is_textual(content_type: &str) -> bool {
    content_type.is_empty() || content_type.contains("text") || content_type.contains("html")
}

fn content_type(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
