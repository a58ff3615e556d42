//! URL validation port

use async_trait::async_trait;

/// Outcome of checking one reference URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCheck {
    pub valid: bool,
    /// Leading page content, or a description of the failure
    pub snippet: String,
}

impl UrlCheck {
    pub fn valid(snippet: impl Into<String>) -> Self {
        Self {
            valid: true,
            snippet: snippet.into(),
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            snippet: reason.into(),
        }
    }
}

/// Liveness and snippet retrieval for reference URLs.
///
/// Infallible by contract: any internal failure is reported as an invalid
/// [`UrlCheck`] carrying the error text.
#[async_trait]
pub trait UrlValidator: Send + Sync {
    async fn validate(&self, url: &str) -> UrlCheck;
}
