//! Document loading port

use async_trait::async_trait;
use tribunal_domain::Document;

/// Fetches plain-text documents for evidence indexing.
///
/// Failures for individual URLs are logged and skipped; the returned list
/// holds only the documents that loaded.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, urls: &[String]) -> Vec<Document>;
}
