//! Similarity backend port
//!
//! The evidence index delegates storage and ranking of chunks to this
//! backend. Implementations may embed, tokenize or call out to a vector
//! store; the contract is append-then-query.

use async_trait::async_trait;
use thiserror::Error;
use tribunal_domain::EvidenceChunk;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Indexing failed: {0}")]
    Indexing(String),

    #[error("Query failed: {0}")]
    Query(String),
}

#[async_trait]
pub trait SimilarityIndex: Send + Sync {
    /// Add chunks, returning how many were stored.
    async fn index(&self, chunks: Vec<EvidenceChunk>) -> Result<usize, IndexError>;

    /// The `k` chunks most relevant to `text`, best first.
    async fn query(&self, text: &str, k: usize) -> Result<Vec<EvidenceChunk>, IndexError>;
}
