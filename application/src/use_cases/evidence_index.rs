//! Evidence index
//!
//! Retrieval glue over a [`SimilarityIndex`]: valid references are fetched,
//! split into overlapping chunks and appended to the backend. The index only
//! grows during a run.

use crate::ports::document_loader::DocumentLoader;
use crate::ports::similarity_index::SimilarityIndex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};
use tribunal_domain::{EvidenceChunk, TextSplitter, VerifiedReference};

pub struct EvidenceIndex {
    loader: Arc<dyn DocumentLoader>,
    backend: Arc<dyn SimilarityIndex>,
    splitter: TextSplitter,
    initialized: AtomicBool,
}

impl EvidenceIndex {
    pub fn new(
        loader: Arc<dyn DocumentLoader>,
        backend: Arc<dyn SimilarityIndex>,
        splitter: TextSplitter,
    ) -> Self {
        Self {
            loader,
            backend,
            splitter,
            initialized: AtomicBool::new(false),
        }
    }

    /// Whether any document has been indexed yet.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Index the documents behind the valid references.
    ///
    /// Returns `true` when at least one document was indexed. A document
    /// that fails to index does not abort the rest of the batch.
    pub async fn add_evidence(&self, references: &[VerifiedReference]) -> bool {
        let urls: Vec<String> = references
            .iter()
            .filter(|r| r.valid)
            .map(|r| r.url.clone())
            .collect();
        if urls.is_empty() {
            debug!("No valid URLs for evidence");
            return false;
        }

        debug!("Loading {} URLs for evidence", urls.len());
        let documents = self.loader.load(&urls).await;
        if documents.is_empty() {
            debug!("No documents loaded for evidence");
            return false;
        }

        let mut indexed_documents = 0;
        for document in &documents {
            let chunks = self.splitter.split(document);
            if chunks.is_empty() {
                debug!("Document {} produced no chunks", document.source);
                continue;
            }
            match self.backend.index(chunks).await {
                Ok(count) => {
                    debug!("Indexed {} chunks from {}", count, document.source);
                    indexed_documents += 1;
                }
                Err(e) => warn!("Failed to index {}: {}", document.source, e),
            }
        }

        if indexed_documents == 0 {
            return false;
        }
        if !self.initialized.swap(true, Ordering::AcqRel) {
            info!("Evidence index initialized");
        }
        true
    }

    /// The `k` most relevant chunks; empty until the first successful
    /// [`add_evidence`](Self::add_evidence).
    pub async fn query(&self, text: &str, k: usize) -> Vec<EvidenceChunk> {
        if !self.is_initialized() {
            debug!("Evidence index not initialized; no evidence for query");
            return Vec::new();
        }
        match self.backend.query(text, k).await {
            Ok(chunks) => chunks,
            Err(e) => {
                warn!("Evidence query failed: {}", e);
                Vec::new()
            }
        }
    }
}
