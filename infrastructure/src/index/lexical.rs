//! In-memory lexical similarity index.
//!
//! Self-contained: no embedding model or network calls. Relevance is the
//! share of distinct query tokens that also occur in a chunk, which is
//! enough to rank evidence for a single debate question.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::RwLock;
use tribunal_application::{IndexError, SimilarityIndex};
use tribunal_domain::EvidenceChunk;

const MIN_TOKEN_CHARS: usize = 2;

struct IndexedChunk {
    tokens: BTreeSet<String>,
    chunk: EvidenceChunk,
}

/// Append-only chunk store ranked by token overlap
#[derive(Default)]
pub struct LexicalIndex {
    entries: RwLock<Vec<IndexedChunk>>,
}

impl LexicalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lower-cased alphanumeric runs of at least two characters, deduplicated.
fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
        .collect()
}

fn overlap(query: &BTreeSet<String>, chunk: &BTreeSet<String>) -> f32 {
    if query.is_empty() {
        return 0.0;
    }
    query.intersection(chunk).count() as f32 / query.len() as f32
}

#[async_trait]
impl SimilarityIndex for LexicalIndex {
    async fn index(&self, chunks: Vec<EvidenceChunk>) -> Result<usize, IndexError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| IndexError::Indexing("index lock poisoned".to_string()))?;
        let count = chunks.len();
        entries.extend(chunks.into_iter().map(|chunk| IndexedChunk {
            tokens: tokenize(&chunk.text),
            chunk,
        }));
        Ok(count)
    }

    async fn query(&self, text: &str, k: usize) -> Result<Vec<EvidenceChunk>, IndexError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| IndexError::Query("index lock poisoned".to_string()))?;
        let query = tokenize(text);

        let mut scored: Vec<(f32, usize)> = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (overlap(&query, &entry.tokens), position))
            .collect();
        // stable: insertion order breaks ties
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(_, position)| entries[position].chunk.clone())
            .collect())
    }
}
