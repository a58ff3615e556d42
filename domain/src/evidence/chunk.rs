use crate::core::string::take_chars;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;
/// Characters of each chunk included in prompt evidence.
pub const DEFAULT_EXCERPT_CHARS: usize = 500;

/// Plain text fetched from a reference URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub source: String,
    pub text: String,
}

impl Document {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// Bounded span of a document tagged with its source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceChunk {
    pub source: String,
    pub text: String,
    /// Character offset of the chunk within its document
    pub offset: usize,
}

/// Deterministic sliding-window splitter over characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSplitter {
    chunk_size: usize,
    overlap: usize,
}

impl TextSplitter {
    /// `overlap` is clamped below `chunk_size` so the window always advances.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            overlap: overlap.min(chunk_size - 1),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Split one document. Whitespace-only windows are dropped.
    pub fn split(&self, document: &Document) -> Vec<EvidenceChunk> {
        let chars: Vec<char> = document.text.chars().collect();
        let step = self.chunk_size - self.overlap;
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let end = (start + self.chunk_size).min(chars.len());
            let text: String = chars[start..end].iter().collect();
            if !text.trim().is_empty() {
                chunks.push(EvidenceChunk {
                    source: document.source.clone(),
                    text,
                    offset: start,
                });
            }
            if end == chars.len() {
                break;
            }
            start += step;
        }
        chunks
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

/// Prompt rendering of retrieved evidence: each chunk cut to
/// `excerpt_chars`, one per line.
pub fn render_evidence(chunks: &[EvidenceChunk], excerpt_chars: usize) -> String {
    chunks
        .iter()
        .map(|c| take_chars(&c.text, excerpt_chars))
        .collect::<Vec<_>>()
        .join("\n")
}
