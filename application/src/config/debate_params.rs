//! Debate parameters - protocol and evidence tuning.
//!
//! [`DebateParams`] groups the static values that control a run of
//! [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase).
//! They are passed in at construction; nothing reads ambient state.

use serde::{Deserialize, Serialize};
use tribunal_domain::ClosingAnnotation;
use tribunal_domain::debate::memory::DEFAULT_MEMORY_LIMIT;
use tribunal_domain::evidence::chunk::{
    DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_EXCERPT_CHARS,
};
use tribunal_domain::parsing::references::MAX_CANDIDATE_REFERENCES;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateParams {
    /// Number of critique/refinement rounds
    pub rounds: u32,
    /// Per-agent memory capacity
    pub memory_limit: usize,
    /// Evidence chunks retrieved per stage
    pub evidence_k: usize,
    /// References verified per turn
    pub max_references: usize,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    /// Characters of each evidence chunk placed in a prompt
    pub excerpt_chars: usize,
    /// Text appended to the selected final answer
    pub annotation: ClosingAnnotation,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            rounds: 1,
            memory_limit: DEFAULT_MEMORY_LIMIT,
            evidence_k: 3,
            max_references: MAX_CANDIDATE_REFERENCES,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            annotation: ClosingAnnotation::Comparative(Default::default()),
        }
    }
}

impl DebateParams {
    // ==================== Builder Methods ====================

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_memory_limit(mut self, limit: usize) -> Self {
        self.memory_limit = limit;
        self
    }

    pub fn with_evidence_k(mut self, k: usize) -> Self {
        self.evidence_k = k;
        self
    }

    pub fn with_chunking(mut self, size: usize, overlap: usize) -> Self {
        self.chunk_size = size;
        self.chunk_overlap = overlap;
        self
    }

    pub fn with_max_references(mut self, max: usize) -> Self {
        self.max_references = max;
        self
    }

    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }

    pub fn with_annotation(mut self, annotation: ClosingAnnotation) -> Self {
        self.annotation = annotation;
        self
    }
}
