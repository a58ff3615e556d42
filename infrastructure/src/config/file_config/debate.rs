//! Debate configuration from TOML (`[debate]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use tribunal_application::DebateParams;
use tribunal_domain::ClosingAnnotation;

const ANNOTATION_VALUES: [&str; 3] = ["comparative", "static", "none"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Critique/refinement rounds
    pub rounds: u32,
    pub memory_limit: usize,
    /// Evidence chunks retrieved per stage
    pub evidence_k: usize,
    /// References verified per turn
    pub max_references: usize,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub evidence_excerpt_chars: usize,
    /// "comparative", "static" or "none"
    pub annotation: String,
    /// Text used when `annotation = "static"`
    pub annotation_text: Option<String>,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        let params = DebateParams::default();
        Self {
            rounds: params.rounds,
            memory_limit: params.memory_limit,
            evidence_k: params.evidence_k,
            max_references: params.max_references,
            chunk_size: params.chunk_size,
            chunk_overlap: params.chunk_overlap,
            evidence_excerpt_chars: params.excerpt_chars,
            annotation: "comparative".to_string(),
            annotation_text: None,
        }
    }
}

impl FileDebateConfig {
    /// Parse the annotation setting. Unknown values fall back to none.
    pub fn parse_annotation(&self) -> (ClosingAnnotation, Option<ConfigIssue>) {
        match self.annotation.trim().to_lowercase().as_str() {
            "comparative" => (ClosingAnnotation::Comparative(Default::default()), None),
            "static" => (
                ClosingAnnotation::Static {
                    text: self.annotation_text.clone().unwrap_or_default(),
                },
                None,
            ),
            "none" => (ClosingAnnotation::None, None),
            other => (
                ClosingAnnotation::None,
                Some(ConfigIssue::error(format!(
                    "debate.annotation: unknown value '{}' (expected one of: {})",
                    other,
                    ANNOTATION_VALUES.join(", ")
                ))),
            ),
        }
    }

    pub fn to_params(&self) -> DebateParams {
        DebateParams::default()
            .with_rounds(self.rounds)
            .with_memory_limit(self.memory_limit)
            .with_evidence_k(self.evidence_k)
            .with_chunking(self.chunk_size, self.chunk_overlap)
            .with_max_references(self.max_references)
            .with_excerpt_chars(self.evidence_excerpt_chars)
            .with_annotation(self.parse_annotation().0)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.rounds == 0 {
            issues.push(ConfigIssue::warning(
                "debate.rounds is 0: agents go straight from initial suggestions to final answers",
            ));
        }
        if self.chunk_size == 0 {
            issues.push(ConfigIssue::error("debate.chunk_size cannot be 0"));
        } else if self.chunk_overlap >= self.chunk_size {
            issues.push(ConfigIssue::error(format!(
                "debate.chunk_overlap ({}) must be smaller than debate.chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        issues.extend(self.parse_annotation().1);

        issues
    }
}
