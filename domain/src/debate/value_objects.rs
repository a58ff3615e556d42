//! Debate result value objects.
//!
//! - [`FinalVerdict`] - the selected final answer with its score
//! - [`FinalOutcome`] - verdict, "no valid answers", or run failure
//! - [`DebateOutcome`] - history plus final outcome of a complete run

use super::entities::DebateHistory;
use super::scoring::ScoredCandidate;
use super::seat::{Panel, Seat};
use crate::core::string::take_chars;
use crate::reference::entities::VerifiedReference;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result text when no finalization produced a usable answer.
pub const NO_VALID_FINAL_ANSWERS: &str = "No valid final answers produced";

const SNIPPET_PREVIEW_CHARS: usize = 200;

/// The winning final answer (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalVerdict {
    pub seat: Seat,
    pub agent: String,
    pub answer: String,
    pub score: f64,
    pub selected_at: DateTime<Utc>,
    /// Only the references that passed validation
    pub references: Vec<VerifiedReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl FinalVerdict {
    pub fn from_candidate(candidate: ScoredCandidate, annotation: Option<String>) -> Self {
        Self {
            seat: candidate.seat,
            agent: candidate.agent,
            answer: candidate.answer,
            score: candidate.score,
            selected_at: Utc::now(),
            references: candidate.references.into_iter().filter(|r| r.valid).collect(),
            annotation,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "FINAL ANSWER (Score: {:.1})\nTimestamp: {}\n\n{}\n\n",
            self.score,
            self.selected_at.format("%a %b %e %H:%M:%S %Y"),
            self.answer
        );
        if let Some(annotation) = &self.annotation {
            out.push_str(annotation);
            out.push_str("\n\n");
        }
        out.push_str("VERIFIED REFERENCES:\n");
        for reference in &self.references {
            out.push_str(&format!(
                "- {} (Domain: {}, Authority: {}/3)\n  {}...\n",
                reference.url,
                reference.domain,
                reference.authority_score,
                take_chars(&reference.snippet, SNIPPET_PREVIEW_CHARS)
            ));
        }
        out
    }
}

/// How a debate run ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FinalOutcome {
    Selected(FinalVerdict),
    NoValidAnswers,
    Failed { error: String },
}

impl FinalOutcome {
    pub fn failed(error: impl std::fmt::Display) -> Self {
        FinalOutcome::Failed {
            error: format!("[Error] Debate failed: {}", error),
        }
    }

    pub fn verdict(&self) -> Option<&FinalVerdict> {
        match self {
            FinalOutcome::Selected(verdict) => Some(verdict),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        match self {
            FinalOutcome::Selected(verdict) => verdict.render(),
            FinalOutcome::NoValidAnswers => NO_VALID_FINAL_ANSWERS.to_string(),
            FinalOutcome::Failed { error } => error.clone(),
        }
    }
}

/// Everything a debate run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateOutcome {
    pub question: String,
    pub panel: Panel,
    pub history: DebateHistory,
    #[serde(rename = "final")]
    pub final_outcome: FinalOutcome,
}

impl DebateOutcome {
    pub fn new(
        question: impl Into<String>,
        panel: Panel,
        history: DebateHistory,
        final_outcome: FinalOutcome,
    ) -> Self {
        Self {
            question: question.into(),
            panel,
            history,
            final_outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.final_outcome, FinalOutcome::Selected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> ScoredCandidate {
        ScoredCandidate {
            seat: Seat::Opponent,
            agent: "DeepSeek".to_string(),
            answer: "Merged answer.".to_string(),
            references: vec![
                VerifiedReference::new(
                    "https://arxiv.org/abs/1",
                    true,
                    &"s".repeat(500),
                    "arxiv.org",
                    3,
                ),
                VerifiedReference::new("https://dead.example", false, "timeout", "dead.example", 1),
            ],
            score: 1234.56,
        }
    }

    #[test]
    fn test_verdict_keeps_only_valid_references() {
        let verdict = FinalVerdict::from_candidate(candidate(), None);
        assert_eq!(verdict.references.len(), 1);
        assert_eq!(verdict.references[0].domain, "arxiv.org");
    }

    #[test]
    fn test_verdict_render() {
        let verdict = FinalVerdict::from_candidate(candidate(), Some("Static note.".to_string()));
        let text = verdict.render();
        assert!(text.starts_with("FINAL ANSWER (Score: 1234.6)\nTimestamp: "));
        assert!(text.contains("Merged answer.\n\nStatic note.\n\nVERIFIED REFERENCES:\n"));
        assert!(text.contains("- https://arxiv.org/abs/1 (Domain: arxiv.org, Authority: 3/3)"));
        assert!(text.contains(&format!("  {}...\n", "s".repeat(200))));
        assert!(!text.contains("dead.example"));
    }

    #[test]
    fn test_outcome_render() {
        assert_eq!(FinalOutcome::NoValidAnswers.render(), NO_VALID_FINAL_ANSWERS);
        assert_eq!(
            FinalOutcome::failed("boom").render(),
            "[Error] Debate failed: boom"
        );
    }

    #[test]
    fn test_outcome_serializes_status() {
        let json = serde_json::to_value(FinalOutcome::NoValidAnswers).unwrap();
        assert_eq!(json["status"], "no_valid_answers");
    }
}
