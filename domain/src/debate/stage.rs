//! Debate stages and their answer keys.

use serde::{Deserialize, Serialize};

/// One phase of the fixed debate protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Each agent proposes a standalone answer
    InitialSuggestion,
    /// Each agent attacks the opponent's latest answer
    Critique,
    /// Each agent answers the opponent's critique
    Refinement,
    /// Each agent merges both positions into a final answer
    Finalization,
}

impl Stage {
    /// JSON key a model must use for its answer at this stage.
    pub fn answer_key(&self) -> &'static str {
        match self {
            Stage::InitialSuggestion | Stage::Refinement => "answer",
            Stage::Critique => "critique",
            Stage::Finalization => "final_answer",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::InitialSuggestion => "initial_suggestion",
            Stage::Critique => "critique",
            Stage::Refinement => "refinement",
            Stage::Finalization => "finalization",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::InitialSuggestion => "Initial Suggestion",
            Stage::Critique => "Critique",
            Stage::Refinement => "Refinement",
            Stage::Finalization => "Finalization",
        }
    }

    /// Whether turns at this stage carry a round number (1..N).
    pub fn is_rounded(&self) -> bool {
        matches!(self, Stage::Critique | Stage::Refinement)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A concrete step of a debate run: a stage plus its round number.
///
/// Rounds are 0 for [`Stage::InitialSuggestion`] and [`Stage::Finalization`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StageStep {
    pub stage: Stage,
    pub round: u32,
}

impl StageStep {
    pub fn new(stage: Stage, round: u32) -> Self {
        let round = if stage.is_rounded() { round } else { 0 };
        Self { stage, round }
    }

    /// The full, strictly ordered step sequence for a debate with `rounds`
    /// critique/refinement pairs.
    pub fn schedule(rounds: u32) -> Vec<StageStep> {
        let mut steps = vec![StageStep::new(Stage::InitialSuggestion, 0)];
        for round in 1..=rounds {
            steps.push(StageStep::new(Stage::Critique, round));
            steps.push(StageStep::new(Stage::Refinement, round));
        }
        steps.push(StageStep::new(Stage::Finalization, 0));
        steps
    }
}

impl std::fmt::Display for StageStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.stage.is_rounded() {
            write!(f, "{} Round {}", self.stage, self.round)
        } else {
            write!(f, "{}", self.stage)
        }
    }
}
