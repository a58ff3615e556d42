//! Output rendering for finished debates
//!
//! Console and Markdown output walk the history in the same section order:
//! initial suggestions, then critique and refinement per round.

pub mod console;
pub mod formatter;
pub mod transcript;

use tribunal_domain::{DebateHistory, DebateTurn, Stage};

/// A titled group of turns from one stage and round
pub struct Section<'a> {
    pub title: String,
    pub stage: Stage,
    pub turns: Vec<&'a DebateTurn>,
}

/// Group `history` into display sections. Finalization turns are left out;
/// the selected final answer is rendered separately.
pub fn sections(history: &DebateHistory) -> Vec<Section<'_>> {
    let mut out = vec![Section {
        title: "Initial Suggestions".to_string(),
        stage: Stage::InitialSuggestion,
        turns: history.at(Stage::InitialSuggestion, 0).collect(),
    }];

    for round in 1..=history.max_round() {
        for stage in [Stage::Critique, Stage::Refinement] {
            out.push(Section {
                title: format!("{} Round {}", stage.display_name(), round),
                stage,
                turns: history.at(stage, round).collect(),
            });
        }
    }

    out
}

/// Verb used when introducing a turn on the console.
pub(crate) fn stage_verb(stage: Stage) -> &'static str {
    match stage {
        Stage::InitialSuggestion => "suggests",
        Stage::Critique => "critiques",
        Stage::Refinement => "refines",
        Stage::Finalization => "concludes",
    }
}
