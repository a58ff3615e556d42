//! Debate turn records and the append-only history.

use super::seat::Seat;
use super::stage::Stage;
use crate::reference::entities::VerifiedReference;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One agent's recorded contribution at a given stage/round (Entity)
///
/// Created once per stage execution and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateTurn {
    pub seat: Seat,
    /// Display name of the agent at the time of the turn
    pub agent: String,
    pub stage: Stage,
    /// 0 for initial suggestion and finalization, 1..N otherwise
    pub round: u32,
    /// Extracted answer text
    pub answer: String,
    /// Model text before answer extraction, kept for audit
    pub raw_response: String,
    pub references: Vec<VerifiedReference>,
    /// Whether the model produced a well-formed object for this stage
    pub structured: bool,
    pub created_at: DateTime<Utc>,
}

impl DebateTurn {
    pub fn new(
        seat: Seat,
        agent: impl Into<String>,
        stage: Stage,
        round: u32,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            seat,
            agent: agent.into(),
            stage,
            round: if stage.is_rounded() { round } else { 0 },
            answer: answer.into(),
            raw_response: String::new(),
            references: Vec::new(),
            structured: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_raw_response(mut self, raw: impl Into<String>) -> Self {
        self.raw_response = raw.into();
        self
    }

    pub fn with_references(mut self, references: Vec<VerifiedReference>) -> Self {
        self.references = references;
        self
    }

    pub fn with_structured(mut self, structured: bool) -> Self {
        self.structured = structured;
        self
    }

    /// References that passed liveness validation.
    pub fn valid_references(&self) -> impl Iterator<Item = &VerifiedReference> {
        self.references.iter().filter(|r| r.valid)
    }
}

/// Ordered, append-only log of turns for one debate run.
///
/// Insertion order is significant: lookups scan in reverse to find the
/// most recent matching turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebateHistory {
    turns: Vec<DebateTurn>,
}

impl DebateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: DebateTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[DebateTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DebateTurn> {
        self.turns.iter()
    }

    /// Most recent turn by `seat` at `stage`.
    pub fn last_turn(&self, seat: Seat, stage: Stage) -> Option<&DebateTurn> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.seat == seat && t.stage == stage)
    }

    /// Most recent turn by `seat` at any of `stages`.
    pub fn last_turn_in(&self, seat: Seat, stages: &[Stage]) -> Option<&DebateTurn> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.seat == seat && stages.contains(&t.stage))
    }

    /// Most recent critique by `seat` in `round`.
    pub fn critique_in_round(&self, seat: Seat, round: u32) -> Option<&DebateTurn> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.seat == seat && t.stage == Stage::Critique && t.round == round)
    }

    /// Turns recorded at `stage` in `round`, in insertion order.
    pub fn at(&self, stage: Stage, round: u32) -> impl Iterator<Item = &DebateTurn> {
        self.turns
            .iter()
            .filter(move |t| t.stage == stage && t.round == round)
    }

    /// Highest critique/refinement round present.
    pub fn max_round(&self) -> u32 {
        self.turns
            .iter()
            .filter(|t| t.stage.is_rounded())
            .map(|t| t.round)
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a DebateHistory {
    type Item = &'a DebateTurn;
    type IntoIter = std::slice::Iter<'a, DebateTurn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(seat: Seat, stage: Stage, round: u32, answer: &str) -> DebateTurn {
        DebateTurn::new(seat, seat.as_str(), stage, round, answer)
    }

    #[test]
    fn test_last_suggestion_is_chronologically_last() {
        let mut history = DebateHistory::new();
        history.push(turn(Seat::Proponent, Stage::InitialSuggestion, 0, "A initial"));
        history.push(turn(Seat::Opponent, Stage::InitialSuggestion, 0, "B initial"));
        history.push(turn(Seat::Proponent, Stage::Refinement, 1, "A refine"));

        let found = history
            .last_turn_in(
                Seat::Proponent,
                &[Stage::InitialSuggestion, Stage::Refinement],
            )
            .unwrap();
        assert_eq!(found.answer, "A refine");

        let found = history
            .last_turn_in(Seat::Opponent, &[Stage::InitialSuggestion, Stage::Refinement])
            .unwrap();
        assert_eq!(found.answer, "B initial");
    }

    #[test]
    fn test_last_turn_by_stage() {
        let mut history = DebateHistory::new();
        history.push(turn(Seat::Proponent, Stage::Refinement, 1, "r1"));
        history.push(turn(Seat::Proponent, Stage::Refinement, 2, "r2"));
        assert_eq!(
            history.last_turn(Seat::Proponent, Stage::Refinement).unwrap().answer,
            "r2"
        );
        assert!(history.last_turn(Seat::Opponent, Stage::Refinement).is_none());
    }

    #[test]
    fn test_critique_lookup_by_round() {
        let mut history = DebateHistory::new();
        history.push(turn(Seat::Opponent, Stage::Critique, 1, "c1"));
        history.push(turn(Seat::Opponent, Stage::Critique, 2, "c2"));
        assert_eq!(history.critique_in_round(Seat::Opponent, 1).unwrap().answer, "c1");
        assert_eq!(history.critique_in_round(Seat::Opponent, 2).unwrap().answer, "c2");
        assert!(history.critique_in_round(Seat::Opponent, 3).is_none());
        assert!(history.critique_in_round(Seat::Proponent, 1).is_none());
    }

    #[test]
    fn test_max_round_and_at() {
        let mut history = DebateHistory::new();
        assert_eq!(history.max_round(), 0);
        history.push(turn(Seat::Proponent, Stage::InitialSuggestion, 0, "i"));
        history.push(turn(Seat::Proponent, Stage::Critique, 2, "c"));
        history.push(turn(Seat::Opponent, Stage::Critique, 2, "c"));
        assert_eq!(history.max_round(), 2);
        assert_eq!(history.at(Stage::Critique, 2).count(), 2);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_unrounded_turn_has_round_zero() {
        let t = turn(Seat::Proponent, Stage::Finalization, 7, "f");
        assert_eq!(t.round, 0);
    }
}
