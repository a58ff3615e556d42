//! Finalization scoring and candidate selection.
//!
//! ```text
//! score = min(words, 1000) * 0.2
//!       + valid_reference_count * 300
//!       + Σ authority_score * 100        (over ALL references)
//! ```
//!
//! The authority term deliberately sums over every reference, valid or
//! not, while the count term only counts valid ones. This asymmetry is
//! kept so scores stay reproducible across implementations, but it
//! likely over-rewards dead links from high-authority domains.

use super::entities::DebateTurn;
use super::seat::Seat;
use crate::core::string::word_count;
use crate::reference::entities::{VerifiedReference, count_valid};
use serde::{Deserialize, Serialize};

pub const WORD_CAP: usize = 1000;
pub const WORD_WEIGHT: f64 = 0.2;
pub const VALID_REFERENCE_WEIGHT: f64 = 300.0;
pub const AUTHORITY_WEIGHT: f64 = 100.0;

/// Score one final answer.
pub fn candidate_score(answer: &str, references: &[VerifiedReference]) -> f64 {
    let words = word_count(answer).min(WORD_CAP) as f64 * WORD_WEIGHT;
    let valid = count_valid(references) as f64 * VALID_REFERENCE_WEIGHT;
    let authority: f64 = references
        .iter()
        .map(|r| f64::from(r.authority_score) * AUTHORITY_WEIGHT)
        .sum();
    words + valid + authority
}

/// A finalization turn together with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub seat: Seat,
    pub agent: String,
    pub answer: String,
    pub references: Vec<VerifiedReference>,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn from_turn(turn: &DebateTurn) -> Self {
        Self {
            seat: turn.seat,
            agent: turn.agent.clone(),
            answer: turn.answer.clone(),
            references: turn.references.clone(),
            score: candidate_score(&turn.answer, &turn.references),
        }
    }
}

/// Score candidates and order them best first.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_candidates<'a>(turns: impl IntoIterator<Item = &'a DebateTurn>) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> =
        turns.into_iter().map(ScoredCandidate::from_turn).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::stage::Stage;

    fn reference(valid: bool, authority: u8) -> VerifiedReference {
        VerifiedReference::new("https://x.org", valid, "", "x.org", authority)
    }

    fn final_turn(seat: Seat, answer: &str, references: Vec<VerifiedReference>) -> DebateTurn {
        DebateTurn::new(seat, seat.as_str(), Stage::Finalization, 0, answer)
            .with_references(references)
    }

    #[test]
    fn test_score_formula() {
        let refs = vec![reference(true, 3), reference(false, 2)];
        // 5 words * 0.2 + 1 valid * 300 + (3 + 2) * 100
        assert_eq!(candidate_score("one two three four five", &refs), 801.0);
    }

    #[test]
    fn test_word_term_is_capped() {
        let long = "word ".repeat(5000);
        assert_eq!(candidate_score(&long, &[]), 200.0);
    }

    #[test]
    fn test_each_valid_reference_adds_exactly_300() {
        let answer = "fixed answer text";
        let mut refs = vec![reference(true, 1)];
        let before = candidate_score(answer, &refs);
        // swap an invalid reference for a valid one with the same authority
        refs.push(reference(false, 2));
        let with_invalid = candidate_score(answer, &refs);
        refs.pop();
        refs.push(reference(true, 2));
        let with_valid = candidate_score(answer, &refs);
        assert!((with_valid - with_invalid - 300.0).abs() < 1e-9);
        assert!(with_valid > before);
    }

    #[test]
    fn test_rank_orders_descending() {
        let turns = vec![
            final_turn(Seat::Proponent, "short", vec![]),
            final_turn(Seat::Opponent, "short", vec![reference(true, 1)]),
        ];
        let ranked = rank_candidates(&turns);
        assert_eq!(ranked[0].seat, Seat::Opponent);
        assert_eq!(ranked[1].seat, Seat::Proponent);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let turns = vec![
            final_turn(Seat::Proponent, "same words", vec![]),
            final_turn(Seat::Opponent, "same words", vec![]),
        ];
        let ranked = rank_candidates(&turns);
        assert_eq!(ranked[0].seat, Seat::Proponent);
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_candidates(&Vec::<DebateTurn>::new()).is_empty());
    }
}
