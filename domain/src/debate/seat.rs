//! Agent identity within a two-agent debate.
//!
//! A debate always has exactly two participants. Each one occupies a
//! [`Seat`], and the opponent of a seat is the other seat, so opponent
//! resolution never depends on matching display names.

use serde::{Deserialize, Serialize};

/// Position of an agent in the debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Proponent,
    Opponent,
}

impl Seat {
    /// Both seats in iteration order.
    pub const BOTH: [Seat; 2] = [Seat::Proponent, Seat::Opponent];

    /// The other seat.
    pub fn opponent(self) -> Seat {
        match self {
            Seat::Proponent => Seat::Opponent,
            Seat::Opponent => Seat::Proponent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Seat::Proponent => "proponent",
            Seat::Opponent => "opponent",
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exactly one value per seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPair<T> {
    pub proponent: T,
    pub opponent: T,
}

impl<T> AgentPair<T> {
    pub fn new(proponent: T, opponent: T) -> Self {
        Self {
            proponent,
            opponent,
        }
    }

    pub fn get(&self, seat: Seat) -> &T {
        match seat {
            Seat::Proponent => &self.proponent,
            Seat::Opponent => &self.opponent,
        }
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        match seat {
            Seat::Proponent => &mut self.proponent,
            Seat::Opponent => &mut self.opponent,
        }
    }

    /// Iterate in seat order, paired with the seat.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::BOTH.into_iter().map(move |seat| (seat, self.get(seat)))
    }

    pub fn map<U>(self, mut f: impl FnMut(Seat, T) -> U) -> AgentPair<U> {
        AgentPair {
            proponent: f(Seat::Proponent, self.proponent),
            opponent: f(Seat::Opponent, self.opponent),
        }
    }
}

/// Display names of the two debaters.
pub type Panel = AgentPair<String>;
