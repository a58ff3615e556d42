//! The debate protocol's domain model.
//!
//! - [`stage`] - protocol stages and the per-stage answer key
//! - [`seat`] - the two fixed participants and structural opponent lookup
//! - [`entities`] - [`DebateTurn`](entities::DebateTurn) and the append-only
//!   [`DebateHistory`](entities::DebateHistory)
//! - [`memory`] - bounded per-agent conversational memory
//! - [`scoring`] - finalization score and stable ranking
//! - [`annotation`] - closing text attached to the selected answer
//! - [`value_objects`] - final verdict and run outcome

pub mod annotation;
pub mod entities;
pub mod memory;
pub mod scoring;
pub mod seat;
pub mod stage;
pub mod value_objects;
