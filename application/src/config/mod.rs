//! Application-level configuration.
//!
//! - [`DebateParams`] - protocol rounds, memory and evidence settings

pub mod debate_params;

pub use debate_params::DebateParams;
