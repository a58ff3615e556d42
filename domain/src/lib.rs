//! Domain layer for tribunal
//!
//! This crate contains the debate protocol's entities, value objects and
//! pure algorithms. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! Two agents (the *proponent* and the *opponent* seat) argue a
//! [`Question`] through a fixed schedule of [`Stage`]s:
//!
//! - **Initial suggestion**: each agent answers independently
//! - **Critique / Refinement** (repeated per round): each agent attacks the
//!   other's latest position, then answers the critique it received
//! - **Finalization**: both agents merge the positions; the best scored
//!   candidate becomes the [`FinalVerdict`]
//!
//! ## References
//!
//! Every reply carries reference URLs. They are verified, scored by source
//! authority and fed into the evidence index that grounds later stages.

pub mod config;
pub mod core;
pub mod debate;
pub mod evidence;
pub mod parsing;
pub mod prompt;
pub mod reference;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, question::Question};
pub use debate::{
    annotation::{BlocComparison, BlocIndicators, ClosingAnnotation, CpiChange},
    entities::{DebateHistory, DebateTurn},
    memory::{AgentMemory, MemoryEntry, MemoryRole},
    scoring::{ScoredCandidate, candidate_score, rank_candidates},
    seat::{AgentPair, Panel, Seat},
    stage::{Stage, StageStep},
    value_objects::{DebateOutcome, FinalOutcome, FinalVerdict, NO_VALID_FINAL_ANSWERS},
};
pub use evidence::{Document, EvidenceChunk, TextSplitter, render_evidence};
pub use parsing::{
    ExtractedAnswer, envelope::ResponseEnvelope, extract_answer, response::parse_response,
};
pub use prompt::{DebatePromptTemplate, NO_PREVIOUS_CRITIQUE, NO_PREVIOUS_SUGGESTION};
pub use reference::{
    authority::AuthorityScorer, domain_name::registrable_domain, entities::VerifiedReference,
};
