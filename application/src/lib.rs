//! Application layer for tribunal
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DebateParams;
pub use ports::{
    debate_logger::{DebateEvent, DebateLogger, NoDebateLogger},
    document_loader::DocumentLoader,
    model_transport::{ModelTransport, TransportError, TransportResponse},
    progress::{DebateProgressNotifier, NoProgress},
    similarity_index::{IndexError, SimilarityIndex},
    url_validator::{UrlCheck, UrlValidator},
};
pub use use_cases::debate_agent::{AgentRequest, DebateAgent};
pub use use_cases::evidence_index::EvidenceIndex;
pub use use_cases::model_adapter::{AdapterReply, ModelAdapter};
pub use use_cases::run_debate::{RunDebateError, RunDebateUseCase};
pub use use_cases::verify_references::ReferenceVerifier;
