//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod debate_logger;
pub mod document_loader;
pub mod model_transport;
pub mod progress;
pub mod similarity_index;
pub mod url_validator;
