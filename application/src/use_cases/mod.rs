//! Use cases (application services)
//!
//! - [`model_adapter`] - uniform, never-failing model invocation
//! - [`debate_agent`] - adapter plus bounded memory and stage prompts
//! - [`verify_references`] - URL liveness, domain and authority
//! - [`evidence_index`] - retrieval over verified reference documents
//! - [`run_debate`] - the stage protocol and final selection

pub mod debate_agent;
pub mod evidence_index;
pub mod model_adapter;
pub mod run_debate;
pub mod verify_references;
