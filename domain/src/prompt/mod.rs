//! Prompt domain
//!
//! Templates for the system preamble and for each debate stage.

mod template;

pub use template::{DebatePromptTemplate, NO_PREVIOUS_CRITIQUE, NO_PREVIOUS_SUGGESTION};
