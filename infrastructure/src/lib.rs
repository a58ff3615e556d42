//! Infrastructure layer for tribunal
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod index;
pub mod logging;
pub mod providers;
pub mod web;

// Re-export commonly used types
pub use config::{ConfigError, ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use index::LexicalIndex;
pub use logging::JsonlDebateLogger;
pub use providers::{GeminiTransport, OpenRouterTransport, ProviderSettings};
pub use web::{HttpUrlValidator, WebDocumentLoader, WebSettings};
