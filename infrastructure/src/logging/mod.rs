//! Logging infrastructure - structured debate event logging.
//!
//! Provides [`JsonlDebateLogger`], an append-only JSONL writer implementing
//! the [`DebateLogger`](tribunal_application::DebateLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlDebateLogger;
