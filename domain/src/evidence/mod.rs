//! Evidence documents and their chunking.

pub mod chunk;

pub use chunk::{Document, EvidenceChunk, TextSplitter, render_evidence};
