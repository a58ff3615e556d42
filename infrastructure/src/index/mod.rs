//! Similarity backends for the evidence index

mod lexical;

pub use lexical::LexicalIndex;
