//! Progress display for debate runs

pub mod reporter;
