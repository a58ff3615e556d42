//! References cited by debaters.
//!
//! - [`entities::VerifiedReference`] - a checked URL with its authority score
//! - [`authority::AuthorityScorer`] - domain → authority tier (1..=3)
//! - [`domain_name::registrable_domain`] - public-suffix aware domain extraction

pub mod authority;
pub mod domain_name;
pub mod entities;
