//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`rng::GameRng`]: injectable randomness for topic picks and red-cell targets

pub mod error;
pub mod rng;
