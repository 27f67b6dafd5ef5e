//! # SCM Directory Domain
//!
//! Identity and membership types for the source-control directory client.
//!
//! This crate contains:
//! - Account and user DTOs decoded from GraphQL responses
//! - Domain error types and Result definitions
//! - Client configuration structures
//! - Domain constants (endpoint, page size, page cap)
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
