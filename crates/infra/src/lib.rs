//! # SCM Directory Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP client and GraphQL transport
//! - Conversions from reqwest failures into `DirectoryError`
//! - Configuration loading from environment variables and files
//! - `GithubScmGraphql`, a ready-wired directory client
//!
//! ## Architecture
//! - Implements traits defined in `scm-directory-core`
//! - Contains all I/O

pub mod config;
pub mod errors;
pub mod github;
pub mod graphql;
pub mod http;

// Re-export commonly used items
pub use errors::InfraError;
pub use github::GithubScmGraphql;
pub use graphql::ReqwestTransport;
pub use http::{HttpClient, HttpClientBuilder};
