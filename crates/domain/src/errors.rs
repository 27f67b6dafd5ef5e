//! Error types used throughout the directory client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for directory operations
///
/// Semantic absence (unknown login, ambiguous match, missing sub-tree) is
/// never an error; operations report it as `None` or an empty list.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DirectoryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("GraphQL errors: {0}")]
    GraphQl(String),

    #[error("Pagination limit exceeded: {0}")]
    PageLimitExceeded(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for DirectoryError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidResponse(format!("failed to decode GraphQL payload: {value}"))
    }
}

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
