//! Configuration loading
//!
//! Reads [`scm_directory_domain::ClientConfig`] from environment variables
//! and files.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file, discover_config_file};
