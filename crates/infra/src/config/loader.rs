//! Configuration loader
//!
//! Loads the client configuration from a config file or environment
//! variables.
//!
//! ## Loading Strategy
//! 1. Search the working directory for a config file
//! 2. If none exists, read environment variables
//! 3. Any setting not given keeps its default
//!
//! ## Environment Variables
//! - `SCM_GRAPHQL_URL`: GraphQL endpoint
//! - `SCM_GRAPHQL_TIMEOUT_SECS`: Request timeout in seconds
//! - `SCM_GRAPHQL_USER_AGENT`: `User-Agent` header value
//! - `SCM_GRAPHQL_MAX_PAGES`: Page cap for member listings
//! - `SCM_GRAPHQL_ACCOUNT_LOOKUP`: `member_search` or `user_enterprises`
//! - `SCM_GRAPHQL_SURFACE_ERRORS`: Fail on GraphQL `errors` (true/false)
//!
//! ## File Locations
//! The loader checks the following paths (in order):
//! 1. `./scm-directory.json` or `./scm-directory.toml`
//! 2. `./config.json` or `./config.toml`

use std::path::{Path, PathBuf};
use std::str::FromStr;

use scm_directory_domain::{AccountLookup, ClientConfig, DirectoryError, ErrorPolicy, Result};

pub const ENV_GRAPHQL_URL: &str = "SCM_GRAPHQL_URL";
pub const ENV_TIMEOUT_SECS: &str = "SCM_GRAPHQL_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "SCM_GRAPHQL_USER_AGENT";
pub const ENV_MAX_PAGES: &str = "SCM_GRAPHQL_MAX_PAGES";
pub const ENV_ACCOUNT_LOOKUP: &str = "SCM_GRAPHQL_ACCOUNT_LOOKUP";
pub const ENV_SURFACE_ERRORS: &str = "SCM_GRAPHQL_SURFACE_ERRORS";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["scm-directory.json", "scm-directory.toml", "config.json", "config.toml"];

/// Load configuration, preferring a config file over the environment
///
/// # Errors
/// Returns `DirectoryError::Config` if the chosen source is malformed or the
/// resulting configuration fails validation.
pub fn load() -> Result<ClientConfig> {
    let config = match discover_config_file() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, reading environment");
            load_from_env()?
        }
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// Every variable is optional; unset variables keep the default value.
///
/// # Errors
/// Returns `DirectoryError::Config` if a variable is set to a value that
/// cannot be parsed.
pub fn load_from_env() -> Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Some(url) = env_opt(ENV_GRAPHQL_URL) {
        config.graphql_url = url;
    }
    if let Some(timeout) = env_parse::<u64>(ENV_TIMEOUT_SECS)? {
        config.timeout_secs = timeout;
    }
    if let Some(agent) = env_opt(ENV_USER_AGENT) {
        config.user_agent = agent;
    }
    if let Some(max_pages) = env_parse::<usize>(ENV_MAX_PAGES)? {
        config.max_pages = max_pages;
    }
    if let Some(lookup) = env_opt(ENV_ACCOUNT_LOOKUP) {
        config.account_lookup = AccountLookup::from_str(&lookup)?;
    }
    if let Some(surface) = env_bool(ENV_SURFACE_ERRORS)? {
        config.error_policy = if surface { ErrorPolicy::Surface } else { ErrorPolicy::Collapse };
    }

    tracing::debug!(
        graphql_url = %config.graphql_url,
        account_lookup = ?config.account_lookup,
        error_policy = ?config.error_policy,
        "Configuration read from environment"
    );
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DirectoryError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DirectoryError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => discover_config_file().ok_or_else(|| {
            DirectoryError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DirectoryError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DirectoryError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DirectoryError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DirectoryError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Search the working directory for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn discover_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    discover_in(&cwd)
}

fn discover_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| DirectoryError::Config(format!("Invalid value for {}: {}", key, e)))
        })
        .transpose()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str) -> Result<Option<bool>> {
    env_opt(key)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => {
                Err(DirectoryError::Config(format!("Invalid boolean for {}: {}", key, other)))
            }
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::{Builder, TempDir};

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 6] = [
        ENV_GRAPHQL_URL,
        ENV_TIMEOUT_SECS,
        ENV_USER_AGENT,
        ENV_MAX_PAGES,
        ENV_ACCOUNT_LOOKUP,
        ENV_SURFACE_ERRORS,
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        for (raw, expected) in [("1", true), ("TRUE", true), ("on", true), ("no", false), ("0", false)]
        {
            std::env::set_var("TEST_SCM_BOOL", raw);
            assert_eq!(env_bool("TEST_SCM_BOOL").unwrap(), Some(expected), "value {raw}");
        }

        std::env::set_var("TEST_SCM_BOOL", "maybe");
        assert!(matches!(env_bool("TEST_SCM_BOOL"), Err(DirectoryError::Config(_))));

        std::env::remove_var("TEST_SCM_BOOL");
        assert_eq!(env_bool("TEST_SCM_BOOL").unwrap(), None);
    }

    #[test]
    fn test_load_from_env_defaults_when_unset() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let config = load_from_env().expect("defaults");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_GRAPHQL_URL, "https://ghe.example.com/api/graphql");
        std::env::set_var(ENV_TIMEOUT_SECS, "5");
        std::env::set_var(ENV_USER_AGENT, "directory-sync/2.0");
        std::env::set_var(ENV_MAX_PAGES, "12");
        std::env::set_var(ENV_ACCOUNT_LOOKUP, "user-enterprises");
        std::env::set_var(ENV_SURFACE_ERRORS, "yes");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert_eq!(config.graphql_url, "https://ghe.example.com/api/graphql");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, "directory-sync/2.0");
        assert_eq!(config.max_pages, 12);
        assert_eq!(config.account_lookup, AccountLookup::UserEnterprises);
        assert_eq!(config.error_policy, ErrorPolicy::Surface);
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_MAX_PAGES, "lots");
        let result = load_from_env();
        clear_env();

        match result {
            Err(DirectoryError::Config(msg)) => assert!(msg.contains(ENV_MAX_PAGES)),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_env_unknown_lookup() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_ACCOUNT_LOOKUP, "directory_scan");
        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(DirectoryError::Config(_))));
    }

    #[test]
    fn test_load_from_file_json() {
        let mut file = Builder::new().suffix(".json").tempfile().expect("temp file");
        write!(
            file,
            r#"{{"graphql_url": "http://localhost:9000/graphql", "max_pages": 3, "error_policy": "surface"}}"#
        )
        .unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).expect("json config");
        assert_eq!(config.graphql_url, "http://localhost:9000/graphql");
        assert_eq!(config.max_pages, 3);
        assert_eq!(config.error_policy, ErrorPolicy::Surface);
        assert_eq!(config.timeout_secs, ClientConfig::default().timeout_secs);
    }

    #[test]
    fn test_load_from_file_toml() {
        let mut file = Builder::new().suffix(".toml").tempfile().expect("temp file");
        writeln!(file, "timeout_secs = 9").unwrap();
        writeln!(file, "account_lookup = \"user_enterprises\"").unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).expect("toml config");
        assert_eq!(config.timeout_secs, 9);
        assert_eq!(config.account_lookup, AccountLookup::UserEnterprises);
        assert_eq!(config.graphql_url, ClientConfig::default().graphql_url);
    }

    #[test]
    fn test_load_from_file_invalid_format() {
        let mut file = Builder::new().suffix(".json").tempfile().expect("temp file");
        write!(file, "{{ not json").unwrap();

        let result = load_from_file(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(DirectoryError::Config(msg)) if msg.starts_with("Invalid JSON")));
    }

    #[test]
    fn test_load_from_file_unsupported_extension() {
        let file = Builder::new().suffix(".yaml").tempfile().expect("temp file");

        let result = load_from_file(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(DirectoryError::Config(msg)) if msg.contains("yaml")));
    }

    #[test]
    fn test_load_from_file_missing_path() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/scm-directory.toml")));
        assert!(matches!(result, Err(DirectoryError::Config(msg)) if msg.contains("not found")));
    }

    #[test]
    fn test_discovery_prefers_named_file() {
        let dir = TempDir::new().expect("temp dir");
        assert_eq!(discover_in(dir.path()), None);

        std::fs::write(dir.path().join("config.toml"), "").unwrap();
        assert_eq!(discover_in(dir.path()), Some(dir.path().join("config.toml")));

        std::fs::write(dir.path().join("scm-directory.json"), "{}").unwrap();
        assert_eq!(discover_in(dir.path()), Some(dir.path().join("scm-directory.json")));
    }
}
