//! Client configuration structures

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GRAPHQL_URL, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::errors::{DirectoryError, Result};

/// How `get_enterprise_user_account` resolves a login to an account.
///
/// Each strategy sends exactly one fixed document; they are never mixed
/// within one client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountLookup {
    /// Search the enterprise member list for the login (union fragment on
    /// `members`).
    #[default]
    MemberSearch,
    /// Fetch the user and look for the slug among its `enterprises`.
    UserEnterprises,
}

impl std::str::FromStr for AccountLookup {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "member_search" => Ok(Self::MemberSearch),
            "user_enterprises" => Ok(Self::UserEnterprises),
            other => Err(DirectoryError::Config(format!("Unknown account lookup: {other}"))),
        }
    }
}

/// What to do with a response that carries a GraphQL `errors` array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Treat the response as absent data (`None` / terminal page).
    #[default]
    Collapse,
    /// Fail the call with [`DirectoryError::GraphQl`].
    Surface,
}

/// Process-wide configuration of a directory client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// GraphQL endpoint, `http` or `https`
    pub graphql_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Maximum pages a listing call may request before failing.
    pub max_pages: usize,
    pub account_lookup: AccountLookup,
    pub error_policy: ErrorPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            account_lookup: AccountLookup::default(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at a custom endpoint, defaults elsewhere.
    pub fn with_graphql_url(url: impl Into<String>) -> Self {
        Self { graphql_url: url.into(), ..Self::default() }
    }

    /// Check that the configuration can drive a client.
    ///
    /// # Errors
    /// Returns `DirectoryError::Config` for an unparsable or non-HTTP
    /// endpoint, a zero timeout or a zero page cap.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.graphql_url).map_err(|e| {
            DirectoryError::Config(format!("Invalid GraphQL URL {:?}: {}", self.graphql_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DirectoryError::Config(format!(
                "GraphQL URL must use http or https, got {}",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(DirectoryError::Config("timeout_secs must be greater than zero".into()));
        }
        if self.max_pages == 0 {
            return Err(DirectoryError::Config("max_pages must be greater than zero".into()));
        }
        Ok(())
    }
}
