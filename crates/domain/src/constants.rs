//! Directory constants
//!
//! Centralized location for the defaults shared by every crate in the
//! workspace.

// Endpoint configuration
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("scm-directory/", env!("CARGO_PKG_VERSION"));

// Pagination
/// Page size baked into the member listing document (`first: 100`).
pub const MEMBERS_PAGE_SIZE: usize = 100;
/// Upper bound on pages fetched by a single listing call.
pub const DEFAULT_MAX_PAGES: usize = 1_000;

// Account discriminants returned as `type: __typename`
pub const TYPENAME_USER: &str = "User";
pub const TYPENAME_ENTERPRISE_USER_ACCOUNT: &str = "EnterpriseUserAccount";
