//! Ready-wired directory client for a GitHub-compatible GraphQL endpoint

use scm_directory_core::{AccountQuery, EnterpriseDirectory, MembersQuery, UserQuery};
use scm_directory_domain::{Account, ClientConfig, Result, User};
use serde_json::Value;
use tracing::info;

use crate::config;
use crate::graphql::ReqwestTransport;

/// Directory client over HTTP
///
/// Cheap to share behind an `Arc`; it holds no per-call state.
pub struct GithubScmGraphql {
    directory: EnterpriseDirectory<ReqwestTransport>,
}

impl GithubScmGraphql {
    /// Validate `config` and build the HTTP transport and directory.
    ///
    /// # Errors
    /// Returns `DirectoryError::Config` for an invalid configuration or an
    /// HTTP client that cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::from_config(&config)?;
        info!(
            endpoint = %config.graphql_url,
            account_lookup = ?config.account_lookup,
            error_policy = ?config.error_policy,
            "GraphQL directory client ready"
        );
        Ok(Self { directory: EnterpriseDirectory::new(transport, &config) })
    }

    /// Build a client from `SCM_GRAPHQL_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(config::load_from_env()?)
    }

    /// Build a client from a discovered config file, else the environment.
    pub fn load() -> Result<Self> {
        Self::new(config::load()?)
    }

    /// Underlying directory, for callers that need its transport.
    pub fn directory(&self) -> &EnterpriseDirectory<ReqwestTransport> {
        &self.directory
    }

    /// See [`EnterpriseDirectory::get_enterprise_user_account`].
    pub async fn get_enterprise_user_account(&self, query: &AccountQuery) -> Result<Option<Account>> {
        self.directory.get_enterprise_user_account(query).await
    }

    /// See [`EnterpriseDirectory::list_enterprise_members`].
    pub async fn list_enterprise_members(&self, query: &MembersQuery) -> Result<Vec<Account>> {
        self.directory.list_enterprise_members(query).await
    }

    /// See [`EnterpriseDirectory::get_user`].
    pub async fn get_user(&self, query: &UserQuery) -> Result<Option<User>> {
        self.directory.get_user(query).await
    }

    /// See [`EnterpriseDirectory::mutate`].
    pub async fn mutate(
        &self,
        document: &str,
        variables: Value,
        token: Option<&str>,
    ) -> Result<Option<Value>> {
        self.directory.mutate(document, variables, token).await
    }
}
