//! Enterprise directory client
//!
//! Builds requests from the fixed documents, hands them to the transport and
//! reduces each response to a plain result. Absence (unknown login, ambiguous
//! search, null sub-tree) is `None` or an empty list; only transport and
//! decoding failures are errors.

use scm_directory_domain::constants::MEMBERS_PAGE_SIZE;
use scm_directory_domain::{
    Account, AccountKind, AccountLookup, ClientConfig, Connection, DirectoryError, ErrorPolicy,
    Result, User,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use crate::graphql::GraphqlPayload;
use crate::pagination::{paginate_cursor, MemberPage, Page};
use crate::policy::resolve_outcome;
use crate::ports::GraphqlTransport;
use crate::queries::{
    QueryDescriptor, GET_ENTERPRISE_USER_ACCOUNT, GET_USER, GET_USER_ENTERPRISES,
    LIST_ENTERPRISE_MEMBERS,
};

/// Parameters of [`EnterpriseDirectory::get_enterprise_user_account`]
#[derive(Debug, Clone, Default)]
pub struct AccountQuery {
    /// Enterprise slug; required by the member-search lookup
    pub slug: Option<String>,
    /// Login or search term to resolve
    pub login: String,
    /// Bearer token sent with the request; anonymous when `None`
    pub token: Option<String>,
}

impl AccountQuery {
    /// Look up `login` with no enterprise and no token yet.
    pub fn new(login: impl Into<String>) -> Self {
        Self { login: login.into(), ..Self::default() }
    }

    /// Restrict the lookup to the enterprise with this slug.
    pub fn in_enterprise(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Authenticate the request with `token`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Parameters of [`EnterpriseDirectory::list_enterprise_members`]
#[derive(Debug, Clone, Default)]
pub struct MembersQuery {
    /// Enterprise slug
    pub slug: String,
    /// Bearer token sent with every page request
    pub token: Option<String>,
}

impl MembersQuery {
    /// List the members of the enterprise `slug`.
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into(), token: None }
    }

    /// Authenticate every page request with `token`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Parameters of [`EnterpriseDirectory::get_user`]
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Login of the user to fetch
    pub login: String,
    /// Bearer token sent with the request
    pub token: Option<String>,
}

impl UserQuery {
    /// Fetch the user `login`.
    pub fn new(login: impl Into<String>) -> Self {
        Self { login: login.into(), token: None }
    }

    /// Authenticate the request with `token`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Domain client over a [`GraphqlTransport`]
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// calls; every call owns its own accumulator.
pub struct EnterpriseDirectory<T> {
    transport: T,
    account_lookup: AccountLookup,
    error_policy: ErrorPolicy,
    max_pages: usize,
}

impl<T: GraphqlTransport> EnterpriseDirectory<T> {
    /// Create a directory using the lookup strategy, error policy and page
    /// cap from `config`.
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            account_lookup: config.account_lookup,
            error_policy: config.error_policy,
            max_pages: config.max_pages,
        }
    }

    /// Transport the directory sends through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lookup strategy used by [`Self::get_enterprise_user_account`].
    pub fn account_lookup(&self) -> AccountLookup {
        self.account_lookup
    }

    /// Resolve a login to exactly one enterprise account.
    ///
    /// Zero matches, several matches and any missing step of the response
    /// all yield `Ok(None)`.
    ///
    /// # Errors
    /// Transport failures propagate. `InvalidInput` when the member-search
    /// lookup is configured and no slug is given.
    #[instrument(skip(self, query), fields(slug = ?query.slug, login = %query.login, lookup = ?self.account_lookup))]
    pub async fn get_enterprise_user_account(&self, query: &AccountQuery) -> Result<Option<Account>> {
        let account = match self.account_lookup {
            AccountLookup::MemberSearch => self.account_by_member_search(query).await?,
            AccountLookup::UserEnterprises => self.account_by_user_enterprises(query).await?,
        };
        debug!(found = account.is_some(), "enterprise account lookup finished");
        Ok(account)
    }

    /// List every member of an enterprise, 100 per request, in provider order.
    ///
    /// An unknown enterprise or a response without the members connection
    /// ends the listing; the result is then whatever was gathered, possibly
    /// empty.
    ///
    /// # Errors
    /// A failed page aborts the whole listing. `PageLimitExceeded` when the
    /// configured page cap is reached with pages remaining.
    #[instrument(skip(self, query), fields(slug = %query.slug))]
    pub async fn list_enterprise_members(&self, query: &MembersQuery) -> Result<Vec<Account>> {
        let token = query.token.as_deref();
        let members = paginate_cursor(self.max_pages, |cursor| {
            let first_page = cursor.is_none();
            let payload = LIST_ENTERPRISE_MEMBERS.query(json!({ "slug": query.slug, "cursor": cursor }));
            async move { self.fetch_member_page(payload, first_page, token).await }
        })
        .await?;

        info!(count = members.len(), "listed enterprise members");
        Ok(members)
    }

    /// Fetch a user profile with its enterprises and organizations.
    ///
    /// # Errors
    /// Transport failures and undecodable user objects.
    #[instrument(skip(self, query), fields(login = %query.login))]
    pub async fn get_user(&self, query: &UserQuery) -> Result<Option<User>> {
        let payload = GET_USER.query(json!({ "login": query.login }));
        let Some(data) = self.execute(&GET_USER, &payload, query.token.as_deref()).await? else {
            return Ok(None);
        };
        let UserData { user } = decode(&GET_USER, data)?;
        Ok(user)
    }

    /// Send an arbitrary mutation and return its `data` tree.
    ///
    /// # Errors
    /// Transport failures, or remote errors under the surfacing policy.
    #[instrument(skip(self, document, variables, token))]
    pub async fn mutate(
        &self,
        document: &str,
        variables: Value,
        token: Option<&str>,
    ) -> Result<Option<Value>> {
        let payload = GraphqlPayload::mutation(document, variables);
        let response = self.transport.send(&payload, token).await?;
        resolve_outcome(response.into_outcome(), self.error_policy)
    }

    async fn account_by_member_search(&self, query: &AccountQuery) -> Result<Option<Account>> {
        let slug = query.slug.as_deref().ok_or_else(|| {
            DirectoryError::InvalidInput("an enterprise slug is required for member search".into())
        })?;
        let payload =
            GET_ENTERPRISE_USER_ACCOUNT.query(json!({ "slug": slug, "query": query.login }));
        let Some(data) =
            self.execute(&GET_ENTERPRISE_USER_ACCOUNT, &payload, query.token.as_deref()).await?
        else {
            return Ok(None);
        };

        let EnterpriseData { enterprise } = decode(&GET_ENTERPRISE_USER_ACCOUNT, data)?;
        let Some(members) = enterprise.and_then(|e| e.members) else {
            return Ok(None);
        };
        if members.total_count != 1 {
            debug!(total = members.total_count, "member search did not match exactly one account");
            return Ok(None);
        }
        Ok(members.nodes.into_iter().next().and_then(normalize_member))
    }

    async fn account_by_user_enterprises(&self, query: &AccountQuery) -> Result<Option<Account>> {
        let payload = GET_USER_ENTERPRISES.query(json!({ "login": query.login }));
        let Some(data) =
            self.execute(&GET_USER_ENTERPRISES, &payload, query.token.as_deref()).await?
        else {
            return Ok(None);
        };

        let UserData { user } = decode(&GET_USER_ENTERPRISES, data)?;
        let Some(user) = user else {
            return Ok(None);
        };
        if user.enterprises.is_none() {
            return Ok(None);
        }
        let member = match query.slug.as_deref() {
            Some(slug) => user.belongs_to_enterprise(slug),
            None => !user.enterprise_slugs().is_empty(),
        };
        if !member {
            return Ok(None);
        }
        let Some(id) = user.id else {
            debug!("enterprise member has no id");
            return Ok(None);
        };

        Ok(Some(Account {
            kind: Some(AccountKind::EnterpriseUserAccount),
            login: user.login.unwrap_or_else(|| query.login.clone()),
            id,
            name: user.name,
        }))
    }

    /// Remote errors on the first page follow the configured policy. Past the
    /// first page they always fail the listing, since collapsing them would
    /// drop every remaining page.
    async fn fetch_member_page(
        &self,
        payload: GraphqlPayload,
        first_page: bool,
        token: Option<&str>,
    ) -> Result<Option<Page<Account>>> {
        debug!(
            operation = LIST_ENTERPRISE_MEMBERS.name,
            page_size = MEMBERS_PAGE_SIZE,
            cursor = ?payload.variable("cursor"),
            authenticated = token.is_some(),
            "sending GraphQL query"
        );
        let policy = if first_page { self.error_policy } else { ErrorPolicy::Surface };
        let response = self.transport.send(&payload, token).await?;
        let Some(data) = resolve_outcome(response.into_outcome(), policy)? else {
            return Ok(None);
        };
        let EnterpriseData { enterprise } = decode(&LIST_ENTERPRISE_MEMBERS, data)?;
        let Some(members) = enterprise.and_then(|e| e.members) else {
            return Ok(None);
        };

        let has_next_page = members.has_next_page();
        let end_cursor = members.page_info.and_then(|info| info.end_cursor);
        Ok(Some(Page {
            items: members.nodes.into_iter().filter_map(normalize_member).collect(),
            cursor: MemberPage { end_cursor, has_next_page },
        }))
    }

    async fn execute(
        &self,
        descriptor: &QueryDescriptor,
        payload: &GraphqlPayload,
        token: Option<&str>,
    ) -> Result<Option<Value>> {
        debug!(operation = descriptor.name, authenticated = token.is_some(), "sending GraphQL query");
        let response = self.transport.send(payload, token).await?;
        resolve_outcome(response.into_outcome(), self.error_policy)
    }
}

fn decode<D: DeserializeOwned>(descriptor: &QueryDescriptor, data: Value) -> Result<D> {
    serde_json::from_value(data).map_err(|e| {
        DirectoryError::InvalidResponse(format!("{} returned an unexpected shape: {e}", descriptor.name))
    })
}

/// Flatten a member union node into the shared account shape.
///
/// Nodes of a type outside the union, or without `id`/`login`, are skipped.
/// A node without a type discriminator is kept untyped.
fn normalize_member(node: MemberNode) -> Option<Account> {
    let kind = match node.typename.as_deref() {
        None => None,
        Some(typename) => match AccountKind::from_typename(typename) {
            Some(kind) => Some(kind),
            None => {
                warn!(typename, id = ?node.id, "skipping member node outside the account union");
                return None;
            }
        },
    };
    match (node.id, node.login) {
        (Some(id), Some(login)) => Some(Account { kind, id, name: node.name, login }),
        (id, _) => {
            warn!(typename = ?node.typename, id = ?id, "skipping member node without id or login");
            None
        }
    }
}

// =============================================================================
// Response shapes
// =============================================================================

#[derive(Debug, Deserialize)]
struct EnterpriseData {
    #[serde(default)]
    enterprise: Option<EnterpriseMembers>,
}

#[derive(Debug, Deserialize)]
struct EnterpriseMembers {
    #[serde(default)]
    members: Option<Connection<MemberNode>>,
}

#[derive(Debug, Deserialize)]
struct MemberNode {
    #[serde(rename = "type", default)]
    typename: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    login: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserData {
    #[serde(default)]
    user: Option<User>,
}
