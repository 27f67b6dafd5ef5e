//! User profile types
//!
//! Shape of the `user` field selected by the user-by-login document: the
//! profile scalars plus its enterprise and organization affiliations.

use serde::{Deserialize, Deserializer, Serialize};

use super::account::AccountKind;
use super::connection::Connection;

/// Enterprise a user belongs to
///
/// Every scalar is optional: the provider nulls fields the token may not see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterpriseSummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// Organization a user belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationSummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub login: Option<String>,
}

/// User profile as returned under the `user` field
///
/// Decoded as-is; nothing is required beyond the value being an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<String>,
    pub name: Option<String>,
    pub login: Option<String>,
    /// Present when the document aliases `__typename` as `type`
    #[serde(rename = "type", deserialize_with = "known_kind", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AccountKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprises: Option<Connection<EnterpriseSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations: Option<Connection<OrganizationSummary>>,
}

impl User {
    /// Slugs of the enterprises on the fetched page, in provider order.
    ///
    /// Enterprises without a slug are left out.
    pub fn enterprise_slugs(&self) -> Vec<&str> {
        self.enterprises
            .iter()
            .flat_map(|conn| conn.nodes.iter().filter_map(|e| e.slug.as_deref()))
            .collect()
    }

    /// Logins of the organizations on the fetched page, in provider order.
    pub fn organization_logins(&self) -> Vec<&str> {
        self.organizations
            .iter()
            .flat_map(|conn| conn.nodes.iter().filter_map(|o| o.login.as_deref()))
            .collect()
    }

    pub fn belongs_to_enterprise(&self, slug: &str) -> bool {
        self.enterprise_slugs().iter().any(|s| *s == slug)
    }
}

/// A typename outside the account union reads as no kind.
fn known_kind<'de, D>(deserializer: D) -> Result<Option<AccountKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let typename = Option::<String>::deserialize(deserializer)?;
    Ok(typename.as_deref().and_then(AccountKind::from_typename))
}
