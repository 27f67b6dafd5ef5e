//! Account types
//!
//! An account is either a plain provider user or an enterprise-scoped user
//! account. Both variants share one output shape: `{type, id, name, login}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{TYPENAME_ENTERPRISE_USER_ACCOUNT, TYPENAME_USER};

/// Concrete GraphQL type behind a member union node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    User,
    EnterpriseUserAccount,
}

impl AccountKind {
    /// Map a `__typename` value to a kind, `None` for types outside the union.
    pub fn from_typename(typename: &str) -> Option<Self> {
        match typename {
            TYPENAME_USER => Some(Self::User),
            TYPENAME_ENTERPRISE_USER_ACCOUNT => Some(Self::EnterpriseUserAccount),
            _ => None,
        }
    }

    pub fn as_typename(self) -> &'static str {
        match self {
            Self::User => TYPENAME_USER,
            Self::EnterpriseUserAccount => TYPENAME_ENTERPRISE_USER_ACCOUNT,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_typename())
    }
}

/// Account returned by enterprise lookups and member listings
///
/// `id` is the stable identity; `login` and `name` may change. `kind` is
/// `None` only when the provider omitted the type discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AccountKind>,
    /// Opaque provider-assigned identifier
    pub id: String,
    /// Display name; the provider allows it to be unset
    pub name: Option<String>,
    pub login: String,
}
