//! # SCM Directory Core
//!
//! Directory logic with no HTTP code.
//!
//! This crate contains:
//! - GraphQL wire types and the fixed query documents
//! - The transport port (`GraphqlTransport`)
//! - Bounded cursor pagination
//! - `EnterpriseDirectory`, the domain client for account, member and user
//!   lookups
//!
//! ## Architecture Principles
//! - Only depends on `scm-directory-domain`
//! - All network access goes through the transport trait
//! - Each call owns its own state; the client holds only immutable config

pub mod directory;
pub mod graphql;
pub mod pagination;
pub mod policy;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-export specific items to avoid ambiguity
pub use directory::{AccountQuery, EnterpriseDirectory, MembersQuery, UserQuery};
pub use graphql::{GraphqlError, GraphqlOutcome, GraphqlPayload, GraphqlResponse};
pub use pagination::{paginate_cursor, MemberPage, Page};
pub use policy::resolve_outcome;
pub use ports::GraphqlTransport;
pub use queries::QueryDescriptor;
