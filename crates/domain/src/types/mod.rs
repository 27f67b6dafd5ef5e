//! Domain types and models
//!
//! Every value here is a transient DTO rebuilt from a GraphQL response on
//! each call; nothing is persisted.

pub mod account;
pub mod connection;
pub mod user;

pub use account::{Account, AccountKind};
pub use connection::{Connection, PageInfo};
pub use user::{EnterpriseSummary, OrganizationSummary, User};
