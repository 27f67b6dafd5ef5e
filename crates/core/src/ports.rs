//! Port interfaces for talking to the GraphQL endpoint
//!
//! The directory never touches HTTP directly; infrastructure provides an
//! implementation of [`GraphqlTransport`].

use std::sync::Arc;

use async_trait::async_trait;
use scm_directory_domain::Result;

use crate::graphql::{GraphqlPayload, GraphqlResponse};

/// Sends one GraphQL payload and returns the decoded envelope
///
/// Implementations perform exactly one network call per invocation, attach
/// `token` as a bearer credential (never in the body), and report transport
/// failures as errors. They do not retry or cache.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn send(&self, payload: &GraphqlPayload, token: Option<&str>) -> Result<GraphqlResponse>;
}

#[async_trait]
impl<T> GraphqlTransport for Arc<T>
where
    T: GraphqlTransport + ?Sized,
{
    async fn send(&self, payload: &GraphqlPayload, token: Option<&str>) -> Result<GraphqlResponse> {
        (**self).send(payload, token).await
    }
}
