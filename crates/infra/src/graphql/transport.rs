//! reqwest-backed implementation of the GraphQL transport port

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Method;
use scm_directory_core::{GraphqlPayload, GraphqlResponse, GraphqlTransport};
use scm_directory_domain::{ClientConfig, DirectoryError, Result};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::{status_error, InfraError};
use crate::http::HttpClient;

const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Posts GraphQL payloads to one endpoint
///
/// One POST per `send`; no retries, no caching. The token travels in the
/// `Authorization` header only.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    endpoint: String,
    http_client: HttpClient,
}

impl ReqwestTransport {
    /// Post to `endpoint` through `http_client`.
    pub fn new(endpoint: impl Into<String>, http_client: HttpClient) -> Self {
        Self { endpoint: endpoint.into(), http_client }
    }

    /// Build a transport with its own HTTP client from `config`.
    ///
    /// # Errors
    /// Returns `DirectoryError::Config` when the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self::new(config.graphql_url.clone(), http_client))
    }

    /// GraphQL endpoint URL this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for ReqwestTransport {
    async fn send(&self, payload: &GraphqlPayload, token: Option<&str>) -> Result<GraphqlResponse> {
        let request_id = Uuid::new_v4().to_string();

        let mut request_builder = self
            .http_client
            .request(Method::POST, &self.endpoint)
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, &request_id)
            .json(payload);
        if let Some(token) = token {
            request_builder = request_builder.bearer_auth(token);
        }

        let response = self.http_client.send(request_builder).await?;
        let status = response.status();
        let body = response.bytes().await.map_err(|err| DirectoryError::from(InfraError::from(err)))?;
        debug!(
            request_id = %request_id,
            mutation = payload.is_mutation(),
            status = status.as_u16(),
            bytes = body.len(),
            "received GraphQL response"
        );

        let parsed = serde_json::from_slice::<GraphqlResponse>(&body);
        if status.is_success() {
            return parsed.map_err(DirectoryError::from);
        }

        match parsed {
            Ok(envelope) if envelope.is_envelope() => {
                warn!(request_id = %request_id, status = status.as_u16(), "GraphQL body returned with non-success status");
                Ok(envelope)
            }
            _ => Err(status_error(status, &String::from_utf8_lossy(&body))),
        }
    }
}
