//! GraphQL wire types
//!
//! Request payloads serialize to `{query, variables}` or
//! `{mutation, variables}`. Responses are kept as untyped JSON until an
//! operation decodes the sub-tree it asked for.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body posted to the GraphQL endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GraphqlPayload {
    /// Serializes as `{"query": ..., "variables": ...}`
    Query { query: String, variables: Value },
    /// Serializes as `{"mutation": ..., "variables": ...}`
    Mutation { mutation: String, variables: Value },
}

impl GraphqlPayload {
    /// Payload for a query document.
    pub fn query(document: impl Into<String>, variables: Value) -> Self {
        Self::Query { query: document.into(), variables }
    }

    /// Payload for a mutation document.
    pub fn mutation(document: impl Into<String>, variables: Value) -> Self {
        Self::Mutation { mutation: document.into(), variables }
    }

    /// Document text regardless of operation kind.
    pub fn document(&self) -> &str {
        match self {
            Self::Query { query, .. } => query,
            Self::Mutation { mutation, .. } => mutation,
        }
    }

    /// Variables object sent alongside the document.
    pub fn variables(&self) -> &Value {
        match self {
            Self::Query { variables, .. } | Self::Mutation { variables, .. } => variables,
        }
    }

    /// Value of one variable, `None` when unset.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables().get(name)
    }

    /// Whether the payload is sent under the `mutation` key.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Mutation { .. })
    }
}

/// One entry of a response's `errors` field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    /// Human-readable description from the provider
    #[serde(default)]
    pub message: String,
    /// Provider error code, e.g. `FORBIDDEN`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Field path the error applies to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Value>,
}

impl std::fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path: Vec<String> = self
            .path
            .iter()
            .map(|segment| match segment {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        match (&self.kind, path.is_empty()) {
            (Some(kind), true) => write!(f, "[{kind}] {}", self.message),
            (Some(kind), false) => write!(f, "[{kind}] {} (at {})", self.message, path.join(".")),
            (None, true) => f.write_str(&self.message),
            (None, false) => write!(f, "{} (at {})", self.message, path.join(".")),
        }
    }
}

/// Decoded response envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphqlResponse {
    /// `data` tree; `None` when null or missing
    #[serde(default)]
    pub data: Option<Value>,
    /// `errors` entries; empty when none were reported
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// Successful response carrying `data`, for transport implementations.
    pub fn with_data(data: Value) -> Self {
        Self { data: Some(data), errors: Vec::new() }
    }

    /// Failed response carrying only `errors`, for transport implementations.
    pub fn with_errors(errors: Vec<GraphqlError>) -> Self {
        Self { data: None, errors }
    }

    /// Whether the body looks like a GraphQL answer at all.
    pub fn is_envelope(&self) -> bool {
        self.data.is_some() || !self.errors.is_empty()
    }

    /// Classify the envelope into exactly one outcome.
    pub fn into_outcome(self) -> GraphqlOutcome {
        if !self.errors.is_empty() {
            return GraphqlOutcome::Errors { errors: self.errors, data: self.data };
        }
        match self.data {
            Some(Value::Null) | None => GraphqlOutcome::NullData,
            Some(data) => GraphqlOutcome::Data(data),
        }
    }
}

/// Top-level shape of a response
#[derive(Debug, Clone, PartialEq)]
pub enum GraphqlOutcome {
    /// `data` is populated and no errors were reported
    Data(Value),
    /// `data` is null or missing and no errors were reported
    NullData,
    /// The provider reported errors; partial data may accompany them
    Errors { errors: Vec<GraphqlError>, data: Option<Value> },
}

/// Providers disagree on whether `errors` is a list or a single object.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<GraphqlError>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<GraphqlError>),
        One(GraphqlError),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(errors)) => errors,
        Some(OneOrMany::One(error)) => vec![error],
        None => Vec::new(),
    })
}
