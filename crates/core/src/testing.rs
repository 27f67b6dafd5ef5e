//! In-memory transport for unit tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use scm_directory_domain::{DirectoryError, Result};
use serde_json::Value;

use crate::graphql::{GraphqlPayload, GraphqlResponse};
use crate::ports::GraphqlTransport;

/// One recorded `send` call.
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub payload: GraphqlPayload,
    pub token: Option<String>,
}

/// Replays queued results in order and records every payload it receives.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    script: Mutex<VecDeque<Result<GraphqlResponse>>>,
    repeat: Option<GraphqlResponse>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response carrying `data`.
    pub fn then_data(self, data: Value) -> Self {
        self.then(Ok(GraphqlResponse::with_data(data)))
    }

    pub fn then(self, result: Result<GraphqlResponse>) -> Self {
        self.script.lock().expect("script mutex poisoned").push_back(result);
        self
    }

    /// Answer with `response` once the queue is empty, forever.
    pub fn repeating(mut self, response: GraphqlResponse) -> Self {
        self.repeat = Some(response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl GraphqlTransport for ScriptedTransport {
    async fn send(&self, payload: &GraphqlPayload, token: Option<&str>) -> Result<GraphqlResponse> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(RecordedCall { payload: payload.clone(), token: token.map(str::to_owned) });

        let next = self.script.lock().expect("script mutex poisoned").pop_front();
        match (next, &self.repeat) {
            (Some(result), _) => result,
            (None, Some(response)) => Ok(response.clone()),
            (None, None) => Err(DirectoryError::Internal("scripted transport exhausted".into())),
        }
    }
}
