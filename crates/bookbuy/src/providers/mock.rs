use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::oneshot;

use super::base::AgentApi;
use super::reply::AgentReply;
use crate::errors::ClientError;
use crate::models::request::Request;

type MockResult = Result<AgentReply, ClientError>;

/// A mock agent for testing.
///
/// Replies are either taken in order from a pre-configured list, or held back
/// per prompt until the test releases them through a [`ReplyGate`].
pub struct MockAgentApi {
    responses: Arc<Mutex<Vec<MockResult>>>,
    gates: Arc<Mutex<HashMap<String, oneshot::Receiver<MockResult>>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

/// Releases the reply for one gated prompt.
pub struct ReplyGate(oneshot::Sender<MockResult>);

impl ReplyGate {
    pub fn release(self, result: MockResult) {
        let _ = self.0.send(result);
    }
}

impl MockAgentApi {
    /// Create a new mock agent with a sequence of responses
    pub fn new(responses: Vec<MockResult>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            gates: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock agent whose reply for each prompt waits on a gate.
    pub fn gated<'a>(prompts: impl IntoIterator<Item = &'a str>) -> (Self, HashMap<String, ReplyGate>) {
        let mock = Self::new(Vec::new());
        let mut handles = HashMap::new();
        {
            let mut gates = mock.gates.lock().unwrap();
            for prompt in prompts {
                let (tx, rx) = oneshot::channel();
                gates.insert(prompt.to_string(), rx);
                handles.insert(prompt.to_string(), ReplyGate(tx));
            }
        }
        (mock, handles)
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentApi for MockAgentApi {
    async fn execute(&self, request: &Request) -> Result<AgentReply, ClientError> {
        self.requests.lock().unwrap().push(request.clone());

        let gate = self.gates.lock().unwrap().remove(&request.prompt);
        if let Some(gate) = gate {
            return gate
                .await
                .unwrap_or(Err(ClientError::Status(StatusCode::SERVICE_UNAVAILABLE)));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Behave like an unreachable server once the script runs out
            Err(ClientError::Status(StatusCode::SERVICE_UNAVAILABLE))
        } else {
            responses.remove(0)
        }
    }
}
