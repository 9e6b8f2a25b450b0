use std::sync::Mutex;

use async_trait::async_trait;
use bookbuy::errors::ClientError;
use bookbuy::models::request::Request;
use bookbuy::models::step::Step;
use bookbuy::providers::base::AgentApi;
use bookbuy::providers::reply::AgentReply;
use serde_json::json;

/// Buys whatever it is asked for. A few prompts trigger canned failures.
pub struct MockAgent {
    requests: Mutex<Vec<Request>>,
}

impl MockAgent {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentApi for MockAgent {
    async fn execute(&self, request: &Request) -> Result<AgentReply, ClientError> {
        self.requests.lock().unwrap().push(request.clone());

        match request.prompt.as_str() {
            "unreachable" => return Err(ClientError::Decode("no route to agent".to_string())),
            "ponder" => return Ok(AgentReply::ok("Thinking...", vec![])),
            "panic" => panic!("agent crashed"),
            _ => {}
        }
        Ok(AgentReply::ok(
            format!("Bought {}", request.prompt),
            vec![Step::new("search", json!(request.prompt), json!("1 match"))],
        ))
    }
}
