use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::base::AgentApi;
use super::configs::AgentApiConfig;
use super::reply::AgentReply;
use crate::errors::ClientError;
use crate::models::request::Request;

pub const EXECUTE_PATH: &str = "/api/execute";
pub const AGENT_INFO_PATH: &str = "/api/agent_info";
pub const TEAM_INFO_PATH: &str = "/api/team_info";

/// Talks to the agent server over HTTP.
///
/// No request timeout is configured: an exchange runs until the server answers
/// or the connection fails.
pub struct HttpAgentClient {
    client: Client,
    config: AgentApiConfig,
}

impl HttpAgentClient {
    pub fn new(config: AgentApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AgentApiConfig {
        &self.config
    }

    /// Metadata the agent publishes about itself, including example requests.
    pub async fn agent_info(&self) -> Result<Value, ClientError> {
        self.get(AGENT_INFO_PATH).await
    }

    /// The team that operates the agent.
    pub async fn team_info(&self) -> Result<Value, ClientError> {
        self.get(TEAM_INFO_PATH).await
    }

    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        let url = self.config.endpoint(path);
        debug!(%url, "fetching agent metadata");

        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }
}

#[async_trait]
impl AgentApi for HttpAgentClient {
    async fn execute(&self, request: &Request) -> Result<AgentReply, ClientError> {
        let url = self.config.endpoint(EXECUTE_PATH);
        debug!(%url, prompt = %request.prompt, "dispatching request to agent");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let body = read_json(response).await?;
        if body.is_null() {
            return Err(ClientError::Decode("response body was null".to_string()));
        }
        Ok(AgentReply::from_value(&body))
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status));
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
