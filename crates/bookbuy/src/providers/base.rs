use async_trait::async_trait;

use super::reply::AgentReply;
use crate::errors::ClientError;
use crate::models::request::Request;

/// A remote agent that can carry out a book-purchase request.
///
/// Implementations perform exactly one exchange per call: no retries, no
/// timeout of their own. Any transport-level problem, including a non-success
/// status, is reported as a [`ClientError`]; an agent that answered but failed
/// reports that inside the [`AgentReply`].
#[async_trait]
pub trait AgentApi: Send + Sync {
    async fn execute(&self, request: &Request) -> Result<AgentReply, ClientError>;
}
