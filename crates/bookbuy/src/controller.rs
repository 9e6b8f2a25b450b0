//! Owns the conversation and drives each submission through the agent.
//!
//! A submission appends two turns (the user's request and an agent placeholder),
//! performs one exchange with the agent, then rewrites that placeholder with
//! whatever came back. Failures from the agent become text in the placeholder;
//! they are never returned to the caller as errors.
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::{info, warn};

use crate::conversation::{Conversation, Resolution};
use crate::errors::{ClientError, ConversationError, SubmitError};
use crate::models::message::{Message, MessageId};
use crate::models::request::Request;
use crate::models::step::Step;
use crate::providers::base::AgentApi;
use crate::providers::reply::AgentReply;
use crate::validator::{normalize_request, parse_request};

pub const CONNECTION_ERROR_TEXT: &str = "Sorry, I'm having trouble connecting to the server.";

/// How one exchange with the agent ended.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentOutcome {
    Reply { text: Value, steps: Vec<Step> },
    ApplicationError(String),
    TransportFailure,
}

impl AgentOutcome {
    pub fn from_result(result: &Result<AgentReply, ClientError>) -> Self {
        match result {
            Err(_) => AgentOutcome::TransportFailure,
            Ok(reply) if reply.is_error() => {
                AgentOutcome::ApplicationError(error_detail(reply.error.as_ref()))
            }
            Ok(reply) => AgentOutcome::Reply {
                text: reply.response.clone(),
                steps: reply.steps.clone(),
            },
        }
    }

    pub fn into_resolution(self) -> Resolution {
        match self {
            AgentOutcome::Reply { text, steps } => Resolution { text, steps },
            AgentOutcome::ApplicationError(detail) => Resolution::text(format!("Error: {}", detail)),
            AgentOutcome::TransportFailure => Resolution::text(CONNECTION_ERROR_TEXT),
        }
    }
}

/// The agent's error as it reads after `"Error: "`. A missing field reads as
/// `undefined` and a `null` one as `null`.
fn error_detail(error: Option<&Value>) -> String {
    match error {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// The two turns a submission appended, plus the request still to be sent.
#[derive(Debug, Clone)]
pub struct Submission {
    pub user: MessageId,
    pub placeholder: MessageId,
    pub request: Request,
}

/// The single owner of the conversation state.
///
/// Clones share the same conversation and agent, so a clone can be moved into a
/// spawned task while this one keeps accepting input. The conversation lock
/// is only ever held for synchronous appends and rewrites, never while waiting
/// on the agent.
pub struct ChatController<A> {
    conversation: Arc<Mutex<Conversation>>,
    api: Arc<A>,
}

impl<A> Clone for ChatController<A> {
    fn clone(&self) -> Self {
        Self {
            conversation: Arc::clone(&self.conversation),
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: AgentApi> ChatController<A> {
    pub fn new(api: A) -> Self {
        Self::with_conversation(api, Conversation::new())
    }

    pub fn with_conversation(api: A, conversation: Conversation) -> Self {
        Self {
            conversation: Arc::new(Mutex::new(conversation)),
            api: Arc::new(api),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Append the user turn and its placeholder. Nothing is sent yet.
    pub fn begin(&self, request: Request) -> Submission {
        let request = normalize_request(request);
        let text = request.to_pretty_json().unwrap_or_else(|err| {
            warn!(error = %err, "could not format request for display");
            String::new()
        });

        let mut conversation = self.lock();
        let user = conversation.push_user(text);
        let placeholder = conversation.push_placeholder();
        Submission {
            user,
            placeholder,
            request,
        }
    }

    /// Send the request and rewrite its placeholder with the outcome.
    pub async fn complete(&self, submission: Submission) -> Result<Message, ConversationError> {
        let result = self.api.execute(&submission.request).await;

        match &result {
            Err(ClientError::Status(status)) => {
                warn!(placeholder = %submission.placeholder, %status, "agent returned an error status")
            }
            Err(err) => {
                warn!(placeholder = %submission.placeholder, error = %err, "could not reach agent")
            }
            Ok(reply) if reply.is_error() => {
                info!(placeholder = %submission.placeholder, "agent reported a failure")
            }
            Ok(reply) => {
                info!(placeholder = %submission.placeholder, steps = reply.steps.len(), "agent replied")
            }
        }

        let resolution = AgentOutcome::from_result(&result).into_resolution();
        let mut conversation = self.lock();
        conversation
            .resolve(submission.placeholder, resolution)
            .cloned()
    }

    /// Append, send, and reconcile one request. Returns the placeholder's id.
    pub async fn submit(&self, request: Request) -> Result<MessageId, ConversationError> {
        let submission = self.begin(request);
        let placeholder = submission.placeholder;
        self.complete(submission).await?;
        Ok(placeholder)
    }

    /// Validate a raw buffer and submit it. A buffer that fails validation
    /// leaves the conversation untouched and sends nothing.
    pub async fn submit_raw(&self, buffer: &str) -> Result<MessageId, SubmitError> {
        let request = parse_request(buffer)?;
        Ok(self.submit(request).await?)
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.lock().messages().to_vec()
    }

    pub fn message(&self, id: MessageId) -> Option<Message> {
        self.lock().get(id).cloned()
    }

    pub fn pending(&self) -> Vec<MessageId> {
        self.lock().pending()
    }

    fn lock(&self) -> MutexGuard<'_, Conversation> {
        // A panic elsewhere cannot leave a half-applied append or rewrite behind.
        self.conversation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
