use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::Display;

use super::step::Step;

/// Text an agent turn shows until its request settles.
pub const PENDING_TEXT: &str = "Thinking...";

/// Identifier of a message within one conversation. Handed out by
/// [`crate::conversation::Conversation`] and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single turn in the conversation
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub created: i64,
    pub text: Value,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Message {
    /// Create a new user message with the current timestamp
    pub fn user<S: Into<String>>(id: MessageId, text: S) -> Self {
        Message {
            id,
            sender: Sender::User,
            created: Utc::now().timestamp(),
            text: Value::String(text.into()),
            steps: Vec::new(),
        }
    }

    /// Create a new agent message with the current timestamp
    pub fn agent<S: Into<String>>(id: MessageId, text: S) -> Self {
        Message {
            id,
            sender: Sender::Agent,
            created: Utc::now().timestamp(),
            text: Value::String(text.into()),
            steps: Vec::new(),
        }
    }

    /// Create the agent turn that stands in for a response still on its way
    pub fn placeholder(id: MessageId) -> Self {
        Self::agent(id, PENDING_TEXT)
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    pub fn as_text(&self) -> Option<&str> {
        self.text.as_str()
    }
}
