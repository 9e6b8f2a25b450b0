use thiserror::Error;

use crate::models::message::MessageId;

/// Reasons a request buffer is rejected before anything is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid JSON. Check commas, quotes, and brackets.")]
    MalformedInput,

    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("Could not decode response body: {0}")]
    Decode(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    #[error("No message with id {0}")]
    UnknownMessage(MessageId),

    #[error("Message {0} is not awaiting a response")]
    NotPending(MessageId),
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conversation(#[from] ConversationError),
}

pub type ValidationResult<T> = Result<T, ValidationError>;
