//! These models represent the objects passed between the chat front-end and the agent
//!
//! - `Request` is what the user fills in and what goes over the wire to `/api/execute`
//! - `Message` is one display turn in the conversation, user or agent
//! - `Step` is one action the agent reports having taken while handling a request
//!
//! The agent's JSON is untyped on our side: anything structured stays a `serde_json::Value`
//! and is only turned into text at display time.
pub mod message;
pub mod request;
pub mod step;
