use serde_json::Value;

use crate::models::step::Step;

/// The body of a response from `/api/execute`.
///
/// Expected shape is `{status, response?, steps?, error?}`, but the body is read
/// leniently: a missing or mistyped field falls back to its default instead of
/// failing the whole exchange.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentReply {
    pub status: Option<String>,
    pub response: Value,
    pub steps: Vec<Step>,
    pub error: Option<Value>,
}

impl AgentReply {
    pub fn from_value(body: &Value) -> Self {
        AgentReply {
            status: body
                .get("status")
                .and_then(Value::as_str)
                .map(str::to_string),
            response: body.get("response").cloned().unwrap_or(Value::Null),
            steps: Step::list_from_value(body.get("steps")),
            error: body.get("error").cloned(),
        }
    }

    /// A successful reply carrying the given text and steps.
    pub fn ok<S: Into<String>>(response: S, steps: Vec<Step>) -> Self {
        AgentReply {
            status: Some("ok".to_string()),
            response: Value::String(response.into()),
            steps,
            error: None,
        }
    }

    /// A reply in which the agent reports it could not complete the request.
    pub fn failed<S: Into<String>>(error: S) -> Self {
        AgentReply {
            status: Some("error".to_string()),
            response: Value::Null,
            steps: Vec::new(),
            error: Some(Value::String(error.into())),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}
