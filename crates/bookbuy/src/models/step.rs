use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::render::display_value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// One action the agent took while handling a request, surfaced for transparency
pub struct Step {
    pub module: String,
    pub prompt: Value,
    pub response: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt: Option<u64>,
}

impl Step {
    pub fn new<S: Into<String>>(module: S, prompt: Value, response: Value) -> Self {
        Step {
            module: module.into(),
            prompt,
            response,
            attempt: None,
        }
    }

    pub fn with_attempt(mut self, attempt: u64) -> Self {
        self.attempt = Some(attempt);
        self
    }

    /// Build a step from whatever the agent sent, defaulting anything missing or mistyped
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Step::default();
        };

        let module = match obj.get("module") {
            None | Some(Value::Null) => String::new(),
            Some(other) => display_value(other),
        };

        Step {
            module,
            prompt: obj.get("prompt").cloned().unwrap_or(Value::Null),
            response: obj.get("response").cloned().unwrap_or(Value::Null),
            attempt: obj.get("attempt").and_then(Value::as_u64),
        }
    }

    /// Parse the `steps` field of an agent response; anything but an array yields no steps
    pub fn list_from_value(value: Option<&Value>) -> Vec<Step> {
        match value {
            Some(Value::Array(items)) => items.iter().map(Step::from_value).collect(),
            _ => Vec::new(),
        }
    }
}
