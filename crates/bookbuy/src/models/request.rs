use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The request skeleton offered to the user for editing.
pub const DEFAULT_REQUEST_TEMPLATE: &str = r#"{
  "prompt": "",
  "address": "",
  "payment_token": "",
  "user_preferences": [],
  "disliked_titles": [],
  "already_read_titles": []
}"#;

/// Required string fields, in the order they are checked and reported.
pub const REQUIRED_FIELDS: [&str; 3] = ["prompt", "address", "payment_token"];

/// Optional list fields that are always sent as arrays.
pub const LIST_FIELDS: [&str; 3] = ["user_preferences", "disliked_titles", "already_read_titles"];

/// The payload sent to `/api/execute`.
///
/// Build one with [`crate::validator::parse_request`]; it guarantees the required
/// fields are non-blank and the list fields are arrays. Any other keys the user
/// typed are kept in `extra` and forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub prompt: String,
    pub address: String,
    pub payment_token: String,
    #[serde(default)]
    pub user_preferences: Vec<Value>,
    #[serde(default)]
    pub disliked_titles: Vec<Value>,
    #[serde(default)]
    pub already_read_titles: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Request {
    pub fn new<P, A, T>(prompt: P, address: A, payment_token: T) -> Self
    where
        P: Into<String>,
        A: Into<String>,
        T: Into<String>,
    {
        Request {
            prompt: prompt.into(),
            address: address.into(),
            payment_token: payment_token.into(),
            user_preferences: Vec::new(),
            disliked_titles: Vec::new(),
            already_read_titles: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_user_preferences<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_preferences = string_values(items);
        self
    }

    pub fn with_disliked_titles<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disliked_titles = string_values(items);
        self
    }

    pub fn with_already_read_titles<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.already_read_titles = string_values(items);
        self
    }

    /// The user-facing form of the request: two-space indented JSON
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn string_values<I, S>(items: I) -> Vec<Value>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(|s| Value::String(s.into())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_parses_with_all_fields() {
        let value: Value = serde_json::from_str(DEFAULT_REQUEST_TEMPLATE).unwrap();
        let obj = value.as_object().unwrap();
        for field in REQUIRED_FIELDS.iter().chain(LIST_FIELDS.iter()) {
            assert!(obj.contains_key(*field), "template is missing {}", field);
        }
    }

    #[test]
    fn test_serialization_keeps_extra_keys() {
        let mut request = Request::new("dune", "1 Main St", "tok_1").with_user_preferences(["sci-fi"]);
        request
            .extra
            .insert("book_preferences".to_string(), json!(["long"]));

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "prompt": "dune",
                "address": "1 Main St",
                "payment_token": "tok_1",
                "user_preferences": ["sci-fi"],
                "disliked_titles": [],
                "already_read_titles": [],
                "book_preferences": ["long"]
            })
        );
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let text = Request::new("dune", "1 Main St", "tok_1")
            .to_pretty_json()
            .unwrap();
        assert!(text.starts_with("{\n  \"prompt\": \"dune\",\n  \"address\""));
        assert!(text.contains("\n  \"user_preferences\": [],"));
    }
}
