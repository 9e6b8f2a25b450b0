//! Turns the raw text a user typed into a [`Request`].
//!
//! Parsing is all-or-nothing: malformed JSON is rejected outright, then every
//! blank required field is reported at once, then the optional list fields are
//! coerced into arrays. Nothing here touches the network or the conversation.
use serde_json::{Map, Value};

use crate::errors::{ValidationError, ValidationResult};
use crate::models::request::{Request, REQUIRED_FIELDS};
use crate::render::{display_value, string_form};

pub fn parse_request(buffer: &str) -> ValidationResult<Request> {
    let value: Value =
        serde_json::from_str(buffer).map_err(|_| ValidationError::MalformedInput)?;
    let Value::Object(fields) = value else {
        return Err(ValidationError::MalformedInput);
    };
    request_from_fields(fields)
}

/// Validate and normalize an already-parsed JSON object.
pub fn request_from_fields(mut fields: Map<String, Value>) -> ValidationResult<Request> {
    let prompt = required_field(&fields, "prompt");
    let address = required_field(&fields, "address");
    let payment_token = required_field(&fields, "payment_token");

    let (prompt, address, payment_token) = match (prompt, address, payment_token) {
        (Some(prompt), Some(address), Some(payment_token)) => (prompt, address, payment_token),
        (prompt, address, payment_token) => {
            let missing = REQUIRED_FIELDS
                .into_iter()
                .zip([prompt.is_none(), address.is_none(), payment_token.is_none()])
                .filter_map(|(name, is_missing)| is_missing.then_some(name))
                .collect();
            return Err(ValidationError::MissingFields(missing));
        }
    };
    for name in REQUIRED_FIELDS {
        fields.shift_remove(name);
    }

    let user_preferences = normalize_list(fields.shift_remove("user_preferences"));
    let disliked_titles = normalize_list(fields.shift_remove("disliked_titles"));
    let already_read_titles = normalize_list(fields.shift_remove("already_read_titles"));

    Ok(Request {
        prompt,
        address,
        payment_token,
        user_preferences,
        disliked_titles,
        already_read_titles,
        extra: fields,
    })
}

/// The string value of a required field, or `None` if it counts as missing.
fn required_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    let value = string_form(fields.get(name)?)?;
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Coerce an optional list field into an array.
///
/// Absent, `null` and `""` become empty; an array passes through untouched; any
/// other value becomes a single-element array holding its string form. Note that
/// `0` and `false` are not treated as empty and become `["0"]` and `["false"]`.
pub fn normalize_list(value: Option<Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            let text = string_form(&other).unwrap_or_else(|| display_value(&other));
            vec![Value::String(text)]
        }
    }
}

/// Re-apply list normalization to a request. A request produced by
/// [`parse_request`] comes back unchanged.
pub fn normalize_request(request: Request) -> Request {
    Request {
        user_preferences: normalize_list(Some(Value::Array(request.user_preferences))),
        disliked_titles: normalize_list(Some(Value::Array(request.disliked_titles))),
        already_read_titles: normalize_list(Some(Value::Array(request.already_read_titles))),
        ..request
    }
}
