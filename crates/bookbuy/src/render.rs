//! Turning agent-supplied JSON into display text.
//!
//! The agent is free to put structured values where text is expected (a message
//! body, a step's prompt or response). None of these helpers fail: anything that
//! is not already a string is serialized to JSON.
use serde_json::{Number, Value};

/// Text for a message body. Strings verbatim, `null` as nothing, anything else as
/// two-space indented JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Text for a step's module, prompt or response. Strings verbatim, `null` as
/// nothing, anything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The string a scalar coerces to, or `None` for `null`, arrays and objects.
pub fn string_form(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_form(n)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn number_form(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_text() {
        assert_eq!(display_text(&json!("Bought 'Dune'")), "Bought 'Dune'");
        assert_eq!(display_text(&Value::Null), "");
        assert_eq!(display_text(&json!({"a": 1})), "{\n  \"a\": 1\n}");
        assert_eq!(display_text(&json!(3)), "3");
    }

    #[test]
    fn test_display_value_is_compact() {
        assert_eq!(display_value(&json!("found 3 matches")), "found 3 matches");
        assert_eq!(
            display_value(&json!({"status": "found", "offers": [1, 2]})),
            r#"{"status":"found","offers":[1,2]}"#
        );
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!(true)), "true");
    }

    #[test]
    fn test_string_form_scalars() {
        assert_eq!(string_form(&json!("tok")), Some("tok".to_string()));
        assert_eq!(string_form(&json!(0)), Some("0".to_string()));
        assert_eq!(string_form(&json!(false)), Some("false".to_string()));
        assert_eq!(string_form(&json!(12.5)), Some("12.5".to_string()));
        assert_eq!(string_form(&json!(2.0)), Some("2".to_string()));
        assert_eq!(string_form(&json!(-0.0)), Some("0".to_string()));
    }

    #[test]
    fn test_string_form_rejects_non_scalars() {
        assert_eq!(string_form(&Value::Null), None);
        assert_eq!(string_form(&json!([])), None);
        assert_eq!(string_form(&json!({"a": "b"})), None);
    }
}
