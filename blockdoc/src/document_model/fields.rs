//! Lenient accessors over a block's `data` object
//!
//! Block data comes from editors and AI output that don't agree on exact
//! shapes, so every accessor returns a fallback instead of failing.

use serde_json::{Map, Value};

/// String field, or empty string when missing or not a string
pub(crate) fn text(data: &Map<String, Value>, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// String field that is present and non-empty
pub(crate) fn non_empty_text(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Boolean field, `false` unless literally `true`
pub(crate) fn flag(data: &Map<String, Value>, key: &str) -> bool {
    data.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Array field, empty when missing or not an array
pub(crate) fn array<'a>(data: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Text form of a scalar cell value
///
/// Strings are taken as-is, numbers and booleans use their JSON text,
/// `null` and containers become empty.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// JSON type name, for error messages
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_text_falls_back_to_empty() {
        let d = data(json!({"text": 5, "ok": "yes"}));
        assert_eq!(text(&d, "text"), "");
        assert_eq!(text(&d, "missing"), "");
        assert_eq!(text(&d, "ok"), "yes");
    }

    #[test]
    fn test_non_empty_text() {
        let d = data(json!({"a": "", "b": "x"}));
        assert_eq!(non_empty_text(&d, "a"), None);
        assert_eq!(non_empty_text(&d, "b"), Some("x".to_string()));
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("a")), "a");
        assert_eq!(scalar_text(&json!(12)), "12");
        assert_eq!(scalar_text(&json!(true)), "true");
        assert_eq!(scalar_text(&json!(null)), "");
        assert_eq!(scalar_text(&json!([1])), "");
    }

    #[test]
    fn test_array_and_flag() {
        let d = data(json!({"items": ["a"], "items2": "nope", "on": true, "off": "true"}));
        assert_eq!(array(&d, "items").len(), 1);
        assert!(array(&d, "items2").is_empty());
        assert!(flag(&d, "on"));
        assert!(!flag(&d, "off"));
    }
}
