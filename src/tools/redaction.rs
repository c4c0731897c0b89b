//! Credential scrubbing for tool parameters before they are logged.

use serde_json::{Map, Value};

const REDACTED: &str = "[REDACTED]";

const SENSITIVE_EXACT: &[&str] = &["apikey", "api_key", "api-key", "x-api-key", "authorization"];
const SENSITIVE_SUBSTRINGS: &[&str] = &["token", "secret", "password", "credential"];

fn is_sensitive_key(key: &str) -> bool {
    let lower = key.to_ascii_lowercase();
    SENSITIVE_EXACT.contains(&lower.as_str())
        || SENSITIVE_SUBSTRINGS.iter().any(|s| lower.contains(s))
}

fn redact_object(map: &mut Map<String, Value>) {
    for (key, val) in map.iter_mut() {
        if is_sensitive_key(key) {
            if !val.is_null() {
                *val = Value::String(REDACTED.to_string());
            }
        } else {
            redact_in_place(val);
        }
    }
}

fn redact_in_place(value: &mut Value) {
    match value {
        Value::Object(map) => redact_object(map),
        Value::Array(items) => items.iter_mut().for_each(redact_in_place),
        _ => {}
    }
}

/// Copy of `value` with credential-like keys replaced by `[REDACTED]`.
pub fn redact_sensitive_json(value: &Value) -> Value {
    let mut cloned = value.clone();
    redact_in_place(&mut cloned);
    cloned
}

#[cfg(test)]
mod tests {
    use super::redact_sensitive_json;

    #[test]
    fn redacts_api_key_parameter() {
        let out = redact_sensitive_json(&serde_json::json!({"top": 5, "api_key": "abc123"}));
        assert_eq!(out["api_key"], "[REDACTED]");
        assert_eq!(out["top"], 5);
    }

    #[test]
    fn leaves_null_key_visible() {
        let out = redact_sensitive_json(&serde_json::json!({"api_key": null}));
        assert!(out["api_key"].is_null());
    }

    #[test]
    fn redacts_nested_and_case_insensitive() {
        let out = redact_sensitive_json(&serde_json::json!({
            "headers": [{"APIKey": "k"}, {"Accept": "application/json"}],
            "auth": {"accessToken": "t"}
        }));
        assert_eq!(out["headers"][0]["APIKey"], "[REDACTED]");
        assert_eq!(out["headers"][1]["Accept"], "application/json");
        assert_eq!(out["auth"]["accessToken"], "[REDACTED]");
    }
}
