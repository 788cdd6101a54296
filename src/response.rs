//! Remote responses as shown in the playground.
//!
//! The shape of a response belongs to the remote API. This module only wraps
//! the JSON value, decides which status badge it earns, and pretty-prints it.

use serde_json::{Value, json};

/// Badge shown next to the response pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Error => "Error",
        }
    }
}

/// A response body, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult(Value);

impl ApiResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Locally produced failure: `{"success": false, "error": <message>}`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self(json!({ "success": false, "error": message.into() }))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Only an explicit `"success": true` counts.
    pub fn is_success(&self) -> bool {
        self.0.get("success").and_then(Value::as_bool) == Some(true)
    }

    pub fn status(&self) -> Status {
        if self.is_success() {
            Status::Success
        } else {
            Status::Error
        }
    }

    /// Human-readable failure text, from `error` or (for auth failures) `msg`.
    pub fn error_message(&self) -> Option<&str> {
        ["error", "msg"]
            .iter()
            .find_map(|field| self.0.get(*field).and_then(Value::as_str))
    }

    /// API key issued by the registration endpoint.
    ///
    /// The backend replies either with an object or with
    /// `[{"message": .., "api_key": ..}, 201]`; both are accepted.
    pub fn api_key(&self) -> Option<&str> {
        fn key_of(v: &Value) -> Option<&str> {
            v.get("api_key").and_then(Value::as_str)
        }

        let key = match &self.0 {
            Value::Array(items) => items.iter().find_map(key_of),
            other => key_of(other),
        };
        key.filter(|k| !k.is_empty())
    }

    /// Two-space indented JSON, keys in the order the server sent them.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Value> for ApiResult {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_badge() {
        let result: ApiResult = serde_json::from_str::<Value>(r#"{"success":true,"html":"<html></html>"}"#)
            .unwrap()
            .into();
        assert!(result.is_success());
        assert_eq!(result.status().label(), "Success");
    }

    #[test]
    fn test_pretty_keeps_server_order() {
        let value: Value = serde_json::from_str(r#"{"success":true,"html":"<html></html>"}"#).unwrap();
        let result = ApiResult::new(value);
        assert_eq!(
            result.pretty(),
            "{\n  \"success\": true,\n  \"html\": \"<html></html>\"\n}"
        );
    }

    #[test]
    fn test_missing_success_is_error() {
        let result = ApiResult::new(json!({ "msg": "Invalid API key" }));
        assert_eq!(result.status(), Status::Error);
        assert_eq!(result.error_message(), Some("Invalid API key"));
    }

    #[test]
    fn test_truthy_but_not_true_is_error() {
        assert!(!ApiResult::new(json!({ "success": "yes" })).is_success());
        assert!(!ApiResult::new(json!([true])).is_success());
        assert!(!ApiResult::new(Value::Null).is_success());
    }

    #[test]
    fn test_failure_shape() {
        let result = ApiResult::failure("connection refused");
        assert_eq!(
            result.value(),
            &json!({ "success": false, "error": "connection refused" })
        );
        assert_eq!(result.error_message(), Some("connection refused"));
    }

    #[test]
    fn test_api_key_from_object() {
        let result = ApiResult::new(json!({ "message": "ok", "api_key": "abc123" }));
        assert_eq!(result.api_key(), Some("abc123"));
    }

    #[test]
    fn test_api_key_from_wrapped_reply() {
        let result = ApiResult::new(json!([{ "message": "ok", "api_key": "abc123" }, 201]));
        assert_eq!(result.api_key(), Some("abc123"));
    }

    #[test]
    fn test_api_key_absent_or_blank() {
        assert_eq!(ApiResult::new(json!({ "error": "Name and email are required" })).api_key(), None);
        assert_eq!(ApiResult::new(json!({ "api_key": "" })).api_key(), None);
        assert_eq!(ApiResult::new(json!({ "api_key": 42 })).api_key(), None);
    }
}
