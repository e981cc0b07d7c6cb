// src/health/status.rs
use serde::Deserialize;
use serde_json::{Map, Value};

/// Body returned by the deployed service's health endpoint.
///
/// Extra fields are ignored. `ok` is required and must be a boolean, and
/// the body must be a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

impl HealthResponse {
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        // Derived struct impls also accept the sequence form (`[true]`).
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_unknown_fields() {
        let resp = HealthResponse::parse(br#"{"ok": true, "message": "API is running"}"#).unwrap();
        assert!(resp.ok);
    }

    #[test]
    fn test_false_flag_parses() {
        let resp = HealthResponse::parse(br#"{"ok": false}"#).unwrap();
        assert!(!resp.ok);
    }

    #[test]
    fn test_missing_flag_is_rejected() {
        let err = HealthResponse::parse(br#"{"message": "API is running"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `ok`"));
    }

    #[test]
    fn test_string_flag_is_rejected() {
        assert!(HealthResponse::parse(br#"{"ok": "true"}"#).is_err());
    }

    #[test]
    fn test_numeric_flag_is_rejected() {
        assert!(HealthResponse::parse(br#"{"ok": 1}"#).is_err());
    }

    #[test]
    fn test_null_flag_is_rejected() {
        assert!(HealthResponse::parse(br#"{"ok": null}"#).is_err());
    }

    #[test]
    fn test_array_body_is_rejected() {
        assert!(HealthResponse::parse(b"[true]").is_err());
    }

    #[test]
    fn test_array_with_false_is_rejected() {
        assert!(HealthResponse::parse(b"[false]").is_err());
    }

    #[test]
    fn test_bare_boolean_is_rejected() {
        assert!(HealthResponse::parse(b"true").is_err());
    }

    #[test]
    fn test_non_json_is_rejected() {
        assert!(HealthResponse::parse(b"not json").is_err());
    }

    #[test]
    fn test_empty_body_is_rejected() {
        assert!(HealthResponse::parse(b"").is_err());
    }
}
