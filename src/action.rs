//! The action record consumed by reducers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tagged record describing a state-change request.
///
/// `kind` is the discriminant bindings match on; it serializes as `"type"`
/// so actions interoperate with flux-style action streams. `payload`
/// carries an arbitrary value (`Value::Null` when absent) and `error`
/// marks failure payloads for guard handlers.
///
/// Actions are immutable: reducers consume them read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Discriminant tag, e.g. `"ADD_ITEM"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Value carried by the action.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
    /// Whether the payload describes a failure.
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Action {
    /// An action with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Value::Null,
            error: false,
        }
    }

    /// An action carrying a payload.
    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
            error: false,
        }
    }

    /// An error-flagged action, e.g. a failed request carrying its cause.
    pub fn failure(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
            error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_payload_and_error_default() {
        let action: Action = serde_json::from_str(r#"{"type":"RESET"}"#).unwrap();
        assert_eq!(action.kind, "RESET");
        assert!(action.payload.is_null());
        assert!(!action.error);
    }

    #[test]
    fn kind_serializes_as_type() {
        let action = Action::with_payload("ADD", json!("a"));
        let wire = serde_json::to_value(&action).unwrap();
        assert_eq!(wire, json!({ "type": "ADD", "payload": "a" }));
    }

    #[test]
    fn failure_sets_the_error_flag() {
        let action = Action::failure("RECEIVE", json!({ "status": 500 }));
        assert!(action.error);
        let wire = serde_json::to_value(&action).unwrap();
        assert_eq!(wire["error"], json!(true));
    }
}
