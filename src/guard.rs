//! Guards that gate a handler on the action's error flag.

use std::sync::Arc;

use serde_json::Value;

use crate::handler::{pass_through, Handler};

/// Delegate to `inner` only for error-flagged actions; otherwise keep the
/// state unchanged. A non-firing guard with no prior state yields
/// `Value::Null`.
///
/// With no inner handler the error payload passes through as the new
/// state, which covers the common "store the failure" case.
pub fn when_error(inner: Option<Handler>) -> Handler {
    let inner = inner.unwrap_or_else(pass_through);
    Arc::new(move |state, payload, error| {
        if error {
            inner(state, payload, error)
        } else {
            keep(state)
        }
    })
}

/// Inverse of [`when_error`]: delegate only for success actions. A
/// non-firing guard with no prior state yields `Value::Null`.
pub fn when_success(inner: Option<Handler>) -> Handler {
    let inner = inner.unwrap_or_else(pass_through);
    Arc::new(move |state, payload, error| {
        if error {
            keep(state)
        } else {
            inner(state, payload, error)
        }
    })
}

// A non-firing guard leaves state alone; unset state collapses to null.
fn keep(state: Option<Value>) -> Value {
    state.unwrap_or(Value::Null)
}
