//! Binding action types to handlers.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::action::Action;
use crate::compose::Reduce;
use crate::error::ReducerError;
use crate::handler::{pass_through, Handler};

/// Associate one or more action types with a handler.
///
/// `types` accepts a single string, a sequence of strings, or dynamic
/// JSON carrying either, so bindings can be driven by config or wire
/// data. Every element must be a string; anything else fails with
/// [`ReducerError::InvalidActionType`] naming the offending value.
///
/// When `handler` is `None` the binding passes the action payload
/// through as the new state.
pub fn bind_reducer(
    types: impl Into<Value>,
    handler: Option<Handler>,
) -> Result<BoundReducerCreator, ReducerError> {
    let kinds = validate_kinds(types.into())?;
    Ok(BoundReducerCreator {
        kinds,
        handler: handler.unwrap_or_else(pass_through),
    })
}

fn validate_kinds(spec: Value) -> Result<Vec<String>, ReducerError> {
    let items = match spec {
        Value::Array(items) => items,
        other => vec![other],
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(kind) => Ok(kind),
            other => Err(ReducerError::InvalidActionType {
                received: other.to_string(),
            }),
        })
        .collect()
}

/// A validated binding, awaiting the default value a composition
/// supplies.
///
/// Cloning is cheap: the handler is shared, so one creator can seed many
/// reducers.
#[derive(Clone)]
pub struct BoundReducerCreator {
    kinds: Vec<String>,
    handler: Handler,
}

// The handler is an `Arc<dyn Fn>`, so `Debug` cannot be derived; print
// the bound types and elide the rest.
impl fmt::Debug for BoundReducerCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundReducerCreator")
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}

impl BoundReducerCreator {
    /// Instantiate a reducer that substitutes `default` for unset state.
    pub fn with_default(&self, default: Value) -> BoundReducer {
        BoundReducer {
            kinds: self.kinds.clone(),
            handler: Arc::clone(&self.handler),
            default,
        }
    }

    /// The action types this binding responds to.
    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }
}

/// A handler bound to its action types and a default value.
///
/// On a matching action the handler runs with the incoming state, the
/// action's payload, and its error flag. On a miss the state passes
/// through unchanged; unset state yields the default instead.
#[derive(Clone)]
pub struct BoundReducer {
    kinds: Vec<String>,
    handler: Handler,
    default: Value,
}

impl fmt::Debug for BoundReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundReducer")
            .field("kinds", &self.kinds)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

impl Reduce for BoundReducer {
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value {
        if self.kinds.iter().any(|kind| kind == &action.kind) {
            tracing::trace!(kind = %action.kind, types = ?self.kinds, "binding matched");
            (self.handler)(state, &action.payload, action.error)
        } else {
            state.unwrap_or_else(|| self.default.clone())
        }
    }
}
