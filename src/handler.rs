//! Handler functions invoked when an action matches a binding.

use std::sync::Arc;

use serde_json::Value;

/// Pure state transition: `(state, payload, error) -> new_state`.
///
/// `state` is `None` when the reducer has not produced a state yet.
/// Handlers must be pure; the library never catches a handler panic.
/// Shared behind `Arc` so one binding can seed many reducers.
pub type Handler = Arc<dyn Fn(Option<Value>, &Value, bool) -> Value + Send + Sync>;

/// Wrap a closure as a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(Option<Value>, &Value, bool) -> Value + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The default handler: ignores prior state and returns the payload
/// verbatim as the new state.
pub fn pass_through() -> Handler {
    Arc::new(|_, payload, _| payload.clone())
}
