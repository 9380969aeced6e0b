//! Folding bound reducers into a single reducer.

use serde_json::Value;

use crate::action::Action;
use crate::bind::{BoundReducer, BoundReducerCreator};

/// A `(state, action) -> state` reducing function.
///
/// `state` is `None` on the first dispatch when the host supplies no
/// initial state; implementations substitute their default value.
/// Implementations hold no mutable state, so a reducer can be shared
/// across threads freely.
pub trait Reduce: Send + Sync {
    /// Compute the new state for `action`.
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value;
}

/// Fold `creators` into a single reducer with `default` as the initial
/// state.
///
/// Every bound reducer runs on every dispatch, in declaration order,
/// threading state left to right. There is no short-circuit: a second
/// binding on the same action type sees the first one's output, which is
/// how explicit chaining works.
pub fn create_reducer(
    default: Value,
    creators: impl IntoIterator<Item = BoundReducerCreator>,
) -> ComposedReducer {
    let reducers: Vec<BoundReducer> = creators
        .into_iter()
        .map(|creator| creator.with_default(default.clone()))
        .collect();
    tracing::debug!(bindings = reducers.len(), "reducer composed");
    ComposedReducer { reducers, default }
}

/// Reducer produced by [`create_reducer`].
#[derive(Clone)]
pub struct ComposedReducer {
    reducers: Vec<BoundReducer>,
    default: Value,
}

impl Reduce for ComposedReducer {
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value {
        let mut state = state;
        for bound in &self.reducers {
            state = Some(bound.reduce(state, action));
        }
        state.unwrap_or_else(|| self.default.clone())
    }
}

/// Adapt a plain closure into a [`Reduce`] implementation, so
/// [`extend_reducer`](crate::extend_reducer) can layer bindings over a
/// reducer the host wrote by hand.
pub fn reducer_fn<F>(f: F) -> FnReducer<F>
where
    F: Fn(Option<Value>, &Action) -> Value + Send + Sync,
{
    FnReducer(f)
}

/// See [`reducer_fn`].
pub struct FnReducer<F>(F);

impl<F> Reduce for FnReducer<F>
where
    F: Fn(Option<Value>, &Action) -> Value + Send + Sync,
{
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value {
        (self.0)(state, action)
    }
}
