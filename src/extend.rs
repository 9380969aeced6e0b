//! Layering extra bindings over an existing reducer.

use serde_json::Value;

use crate::action::Action;
use crate::bind::BoundReducerCreator;
use crate::compose::{create_reducer, ComposedReducer, Reduce};

/// Start extending `base` with additional bindings.
///
/// The base reducer runs first and unconditionally on every action; the
/// extra bindings are applied to its output. The base's own definition is
/// untouched, so a reducer assembled elsewhere can gain bindings without
/// being rebuilt.
pub fn extend_reducer<R: Reduce>(base: R) -> Extend<R> {
    Extend { base }
}

/// Builder returned by [`extend_reducer`].
pub struct Extend<R> {
    base: R,
}

impl<R: Reduce> Extend<R> {
    /// Compose `creators` with `default` exactly as
    /// [`create_reducer`](crate::create_reducer) does, and layer the
    /// result over the base.
    pub fn create(
        self,
        default: Value,
        creators: impl IntoIterator<Item = BoundReducerCreator>,
    ) -> ExtendedReducer<R> {
        ExtendedReducer {
            base: self.base,
            extra: create_reducer(default, creators),
        }
    }
}

/// Reducer produced by [`Extend::create`].
pub struct ExtendedReducer<R> {
    base: R,
    extra: ComposedReducer,
}

impl<R: Reduce> Reduce for ExtendedReducer<R> {
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value {
        let base_state = self.base.reduce(state, action);
        self.extra.reduce(Some(base_state), action)
    }
}
