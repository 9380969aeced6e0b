//! Composable action-keyed reducers for unidirectional state updates.
//!
//! A reducer is a pure `(state, action) -> state` function. This crate
//! builds one from declarative bindings: each binding pairs one or more
//! action types with a handler, and a composition folds the bindings over
//! state in declaration order.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State
//!    ↑                     │
//!    └──── host dispatch ──┘
//! ```
//!
//! - **Binding** ([`bind_reducer`]): action types + handler
//! - **Composition** ([`create_reducer`]): default value + bindings
//! - **Guards** ([`when_error`] / [`when_success`]): gate a handler on the
//!   action's error flag
//! - **Extension** ([`extend_reducer`]): layer bindings over an existing
//!   reducer without touching its definition
//!
//! The host owns dispatch, storage, and persistence; the crate only
//! produces the reducing function.
//!
//! # Example
//!
//! ```
//! use reducerkit::{bind_reducer, create_reducer, handler, Action, Reduce};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), reducerkit::ReducerError> {
//! let reducer = create_reducer(
//!     json!([]),
//!     [
//!         bind_reducer("ADD", Some(handler(|state, payload, _| {
//!             let mut items = state.unwrap_or_else(|| json!([]));
//!             items.as_array_mut().expect("list state").push(payload.clone());
//!             items
//!         })))?,
//!         bind_reducer("RESET", Some(handler(|_, _, _| json!([]))))?,
//!     ],
//! );
//!
//! let state = reducer.reduce(None, &Action::with_payload("ADD", json!("a")));
//! assert_eq!(state, json!(["a"]));
//! assert_eq!(reducer.reduce(Some(state), &Action::new("RESET")), json!([]));
//! # Ok(())
//! # }
//! ```

mod action;
mod bind;
mod compose;
mod error;
mod extend;
mod guard;
mod handler;

pub use action::Action;
pub use bind::{bind_reducer, BoundReducer, BoundReducerCreator};
pub use compose::{create_reducer, reducer_fn, ComposedReducer, FnReducer, Reduce};
pub use error::ReducerError;
pub use extend::{extend_reducer, Extend, ExtendedReducer};
pub use guard::{when_error, when_success};
pub use handler::{handler, pass_through, Handler};
