use reducerkit::{bind_reducer, handler, Action, Reduce, ReducerError};
use serde_json::{json, Value};

#[test]
fn binds_a_handler_to_a_single_action() {
    let bound = bind_reducer("RESET", Some(handler(|_, _, _| json!("reset")))).unwrap();
    let reducer = bound.with_default(json!({}));
    assert_eq!(
        reducer.reduce(Some(json!({})), &Action::new("RESET")),
        json!("reset")
    );
}

#[test]
fn binds_a_handler_to_multiple_actions() {
    let bound = bind_reducer(
        vec!["RESET", "REVERT"],
        Some(handler(|_, _, _| json!("reset"))),
    )
    .unwrap();
    let reducer = bound.with_default(json!({}));
    assert_eq!(
        reducer.reduce(Some(json!({})), &Action::new("RESET")),
        json!("reset")
    );
    assert_eq!(
        reducer.reduce(Some(json!({})), &Action::new("REVERT")),
        json!("reset")
    );
}

#[test]
fn defaults_to_payload_pass_through_for_a_single_action() {
    let reducer = bind_reducer("RESET", None).unwrap().with_default(json!({}));
    let state = reducer.reduce(
        Some(json!({})),
        &Action::with_payload("RESET", json!("passed through")),
    );
    assert_eq!(state, json!("passed through"));
}

#[test]
fn defaults_to_payload_pass_through_for_multiple_actions() {
    let reducer = bind_reducer(vec!["RESET", "REVERT"], None)
        .unwrap()
        .with_default(json!({}));
    let state = reducer.reduce(
        Some(json!({})),
        &Action::with_payload("REVERT", json!("passed through")),
    );
    assert_eq!(state, json!("passed through"));
}

#[test]
fn one_creator_seeds_many_reducers() {
    let creator = bind_reducer("SET", None).unwrap();
    let first = creator.with_default(json!("a"));
    let second = creator.with_default(json!("b"));
    assert_eq!(first.reduce(None, &Action::new("MISS")), json!("a"));
    assert_eq!(second.reduce(None, &Action::new("MISS")), json!("b"));
}

#[test]
fn unset_state_on_a_miss_yields_the_binding_default() {
    let reducer = bind_reducer("HIT", None)
        .unwrap()
        .with_default(json!("default"));
    assert_eq!(reducer.reduce(None, &Action::new("MISS")), json!("default"));
}

#[test]
fn rejects_a_non_string_action_type_with_its_rendering() {
    let err = bind_reducer(Value::Null, Some(handler(|_, _, _| json!(null)))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "action type must be a string, received: null"
    );
}

#[test]
fn rejects_a_numeric_action_type_inside_a_list() {
    let err = bind_reducer(json!(["ADD", 42]), None).unwrap_err();
    assert_eq!(
        err,
        ReducerError::InvalidActionType {
            received: "42".to_string()
        }
    );
}
