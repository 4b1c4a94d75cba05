use diagnostics::CollectingSink;
use natives::{
    BindError, CallError, ErrorKind, FunctionSignature, Kind, NativeFailure, PendingCall, Value,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ======================================================================
// Helpers
// ======================================================================

/// Entry point that records every argument list it receives.
fn recording() -> (FunctionSignature, Arc<Mutex<Vec<Vec<Value>>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    let sig = FunctionSignature::new(
        move |args: Vec<Value>| {
            log.lock().unwrap().push(args.clone());
            Ok(Value::list(args))
        },
        2,
    );
    (sig, seen)
}

/// `f(a = 1, b = 2)`
fn ab_with_defaults() -> (FunctionSignature, Arc<Mutex<Vec<Vec<Value>>>>) {
    let (sig, seen) = recording();
    let sig = sig
        .parameter("a", Kind::Integer, Some(Value::integer(1)))
        .and_then(|s| s.parameter("b", Kind::Integer, Some(Value::integer(2))))
        .unwrap();
    (sig, seen)
}

/// Counting stub with two required parameters.
fn counting() -> (FunctionSignature, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let sig = FunctionSignature::new(
        move |_args: Vec<Value>| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Value::bool(true))
        },
        2,
    )
    .parameter("p", Kind::Integer, None)
    .and_then(|s| s.parameter("q", Kind::Integer, None))
    .unwrap();
    (sig, calls)
}

// ======================================================================
// Defaults and binding
// ======================================================================

#[test]
fn immediate_execute_uses_defaults() {
    let (sig, seen) = ab_with_defaults();
    let sink = CollectingSink::new();
    let call = PendingCall::new("f", &sig, &sink);

    assert!(call.is_complete());
    let out = call.execute().unwrap();

    assert_eq!(out, Value::list(vec![Value::integer(1), Value::integer(2)]));
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[vec![Value::integer(1), Value::integer(2)]]
    );
    assert!(sink.is_empty());
}

#[test]
fn named_binding_keeps_earlier_defaults() {
    let (sig, seen) = ab_with_defaults();
    let sink = CollectingSink::new();
    let mut call = PendingCall::new("f", &sig, &sink);

    let b = call.find_parameter("b").unwrap();
    call.jump_to(b).unwrap();
    call.bind_current(Value::integer(5)).unwrap();
    call.execute().unwrap();

    assert_eq!(
        seen.lock().unwrap()[0],
        vec![Value::integer(1), Value::integer(5)]
    );
}

#[test]
fn positional_binding_advances_cursor() {
    let (sig, _) = ab_with_defaults();
    let sink = CollectingSink::new();
    let mut call = PendingCall::new("f", &sig, &sink);

    assert_eq!(call.current_index(), 0);
    assert_eq!(call.current_parameter_type(), Kind::Integer);
    call.bind_current(Value::integer(10)).unwrap();
    assert_eq!(call.current_index(), 1);
    call.bind_current(Value::integer(20)).unwrap();
    assert_eq!(call.current_index(), 2);

    assert_eq!(
        call.execute().unwrap(),
        Value::list(vec![Value::integer(10), Value::integer(20)])
    );
}

#[test]
fn rebinding_a_slot_replaces_previous_value() {
    let (sig, _) = ab_with_defaults();
    let sink = CollectingSink::new();
    let mut call = PendingCall::new("f", &sig, &sink);

    call.bind_current(Value::integer(7)).unwrap();
    call.jump_to(0).unwrap();
    call.bind_current(Value::integer(8)).unwrap();

    assert_eq!(
        call.execute().unwrap(),
        Value::list(vec![Value::integer(8), Value::integer(2)])
    );
}

#[test]
fn calls_get_independent_default_copies() {
    let mut sig = FunctionSignature::new(|args: Vec<Value>| Ok(Value::list(args)), 1);
    sig.declare_parameter(0, "xs", Kind::List, Some(Value::list(vec![])))
        .unwrap();
    let sink = CollectingSink::new();

    let mut first = PendingCall::new("f", &sig, &sink).execute().unwrap();
    first.as_list_mut().unwrap()[0]
        .as_list_mut()
        .unwrap()
        .push(Value::integer(1));

    let second = PendingCall::new("f", &sig, &sink).execute().unwrap();
    assert_eq!(second, Value::list(vec![Value::list(vec![])]));
    assert_eq!(sig.default_value(0), Ok(Some(Value::list(vec![]))));
}

// ======================================================================
// Too many parameters
// ======================================================================

#[test]
fn extra_positional_argument_is_rejected_and_returned() {
    let (sig, seen) = ab_with_defaults();
    let sink = CollectingSink::new();
    let mut call = PendingCall::new("f", &sig, &sink);

    call.bind_current(Value::integer(3)).unwrap();
    call.bind_current(Value::integer(4)).unwrap();
    let BindError { value, error } = call.bind_current(Value::text("extra")).unwrap_err();

    assert_eq!(value, Value::text("extra"));
    assert_eq!(
        error,
        CallError::TooManyParameters {
            function: "f".into(),
            count: 2
        }
    );
    assert_eq!(sink.kinds(), vec![ErrorKind::TooManyParameters]);
    assert_eq!(call.current_index(), 2);

    // The call is still usable and the bound slots are intact.
    call.execute().unwrap();
    assert_eq!(
        seen.lock().unwrap()[0],
        vec![Value::integer(3), Value::integer(4)]
    );
}

#[test]
fn current_type_past_end_is_error_marker() {
    let (sig, _) = ab_with_defaults();
    let sink = CollectingSink::new();
    let mut call = PendingCall::new("f", &sig, &sink);
    call.jump_to(2).unwrap();

    assert_eq!(call.current_parameter_type(), Kind::Error);
    assert_eq!(sink.kinds(), vec![ErrorKind::TooManyParameters]);
}

// ======================================================================
// Cursor validation
// ======================================================================

#[test]
fn jump_past_parameter_count_is_rejected() {
    let (sig, _) = ab_with_defaults();
    let sink = CollectingSink::new();
    let mut call = PendingCall::new("f", &sig, &sink);
    call.bind_current(Value::integer(9)).unwrap();

    let err = call.jump_to(3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(call.current_index(), 1, "cursor must not move");
    assert_eq!(sink.kinds(), vec![ErrorKind::IndexOutOfRange]);
}

#[test]
fn jump_to_unknown_name_is_reported() {
    let (sig, _) = ab_with_defaults();
    let sink = CollectingSink::new();
    let mut call = PendingCall::new("f", &sig, &sink);

    assert_eq!(call.find_parameter("c"), None);
    let err = call.jump_to_name("c").unwrap_err();
    assert_eq!(
        err,
        CallError::UnknownParameter {
            function: "f".into(),
            name: "c".into()
        }
    );
    call.jump_to_name("b").unwrap();
    assert_eq!(call.current_index(), 1);
}

// ======================================================================
// Missing parameters and failures
// ======================================================================

#[test]
fn missing_parameter_aborts_without_invoking() {
    let (sig, calls) = counting();
    let sink = CollectingSink::new();
    let mut call = PendingCall::new("g", &sig, &sink);
    call.bind_current(Value::integer(1)).unwrap();

    assert!(!call.is_complete());
    assert_eq!(call.missing_parameters(), vec!["q"]);

    let err = call.execute().unwrap_err();
    assert_eq!(
        err,
        CallError::MissingRequiredParameter {
            function: "g".into(),
            parameter: "q".into()
        }
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let reported = sink.take();
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0].kind, ErrorKind::MissingRequiredParameter);
    assert_eq!(reported[0].function.as_deref(), Some("g"));
    assert!(reported[0].message.contains("`q`"));
}

#[test]
fn first_missing_parameter_is_the_one_reported() {
    let (sig, calls) = counting();
    let sink = CollectingSink::new();
    let err = PendingCall::new("g", &sig, &sink).execute().unwrap_err();

    assert!(matches!(
        err,
        CallError::MissingRequiredParameter { ref parameter, .. } if parameter == "p"
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn complete_call_invokes_exactly_once() {
    let (sig, calls) = counting();
    let sink = CollectingSink::new();
    let mut call = PendingCall::new("g", &sig, &sink);
    call.bind_current(Value::integer(1)).unwrap();
    call.bind_current(Value::integer(2)).unwrap();

    assert_eq!(call.execute(), Ok(Value::bool(true)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn entry_point_failure_becomes_execution_failed() {
    let sig = FunctionSignature::new(|_| Err(NativeFailure::new("no equilibrium")), 0);
    let sink = CollectingSink::new();

    let err = PendingCall::new("Solve", &sig, &sink).execute().unwrap_err();
    assert_eq!(
        err,
        CallError::ExecutionFailed {
            function: "Solve".into(),
            failure: NativeFailure::new("no equilibrium"),
        }
    );
    assert_eq!(sink.kinds(), vec![ErrorKind::ExecutionFailed]);
}
