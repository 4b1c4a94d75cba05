use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, ErrorKind, NullSink, TracingSink};
use std::sync::Arc;

#[test]
fn collecting_sink_keeps_report_order() {
    let sink = CollectingSink::new();
    sink.report(Diagnostic::new(ErrorKind::TooManyParameters, "first"));
    sink.report(Diagnostic::new(ErrorKind::MissingRequiredParameter, "second"));

    assert_eq!(
        sink.kinds(),
        vec![ErrorKind::TooManyParameters, ErrorKind::MissingRequiredParameter]
    );
    let drained = sink.take();
    assert_eq!(drained[1].message, "second");
    assert!(sink.is_empty());
}

#[test]
fn shared_sink_reports_through_arc() {
    let sink = Arc::new(CollectingSink::new());
    let as_dyn: Arc<dyn DiagnosticSink> = sink.clone();
    as_dyn.report(Diagnostic::new(ErrorKind::UnknownFunction, "nope"));
    assert_eq!(sink.len(), 1);
}

#[test]
fn tracing_sink_does_not_panic_without_subscriber() {
    TracingSink.report(Diagnostic::new(ErrorKind::DuplicateParameterName, "dup").in_function("f"));
    NullSink.report(Diagnostic::new(ErrorKind::ExecutionFailed, "ignored"));
}

#[test]
fn tracing_sink_emits_under_a_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::sink)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        TracingSink.report(Diagnostic::new(ErrorKind::TypeMismatch, "expected double"));
    });
}
