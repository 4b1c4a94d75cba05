//! Diagnostic plumbing shared by the native-function layer.
//!
//! Everything that goes wrong while declaring or calling a native function is
//! described by an [`ErrorKind`], wrapped in a [`Diagnostic`], and handed to a
//! single [`DiagnosticSink`].

mod diagnostic;
mod kind;
mod sink;

pub use diagnostic::Diagnostic;
pub use kind::{ErrorKind, Severity};
pub use sink::{CollectingSink, DiagnosticSink, NullSink, TracingSink};
