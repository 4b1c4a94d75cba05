//! Native functions for an embedded, dynamically-typed command language.
//!
//! A host describes each function with a [`FunctionSignature`] and registers
//! it in a [`FunctionTable`]. The interpreter resolves a name, opens a
//! [`PendingCall`], binds arguments by position or by name, and executes it;
//! the collected values move into the entry point.

pub mod call;
pub mod config;
pub mod error;
pub mod native;
pub mod registry;
pub mod runtime;
pub mod signature;
pub mod stdlib;

pub use call::PendingCall;
pub use config::Config;
pub use error::{
    BindError, CallError, ConfigError, InitError, NativeFailure, RegisterError, SignatureError,
};
pub use native::{EntryPoint, NativeModule, NativeResult};
pub use registry::FunctionTable;
pub use runtime::{Argument, Runtime};
pub use signature::{FunctionSignature, ParameterSpec};

pub use diagnostics::{Diagnostic, DiagnosticSink, ErrorKind};
pub use values::{Kind, Value};
