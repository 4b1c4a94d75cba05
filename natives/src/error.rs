use diagnostics::{Diagnostic, ErrorKind};
use std::path::PathBuf;
use thiserror::Error;
use values::{Kind, Value};

/// Misuse of the declaration API by a native module's author.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("parameter index {index} out of range for {count} parameter(s)")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("multiple parameters declared with the same formal name `{name}`")]
    DuplicateParameterName { name: String },
    #[error("parameter `{name}` is numerical and cannot carry a default value")]
    DefaultOnNumericalParameter { name: String },
    #[error("parameter {index} was never declared")]
    UndeclaredParameter { index: usize },
    #[error("a function named `{name}` is already registered")]
    DuplicateFunctionName { name: String },
}

impl SignatureError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SignatureError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            SignatureError::DuplicateParameterName { .. } => ErrorKind::DuplicateParameterName,
            SignatureError::DefaultOnNumericalParameter { .. } => {
                ErrorKind::DefaultOnNumericalParameter
            }
            SignatureError::UndeclaredParameter { .. } => ErrorKind::UndeclaredParameter,
            SignatureError::DuplicateFunctionName { .. } => ErrorKind::DuplicateFunctionName,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.kind(), self.to_string())
    }
}

/// A signature error tagged with the function being registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot register `{function}`: {error}")]
pub struct RegisterError {
    pub function: String,
    #[source]
    pub error: SignatureError,
}

impl RegisterError {
    pub fn new(function: impl Into<String>, error: SignatureError) -> Self {
        Self {
            function: function.into(),
            error,
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.kind(), self.to_string()).in_function(&self.function)
    }
}

/// Failure reported by an entry point: the function ran but could not
/// produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct NativeFailure {
    pub reason: String,
}

impl NativeFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn arity(expected: usize, got: usize) -> Self {
        Self::new(format!("expected {expected} argument(s), got {got}"))
    }

    pub fn kind_mismatch(parameter: &str, expected: &str, found: Kind) -> Self {
        Self::new(format!("`{parameter}` must be {expected}, found {found}"))
    }
}

/// A failed call, attributable to the script that made it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    #[error("too many parameters specified for function `{function}` (it takes {count})")]
    TooManyParameters { function: String, count: usize },
    #[error("parameter index {index} out of range for function `{function}` ({count} parameter(s))")]
    IndexOutOfRange {
        function: String,
        index: usize,
        count: usize,
    },
    #[error("required parameter `{parameter}` not found while executing function `{function}`")]
    MissingRequiredParameter { function: String, parameter: String },
    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },
    #[error("function `{function}` has no parameter named `{name}`")]
    UnknownParameter { function: String, name: String },
    #[error("parameter `{parameter}` of function `{function}` expects {expected}, found {found}")]
    TypeMismatch {
        function: String,
        parameter: String,
        expected: Kind,
        found: Kind,
    },
    #[error("function `{function}` could not produce a result: {failure}")]
    ExecutionFailed {
        function: String,
        #[source]
        failure: NativeFailure,
    },
}

impl CallError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CallError::TooManyParameters { .. } => ErrorKind::TooManyParameters,
            CallError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            CallError::MissingRequiredParameter { .. } => ErrorKind::MissingRequiredParameter,
            CallError::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            CallError::UnknownParameter { .. } => ErrorKind::UnknownParameter,
            CallError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            CallError::ExecutionFailed { .. } => ErrorKind::ExecutionFailed,
        }
    }

    pub fn function(&self) -> &str {
        match self {
            CallError::UnknownFunction { name } => name,
            CallError::TooManyParameters { function, .. }
            | CallError::IndexOutOfRange { function, .. }
            | CallError::MissingRequiredParameter { function, .. }
            | CallError::UnknownParameter { function, .. }
            | CallError::TypeMismatch { function, .. }
            | CallError::ExecutionFailed { function, .. } => function,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.kind(), self.to_string()).in_function(self.function())
    }
}

/// Returned by `PendingCall::bind_current` when there is no slot left.
/// The rejected value comes back to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct BindError {
    pub value: Value,
    pub error: CallError,
}

impl BindError {
    pub fn into_value(self) -> Value {
        self.value
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown module `{0}`")]
    UnknownModule(String),
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("module `{module}` failed to install")]
    Module {
        module: String,
        #[source]
        error: RegisterError,
    },
}
