use serde::Serialize;
use std::fmt;

/// Category of a reported problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A parameter index or cursor position outside the declared parameters.
    IndexOutOfRange,
    /// Two parameters of one signature declared with the same name.
    DuplicateParameterName,
    /// A default value attached to a parameter of the numerical meta-kind.
    DefaultOnNumericalParameter,
    /// A signature registered while some parameter slot was never declared.
    UndeclaredParameter,
    /// Two functions registered under the same name.
    DuplicateFunctionName,
    /// More positional arguments than declared parameters.
    TooManyParameters,
    /// A parameter with no default was never bound.
    MissingRequiredParameter,
    UnknownFunction,
    UnknownParameter,
    /// An argument whose kind the parameter does not accept.
    TypeMismatch,
    /// The entry point ran and reported failure.
    ExecutionFailed,
}

impl ErrorKind {
    /// Misuse by the author of a native module rather than by a script.
    pub fn is_programming_error(self) -> bool {
        matches!(
            self,
            ErrorKind::IndexOutOfRange
                | ErrorKind::DuplicateParameterName
                | ErrorKind::DefaultOnNumericalParameter
                | ErrorKind::UndeclaredParameter
                | ErrorKind::DuplicateFunctionName
        )
    }

    pub fn severity(self) -> Severity {
        if self.is_programming_error() {
            Severity::Bug
        } else {
            Severity::Error
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::IndexOutOfRange => "index-out-of-range",
            ErrorKind::DuplicateParameterName => "duplicate-parameter-name",
            ErrorKind::DefaultOnNumericalParameter => "default-on-numerical-parameter",
            ErrorKind::UndeclaredParameter => "undeclared-parameter",
            ErrorKind::DuplicateFunctionName => "duplicate-function-name",
            ErrorKind::TooManyParameters => "too-many-parameters",
            ErrorKind::MissingRequiredParameter => "missing-required-parameter",
            ErrorKind::UnknownFunction => "unknown-function",
            ErrorKind::UnknownParameter => "unknown-parameter",
            ErrorKind::TypeMismatch => "type-mismatch",
            ErrorKind::ExecutionFailed => "execution-failed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A user-facing failure of one call. The interpreter keeps running.
    Error,
    /// A defect in registration code.
    Bug,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Bug => f.write_str("bug"),
        }
    }
}
