use crate::error::SignatureError;
use crate::native::{EntryPoint, NativeResult};
use std::fmt;
use std::sync::Arc;
use values::{Kind, Value};

/// Metadata of one formal parameter.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    name: String,
    kind: Kind,
    default: Option<Value>,
    declared: bool,
}

impl ParameterSpec {
    fn undeclared() -> Self {
        Self {
            name: String::new(),
            kind: Kind::Error,
            default: None,
            declared: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The stored default. Callers that need a value of their own should go
    /// through [`FunctionSignature::default_value`], which copies.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_declared(&self) -> bool {
        self.declared
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// The declared shape of one native function: its entry point and a fixed
/// number of parameters, each with a name, a kind and an optional default.
///
/// A signature is built during module initialisation and only read after
/// that, so it can be shared freely once registered.
#[derive(Clone)]
pub struct FunctionSignature {
    entry_point: EntryPoint,
    parameters: Vec<ParameterSpec>,
}

impl FunctionSignature {
    pub fn new<F>(entry_point: F, parameter_count: usize) -> Self
    where
        F: Fn(Vec<Value>) -> NativeResult + Send + Sync + 'static,
    {
        Self::from_entry_point(Arc::new(entry_point), parameter_count)
    }

    pub fn from_entry_point(entry_point: EntryPoint, parameter_count: usize) -> Self {
        Self {
            entry_point,
            parameters: (0..parameter_count).map(|_| ParameterSpec::undeclared()).collect(),
        }
    }

    /// Declare the parameter at `index`.
    ///
    /// The name must not already belong to a different index; on a clash the
    /// earlier declaration is kept and nothing changes. The signature takes
    /// ownership of `default`.
    pub fn declare_parameter(
        &mut self,
        index: usize,
        name: impl Into<String>,
        kind: Kind,
        default: Option<Value>,
    ) -> Result<(), SignatureError> {
        let name = name.into();
        self.check_index(index)?;

        let clash = self
            .parameters
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.declared && p.name == name);
        if clash {
            return Err(SignatureError::DuplicateParameterName { name });
        }

        if kind == Kind::Numerical && default.is_some() {
            return Err(SignatureError::DefaultOnNumericalParameter { name });
        }

        tracing::trace!(index, name = %name, kind = %kind, "declared parameter");
        self.parameters[index] = ParameterSpec {
            name,
            kind,
            default,
            declared: true,
        };
        Ok(())
    }

    /// Declare the first parameter that has not been declared yet.
    pub fn parameter(
        mut self,
        name: impl Into<String>,
        kind: Kind,
        default: Option<Value>,
    ) -> Result<Self, SignatureError> {
        let count = self.parameter_count();
        let index = self
            .parameters
            .iter()
            .position(|p| !p.declared)
            .ok_or(SignatureError::IndexOutOfRange { index: count, count })?;
        self.declare_parameter(index, name, kind, default)?;
        Ok(self)
    }

    #[inline]
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameter_at(&self, index: usize) -> Result<&ParameterSpec, SignatureError> {
        self.check_index(index)?;
        Ok(&self.parameters[index])
    }

    pub fn parameter_name(&self, index: usize) -> Result<&str, SignatureError> {
        self.parameter_at(index).map(ParameterSpec::name)
    }

    pub fn parameter_kind(&self, index: usize) -> Result<Kind, SignatureError> {
        self.parameter_at(index).map(ParameterSpec::kind)
    }

    /// A fresh copy of the declared default, or `None` when there is none.
    pub fn default_value(&self, index: usize) -> Result<Option<Value>, SignatureError> {
        self.parameter_at(index).map(|p| p.default.clone())
    }

    pub fn find_parameter(&self, name: &str) -> Option<usize> {
        self.parameters
            .iter()
            .position(|p| p.declared && p.name == name)
    }

    pub fn parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter()
    }

    pub fn first_undeclared(&self) -> Option<usize> {
        self.parameters.iter().position(|p| !p.declared)
    }

    pub fn is_fully_declared(&self) -> bool {
        self.first_undeclared().is_none()
    }

    /// Run the entry point. The arguments are moved into it.
    pub fn invoke(&self, arguments: Vec<Value>) -> NativeResult {
        (self.entry_point)(arguments)
    }

    fn check_index(&self, index: usize) -> Result<(), SignatureError> {
        if index < self.parameters.len() {
            Ok(())
        } else {
            Err(SignatureError::IndexOutOfRange {
                index,
                count: self.parameters.len(),
            })
        }
    }
}

impl fmt::Debug for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSignature")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if !p.declared {
                f.write_str("_")?;
                continue;
            }
            write!(f, "{}: {}", p.name, p.kind)?;
            if let Some(default) = &p.default {
                write!(f, " = {default}")?;
            }
        }
        f.write_str(")")
    }
}
