use crate::error::{BindError, CallError};
use crate::signature::FunctionSignature;
use diagnostics::DiagnosticSink;
use values::{Kind, Value};

/// One call being assembled: a slot per declared parameter, seeded from the
/// defaults, and a cursor that positional arguments fill from and named
/// arguments jump.
///
/// The call borrows its signature and is consumed by [`execute`], so it can
/// neither outlive the signature nor run twice.
///
/// [`execute`]: PendingCall::execute
pub struct PendingCall<'a> {
    function_name: String,
    signature: &'a FunctionSignature,
    sink: &'a dyn DiagnosticSink,
    slots: Vec<Option<Value>>,
    cursor: usize,
}

impl<'a> PendingCall<'a> {
    pub fn new(
        function_name: impl Into<String>,
        signature: &'a FunctionSignature,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        let slots = signature
            .parameters()
            .map(|p| p.default().cloned())
            .collect();
        let function_name = function_name.into();
        tracing::trace!(function = %function_name, "pending call created");
        Self {
            function_name,
            signature,
            sink,
            slots,
            cursor: 0,
        }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn signature(&self) -> &'a FunctionSignature {
        self.signature
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.cursor
    }

    pub fn find_parameter(&self, name: &str) -> Option<usize> {
        self.signature.find_parameter(name)
    }

    /// Declared kind of the parameter under the cursor.
    ///
    /// Past the last parameter this reports `TooManyParameters` and yields
    /// [`Kind::Error`], so the caller can keep going and collect further
    /// diagnostics.
    pub fn current_parameter_type(&self) -> Kind {
        match self.signature.parameter_kind(self.cursor) {
            Ok(kind) => kind,
            Err(_) => {
                self.report(&self.too_many());
                Kind::Error
            }
        }
    }

    /// Store `value` in the slot under the cursor and advance.
    ///
    /// With no slot left the value is handed back inside the error and the
    /// slots already bound are untouched.
    pub fn bind_current(&mut self, value: Value) -> Result<(), BindError> {
        if self.cursor >= self.slots.len() {
            let error = self.too_many();
            self.report(&error);
            return Err(BindError { value, error });
        }
        // The previous occupant, usually a default, is dropped here.
        self.slots[self.cursor] = Some(value);
        self.cursor += 1;
        Ok(())
    }

    /// Move the cursor to `index`. `parameter_count()` itself is allowed and
    /// means "no positional slot left".
    pub fn jump_to(&mut self, index: usize) -> Result<(), CallError> {
        let count = self.slots.len();
        if index > count {
            let error = CallError::IndexOutOfRange {
                function: self.function_name.clone(),
                index,
                count,
            };
            self.report(&error);
            return Err(error);
        }
        self.cursor = index;
        Ok(())
    }

    /// Move the cursor to the parameter called `name`.
    pub fn jump_to_name(&mut self, name: &str) -> Result<(), CallError> {
        match self.find_parameter(name) {
            Some(index) => self.jump_to(index),
            None => {
                let error = CallError::UnknownParameter {
                    function: self.function_name.clone(),
                    name: name.to_string(),
                };
                self.report(&error);
                Err(error)
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Names of the parameters that still have no value.
    pub fn missing_parameters(&self) -> Vec<&'a str> {
        let signature = self.signature;
        self.slots
            .iter()
            .zip(signature.parameters())
            .filter(|(slot, _)| slot.is_none())
            .map(|(_, p)| p.name())
            .collect()
    }

    /// Check that every slot holds a value, then hand all of them to the
    /// entry point.
    ///
    /// An empty slot aborts the call before the entry point runs. A failure
    /// returned by the entry point becomes `ExecutionFailed`.
    pub fn execute(self) -> Result<Value, CallError> {
        let mut arguments = Vec::with_capacity(self.slots.len());
        for (index, slot) in self.slots.into_iter().enumerate() {
            match slot {
                Some(value) => arguments.push(value),
                None => {
                    let parameter = self
                        .signature
                        .parameter_name(index)
                        .map(str::to_string)
                        .unwrap_or_default();
                    let error = CallError::MissingRequiredParameter {
                        function: self.function_name,
                        parameter,
                    };
                    self.sink.report(error.to_diagnostic());
                    return Err(error);
                }
            }
        }

        tracing::debug!(function = %self.function_name, args = arguments.len(), "invoking native");
        self.signature.invoke(arguments).map_err(|failure| {
            let error = CallError::ExecutionFailed {
                function: self.function_name,
                failure,
            };
            self.sink.report(error.to_diagnostic());
            error
        })
    }

    fn too_many(&self) -> CallError {
        CallError::TooManyParameters {
            function: self.function_name.clone(),
            count: self.slots.len(),
        }
    }

    fn report(&self, error: &CallError) {
        self.sink.report(error.to_diagnostic());
    }
}

impl std::fmt::Debug for PendingCall<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingCall")
            .field("function_name", &self.function_name)
            .field("slots", &self.slots)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
