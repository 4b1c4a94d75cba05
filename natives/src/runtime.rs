use crate::call::PendingCall;
use crate::config::Config;
use crate::error::{CallError, ConfigError, InitError, RegisterError};
use crate::native::NativeModule;
use crate::registry::FunctionTable;
use crate::signature::FunctionSignature;
use crate::stdlib;
use diagnostics::{Diagnostic, DiagnosticSink};
use std::sync::Arc;
use values::Value;

/// One actual argument as the interpreter hands it over.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Positional(Value),
    Named(String, Value),
}

impl Argument {
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Argument::Named(name.into(), value.into())
    }

    pub fn positional(value: impl Into<Value>) -> Self {
        Argument::Positional(value.into())
    }
}

/// Interpreter-wide native-function state: the function table, the
/// diagnostic channel and the options it was started with.
///
/// Built once by [`Runtime::init`] when the interpreter starts and dropped
/// when it shuts down.
pub struct Runtime {
    table: FunctionTable,
    sink: Arc<dyn DiagnosticSink>,
    config: Config,
}

impl Runtime {
    /// Install the bundled modules named in `config`.
    pub fn init(config: Config, sink: Arc<dyn DiagnosticSink>) -> Result<Self, InitError> {
        Self::init_with(config, sink, &[])
    }

    /// Like [`init`](Self::init), then install the host's own `modules`.
    pub fn init_with(
        config: Config,
        sink: Arc<dyn DiagnosticSink>,
        modules: &[&dyn NativeModule],
    ) -> Result<Self, InitError> {
        let mut bundled: Vec<&dyn NativeModule> = Vec::with_capacity(config.modules.len());
        for name in &config.modules {
            let module = stdlib::module_by_name(name)
                .ok_or_else(|| ConfigError::UnknownModule(name.clone()))?;
            bundled.push(module);
        }

        let mut runtime = Self {
            table: FunctionTable::new(),
            sink,
            config,
        };
        for module in bundled.into_iter().chain(modules.iter().copied()) {
            if let Err(error) = runtime.table.install(module) {
                runtime.registration_failed(&error);
                return Err(InitError::Module {
                    module: module.name().to_string(),
                    error,
                });
            }
        }

        tracing::debug!(functions = runtime.table.len(), "native runtime ready");
        Ok(runtime)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &FunctionTable {
        &self.table
    }

    pub fn sink(&self) -> &dyn DiagnosticSink {
        &*self.sink
    }

    pub fn lookup(&self, name: &str) -> Option<&FunctionSignature> {
        self.table.lookup(name)
    }

    /// Register one more function after start-up.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        signature: FunctionSignature,
    ) -> Result<(), RegisterError> {
        self.table.register(name, signature).inspect_err(|error| {
            self.registration_failed(error);
        })
    }

    /// Start a call to `name` with every slot seeded from its defaults.
    pub fn begin_call(&self, name: &str) -> Result<PendingCall<'_>, CallError> {
        match self.table.lookup(name) {
            Some(signature) => Ok(PendingCall::new(name, signature, &*self.sink)),
            None => {
                let error = CallError::UnknownFunction {
                    name: name.to_string(),
                };
                self.sink.report(error.to_diagnostic());
                Err(error)
            }
        }
    }

    /// Bind `arguments` in order and execute.
    ///
    /// Positional arguments fill the slot under the cursor; a named argument
    /// first moves the cursor to its parameter, so positional arguments after
    /// it continue from there.
    pub fn call(&self, name: &str, arguments: Vec<Argument>) -> Result<Value, CallError> {
        let mut call = self.begin_call(name)?;

        for argument in arguments {
            let value = match argument {
                Argument::Positional(value) => value,
                Argument::Named(parameter, value) => {
                    call.jump_to_name(&parameter)?;
                    value
                }
            };

            if self.config.check_argument_kinds {
                self.check_kind(&call, &value)?;
            }
            // A rejected value is dropped along with the failed call.
            call.bind_current(value).map_err(|e| e.error)?;
        }

        call.execute()
    }

    fn check_kind(&self, call: &PendingCall<'_>, value: &Value) -> Result<(), CallError> {
        let signature = call.signature();
        let index = call.current_index();
        let Ok(param) = signature.parameter_at(index) else {
            // Past the end: bind_current reports it.
            return Ok(());
        };
        if param.kind().accepts(value.kind()) {
            return Ok(());
        }
        let error = CallError::TypeMismatch {
            function: call.function_name().to_string(),
            parameter: param.name().to_string(),
            expected: param.kind(),
            found: value.kind(),
        };
        self.sink.report(error.to_diagnostic());
        Err(error)
    }

    fn registration_failed(&self, error: &RegisterError) {
        let diagnostic: Diagnostic = error.to_diagnostic();
        self.sink.report(diagnostic.clone());
        if self.config.halt_on_programming_error {
            panic!("{diagnostic}");
        }
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("table", &self.table)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
