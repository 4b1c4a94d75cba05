use crate::error::{NativeFailure, RegisterError};
use crate::registry::FunctionTable;
use std::sync::Arc;
use values::Value;

/// What an entry point returns: a real value, or an explicit failure.
pub type NativeResult = Result<Value, NativeFailure>;

// The unified shape of every native entry point.
// args: one value per declared parameter, in declaration order, none missing.
// The entry point owns the arguments and drops whatever it does not return.
pub type EntryPoint = Arc<dyn Fn(Vec<Value>) -> NativeResult + Send + Sync>;

/// A group of native functions installed together at interpreter start-up.
pub trait NativeModule: Sync {
    fn name(&self) -> &'static str;
    fn install(&self, table: &mut FunctionTable) -> Result<(), RegisterError>;
}
