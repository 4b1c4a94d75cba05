use crate::error::{RegisterError, SignatureError};
use crate::native::NativeModule;
use crate::signature::FunctionSignature;
use std::collections::HashMap;

/// Name → signature table consulted by the interpreter to resolve calls.
#[derive(Debug, Default)]
pub struct FunctionTable {
    functions: HashMap<String, FunctionSignature>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `signature` under `name`.
    ///
    /// Every parameter must have been declared, and the name must be free;
    /// the first registration of a name wins.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        signature: FunctionSignature,
    ) -> Result<(), RegisterError> {
        let name = name.into();

        if let Some(index) = signature.first_undeclared() {
            return Err(RegisterError::new(
                name,
                SignatureError::UndeclaredParameter { index },
            ));
        }

        if self.functions.contains_key(&name) {
            let error = SignatureError::DuplicateFunctionName { name: name.clone() };
            return Err(RegisterError::new(name, error));
        }

        tracing::debug!(function = %name, params = signature.parameter_count(), "registered native");
        self.functions.insert(name, signature);
        Ok(())
    }

    /// Build a signature and register it, tagging any declaration error with
    /// the function's name.
    pub fn define<F>(&mut self, name: &str, build: F) -> Result<(), RegisterError>
    where
        F: FnOnce() -> Result<FunctionSignature, SignatureError>,
    {
        let signature = build().map_err(|e| RegisterError::new(name, e))?;
        self.register(name, signature)
    }

    pub fn install(&mut self, module: &dyn NativeModule) -> Result<(), RegisterError> {
        tracing::debug!(module = module.name(), "installing module");
        module.install(self)
    }

    pub fn lookup(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FunctionSignature)> {
        let mut entries: Vec<_> = self
            .functions
            .iter()
            .map(|(name, sig)| (name.as_str(), sig))
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries.into_iter()
    }
}
