use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Start-up options for a [`Runtime`](crate::Runtime).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Panic on the first registration bug instead of returning it.
    pub halt_on_programming_error: bool,
    /// Bundled modules to install, by name.
    pub modules: Vec<String>,
    /// Check each argument's kind against its parameter before binding.
    pub check_argument_kinds: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            halt_on_programming_error: false,
            modules: vec!["math".to_string()],
            check_argument_kinds: true,
        }
    }
}

impl Config {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn fields_override_defaults() {
        let cfg = Config::from_toml_str(
            "halt_on_programming_error = true\nmodules = []\ncheck_argument_kinds = false\n",
        )
        .unwrap();
        assert!(cfg.halt_on_programming_error);
        assert!(cfg.modules.is_empty());
        assert!(!cfg.check_argument_kinds);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("verbose = true"),
            Err(ConfigError::Parse(_))
        ));
    }
}
