//! Argument registry: declared launch arguments plus caller overrides

use indexmap::IndexMap;
use std::collections::HashMap;

/// A declared launch argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchArgument {
    /// Argument name, unique within the registry
    pub name: String,
    /// Default value used when no override is supplied
    pub default_value: Option<String>,
}

/// Registry of declared launch arguments
///
/// Arguments are declared once, in order, before anything reads them;
/// `resolve` then returns the caller override if present, else the
/// declared default. Declaration order is preserved so the emitted plan
/// lists arguments deterministically.
#[derive(Debug, Clone, Default)]
pub struct ArgumentRegistry {
    declared: IndexMap<String, LaunchArgument>,
    overrides: HashMap<String, String>,
}

impl ArgumentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caller-supplied overrides (from the CLI `key:=value` options)
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Declare an argument with an optional default value
    ///
    /// Declaring the same name twice is a configuration bug, not a
    /// shadowing mechanism, and fails with `DuplicateArgument`.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        default_value: Option<&str>,
    ) -> Result<&LaunchArgument, RegistryError> {
        let name = name.into();
        if self.declared.contains_key(&name) {
            return Err(RegistryError::DuplicateArgument(name));
        }
        let arg = LaunchArgument {
            name: name.clone(),
            default_value: default_value.map(str::to_string),
        };
        Ok(self.declared.entry(name).or_insert(arg))
    }

    /// Resolve an argument to its effective value
    pub fn resolve(&self, name: &str) -> Result<String, RegistryError> {
        let arg = self
            .declared
            .get(name)
            .ok_or_else(|| RegistryError::UnknownArgument(name.to_string()))?;

        if let Some(value) = self.overrides.get(name) {
            return Ok(value.clone());
        }

        arg.default_value
            .clone()
            .ok_or_else(|| RegistryError::MissingArgument(name.to_string()))
    }

    /// Reject overrides that do not match any declared argument
    ///
    /// Called once after all declarations, so a typo in a `key:=value`
    /// override fails the whole resolution instead of being ignored.
    pub fn validate_overrides(&self) -> Result<(), RegistryError> {
        for name in self.overrides.keys() {
            if !self.declared.contains_key(name) {
                return Err(RegistryError::UnknownArgument(name.clone()));
            }
        }
        Ok(())
    }

    /// Effective values of all declared arguments, in declaration order
    pub fn resolved(&self) -> Result<IndexMap<String, String>, RegistryError> {
        let mut resolved = IndexMap::with_capacity(self.declared.len());
        for name in self.declared.keys() {
            resolved.insert(name.clone(), self.resolve(name)?);
        }
        Ok(resolved)
    }
}

/// Errors that can occur during argument declaration or resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Argument '{0}' is already declared")]
    DuplicateArgument(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Argument '{0}' has no override and no default value")]
    MissingArgument(String),
}
