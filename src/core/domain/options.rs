//! Per-invocation command options.

use crate::error::{Result, ValidationError};

/// User-supplied parameters of one `encryptor` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// Plaintext to encrypt (set mode).
    pub value: Option<String>,
    /// Secret name.
    pub variable: Option<String>,
    /// Reveal instead of set.
    pub decrypt: bool,
    /// Target the common namespace instead of the active stage.
    pub common: bool,
}

impl CommandOptions {
    /// The secret name, or `ValidationError::MissingVariable` if absent or empty.
    pub fn require_variable(&self) -> Result<&str> {
        match self.variable.as_deref() {
            Some(variable) if !variable.is_empty() => Ok(variable),
            _ => Err(ValidationError::MissingVariable.into()),
        }
    }

    /// The plaintext to encrypt, or `ValidationError::MissingValue`.
    pub fn require_value(&self) -> Result<&str> {
        self.value
            .as_deref()
            .ok_or_else(|| ValidationError::MissingValue.into())
    }
}
