//! Resolved key context.

use std::path::PathBuf;

use crate::core::constants;
use crate::core::types::{KeyId, StageName};
use crate::error::{ConfigError, Result};

/// Everything needed to address the key-management service for one
/// invocation.
///
/// Built once by [`crate::core::config::resolve`] and passed by reference
/// to the engine and the KMS backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyContext {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub stage: Option<StageName>,
    pub service_path: PathBuf,
    pub key_id: Option<KeyId>,
}

impl KeyContext {
    /// The active stage, or `ConfigError::MissingStage` when none is set.
    pub fn require_stage(&self) -> Result<&str> {
        match self.stage.as_deref() {
            Some(stage) if !stage.is_empty() => Ok(stage),
            _ => Err(ConfigError::MissingStage.into()),
        }
    }

    /// Location of the secret store for this service.
    pub fn store_path(&self) -> PathBuf {
        self.service_path.join(constants::STORE_FILE)
    }
}
