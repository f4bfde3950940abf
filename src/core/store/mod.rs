//! Secret store codec.
//!
//! The store is a JSON document (`env.json`) with a shared `common` map and
//! one map per stage under `stages`:
//!
//! ```json
//! {
//!   "common": { "API_KEY": "encrypted:..." },
//!   "stages": { "dev": { "DB_PASS": "encrypted:..." } }
//! }
//! ```
//!
//! Saving goes through a temp file in the same directory that is renamed
//! over the target, so a failed write never truncates the store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::domain::Namespace;
use crate::core::types::{SecretName, SecretValue, StageName};
use crate::error::{Result, StoreError};

mod marker;

pub use marker::{is_encrypted, mark_encrypted, unmark_encrypted};

/// Secrets keyed by name.
pub type SecretMap = BTreeMap<SecretName, SecretValue>;

/// In-memory form of `env.json`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretStore {
    /// Secrets shared by every stage
    #[serde(default)]
    pub common: SecretMap,
    /// Secrets scoped to one stage
    #[serde(default)]
    pub stages: BTreeMap<StageName, SecretMap>,
    /// Unrecognized top-level fields, written back untouched
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl SecretStore {
    /// Load the store from disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the file is missing or unreadable, or
    /// `StoreError::Corrupt` if it is not a store document.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading secret store");

        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store: Self = serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            common = store.common.len(),
            stages = store.stages.len(),
            "secret store loaded"
        );
        Ok(store)
    }

    /// Write the full store back to disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` or `StoreError::Write` on failure; the
    /// existing file is left intact in either case.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving secret store");

        let mut contents = serde_json::to_string_pretty(self).map_err(StoreError::Serialize)?;
        contents.push('\n');

        let write_err = |source: std::io::Error| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(contents.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;

        // Keep the mode of the file being replaced
        if let Ok(metadata) = std::fs::metadata(path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_err)?;
        }

        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    /// Create an empty store file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if the file is already there.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(StoreError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        let store = Self::default();
        store.save(path)?;
        Ok(store)
    }

    /// Look up a stored value.
    ///
    /// A stage with no map yet is a plain miss.
    pub fn get(&self, namespace: &Namespace, name: &str) -> Option<&str> {
        let map = match namespace {
            Namespace::Common => Some(&self.common),
            Namespace::Stage(stage) => self.stages.get(stage),
        };
        map.and_then(|m| m.get(name)).map(String::as_str)
    }

    /// Insert or overwrite a value, creating the stage map on demand.
    ///
    /// Returns the previous value, if any.
    pub fn insert(
        &mut self,
        namespace: &Namespace,
        name: &str,
        value: SecretValue,
    ) -> Option<SecretValue> {
        let map = match namespace {
            Namespace::Common => &mut self.common,
            Namespace::Stage(stage) => self.stages.entry(stage.clone()).or_default(),
        };
        map.insert(name.to_string(), value)
    }
}
