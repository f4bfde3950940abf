//! Host configuration and key-context resolution.
//!
//! Reads the optional `.envcrypt.toml` in the service directory and merges
//! it with explicit overrides (CLI flags / environment) into a
//! [`KeyContext`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::KeyContext;
use crate::core::types::{KeyId, StageName};
use crate::error::{ConfigError, Result};

/// Host-provided defaults stored in `.envcrypt.toml`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Deployment provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Per-deployment custom settings
    #[serde(default)]
    pub custom: CustomConfig,
}

/// `[provider]` section.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub stage: Option<StageName>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
}

/// `[custom]` section.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomConfig {
    /// KMS key used for env encryption, shared or per stage.
    #[serde(default)]
    pub env_encryption_key_id: Option<KeyIdSource>,
}

/// Where the KMS key id comes from.
///
/// ```toml
/// [custom]
/// env_encryption_key_id = "alias/app"
///
/// # or
/// [custom.env_encryption_key_id]
/// dev = "alias/app-dev"
/// prod = "alias/app-prod"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyIdSource {
    /// One key for every stage.
    Single(KeyId),
    /// Key per stage name.
    PerStage(BTreeMap<StageName, KeyId>),
}

impl KeyIdSource {
    /// Key id for a stage.
    ///
    /// A per-stage table yields `None` when there is no stage or no entry
    /// for it; the KMS call reports the gap.
    pub fn for_stage(&self, stage: Option<&str>) -> Option<KeyId> {
        match self {
            Self::Single(key_id) => Some(key_id.clone()),
            Self::PerStage(keys) => stage.and_then(|s| keys.get(s)).cloned(),
        }
    }
}

impl HostConfig {
    /// Load `.envcrypt.toml` from a service directory.
    ///
    /// A missing file yields empty defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(service_path: &Path) -> Result<Self> {
        let path = config_path(service_path);
        if !path.exists() {
            debug!(path = %path.display(), "no host config, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading host config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let config: Self =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;

        Ok(config)
    }
}

/// Host configuration path under a service directory.
pub fn config_path(service_path: &Path) -> PathBuf {
    service_path.join(constants::CONFIG_FILE)
}

/// Explicit per-invocation overrides. Empty strings count as unset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub stage: Option<StageName>,
    pub service_path: Option<PathBuf>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Resolve the key context for one invocation.
///
/// Explicit overrides win over host defaults. The key id is picked from
/// the host's key-id source using the resolved stage.
pub fn resolve(host: &HostConfig, overrides: &Overrides) -> KeyContext {
    let stage =
        non_empty(overrides.stage.as_ref()).or_else(|| non_empty(host.provider.stage.as_ref()));
    let region =
        non_empty(overrides.region.as_ref()).or_else(|| non_empty(host.provider.region.as_ref()));
    let profile =
        non_empty(overrides.profile.as_ref()).or_else(|| non_empty(host.provider.profile.as_ref()));
    let service_path = service_path(overrides);
    let key_id = host
        .custom
        .env_encryption_key_id
        .as_ref()
        .and_then(|source| source.for_stage(stage.as_deref()));

    debug!(
        stage = stage.as_deref().unwrap_or("-"),
        region = region.as_deref().unwrap_or("-"),
        profile = profile.as_deref().unwrap_or("-"),
        service_path = %service_path.display(),
        has_key_id = key_id.is_some(),
        "resolved key context"
    );

    KeyContext {
        region,
        profile,
        stage,
        service_path,
        key_id,
    }
}

/// Service directory from the overrides, defaulting to the current directory.
pub fn service_path(overrides: &Overrides) -> PathBuf {
    overrides
        .service_path
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_SERVICE_PATH))
}

/// Load host defaults from the service directory and resolve against them.
///
/// # Errors
///
/// Returns `ConfigError` if `.envcrypt.toml` exists but is unreadable or malformed.
pub fn load_context(overrides: &Overrides) -> Result<KeyContext> {
    let host = HostConfig::load(&service_path(overrides))?;
    Ok(resolve(&host, overrides))
}
