//! Error types.
//!
//! Each failure domain has its own enum; they all fold into [`Error`] so
//! callers can use a single `Result` alias and `?` everywhere.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::domain::Namespace;

/// Top-level error for every envcrypt operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

/// Host configuration and key-context errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid host config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no stage configured: stage-scoped secrets need a stage")]
    MissingStage,
}

/// Secret store (env.json) errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read secret store {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("secret store {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize secret store: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write secret store {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("secret store already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },
}

impl StoreError {
    /// True when the store file simply does not exist yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Secret lookup errors.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("could not find {name} in {namespace} environment")]
    NotFound { name: String, namespace: Namespace },
}

/// Input validation errors, raised before any I/O.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("variable is required (pass --variable)")]
    MissingVariable,

    #[error("value is required to set a secret (pass --value)")]
    MissingValue,
}

/// Key-management service errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("no KMS key id resolved for {}", describe_stage(stage))]
    MissingKeyId { stage: Option<String> },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("KMS backend unavailable: {0}")]
    Unavailable(String),
}

fn describe_stage(stage: &Option<String>) -> String {
    match stage {
        Some(stage) => format!("stage '{}'", stage),
        None => "this invocation".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
