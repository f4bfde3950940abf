//! Constants used throughout envcrypt.
//!
//! Centralizes magic strings and default values.

/// Prefix that tags a stored value as KMS ciphertext.
pub const ENCRYPTED_PREFIX: &str = "encrypted:";

/// Secret store file name, relative to the service path.
pub const STORE_FILE: &str = "env.json";

/// Host configuration file name, relative to the service path.
pub const CONFIG_FILE: &str = ".envcrypt.toml";

/// Service path used when none is supplied.
pub const DEFAULT_SERVICE_PATH: &str = ".";

/// Name of the shared, stage-independent namespace.
pub const COMMON_NAMESPACE: &str = "common";
