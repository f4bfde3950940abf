//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name (e.g., DB_PASS, API_KEY).
pub type SecretName = String;

/// A value as stored in env.json.
///
/// Normally `encrypted:` followed by base64 KMS ciphertext.
pub type SecretValue = String;

/// A deployment stage name (e.g., dev, prod).
pub type StageName = String;

/// A KMS key identifier: key id, key ARN, alias name or alias ARN.
pub type KeyId = String;
