//! Encryption marker encoding.
//!
//! Stored ciphertext is tagged with [`ENCRYPTED_PREFIX`] so it can be told
//! apart from plaintext at a glance.

use tracing::debug;

use crate::core::constants::ENCRYPTED_PREFIX;
use crate::core::types::SecretValue;

/// Tag a ciphertext for storage.
pub fn mark_encrypted(ciphertext: &str) -> SecretValue {
    format!("{}{}", ENCRYPTED_PREFIX, ciphertext)
}

/// Strip the marker from a stored value.
///
/// Values without the marker come back unchanged and are handed to the
/// KMS as-is.
pub fn unmark_encrypted(value: &str) -> &str {
    match value.strip_prefix(ENCRYPTED_PREFIX) {
        Some(ciphertext) => ciphertext,
        None => {
            debug!(
                value_len = value.len(),
                "stored value has no encryption marker, decrypting as-is"
            );
            value
        }
    }
}

/// Check whether a stored value carries the marker.
pub fn is_encrypted(value: &str) -> bool {
    value.starts_with(ENCRYPTED_PREFIX)
}
