//! Key-management gateway.
//!
//! Encryption and decryption are delegated to a remote KMS. The engine only
//! sees the [`KmsBackend`] trait, so tests can inject a deterministic fake.
//!
//! ## Backends
//!
//! - **AWS KMS**: Feature-gated (`aws`, on by default).
//! - **Mock**: Compiled for unit tests and with the `test-kms` feature.
//!   Hex encoding, NOT cryptographically secure.

use tracing::debug;

use crate::core::domain::KeyContext;
use crate::error::Result;

#[cfg(feature = "aws")]
pub mod aws;

#[cfg(any(test, feature = "test-kms"))]
pub mod mock;

/// Remote encrypt/decrypt capability.
///
/// Failures (network, permissions, unknown key, bad ciphertext) come back
/// as `CipherError` and are never retried here.
pub trait KmsBackend: std::fmt::Debug {
    /// Encrypt plaintext with the context's key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MissingKeyId` if no key id was resolved, or
    /// `CipherError::EncryptionFailed` if the service rejects the call.
    fn encrypt(&self, plaintext: &str, ctx: &KeyContext) -> Result<String>;

    /// Decrypt ciphertext previously produced by [`KmsBackend::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the service rejects the call
    /// or the ciphertext is malformed.
    fn decrypt(&self, ciphertext: &str, ctx: &KeyContext) -> Result<String>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Default backend selection.
///
/// The mock wins whenever it is compiled in, so integration tests never
/// reach a real KMS.
#[cfg(any(test, feature = "test-kms"))]
pub fn default_backend() -> Result<Box<dyn KmsBackend>> {
    debug!("using mock KMS backend");
    Ok(Box::new(mock::MockKms))
}

/// Default backend selection: AWS KMS.
#[cfg(all(not(test), not(feature = "test-kms"), feature = "aws"))]
pub fn default_backend() -> Result<Box<dyn KmsBackend>> {
    debug!("using AWS KMS backend");
    Ok(Box::new(aws::AwsKms::new()))
}

/// Default backend selection when no backend was compiled.
///
/// # Errors
///
/// Always returns `CipherError::Unavailable`.
#[cfg(all(not(test), not(feature = "test-kms"), not(feature = "aws")))]
pub fn default_backend() -> Result<Box<dyn KmsBackend>> {
    debug!("no KMS backend compiled");
    Err(crate::error::CipherError::Unavailable(
        "AWS KMS support not compiled. Rebuild with: cargo install envcrypt --features aws"
            .to_string(),
    )
    .into())
}
