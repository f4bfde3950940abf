//! In-process KMS fakes for library-level tests.

use std::cell::RefCell;

use envcrypt::core::cipher::KmsBackend;
use envcrypt::core::domain::KeyContext;
use envcrypt::error::{CipherError, Result};

/// KMS fake with one canned ciphertext/plaintext pair.
///
/// Records every call so tests can assert how often the service was hit
/// and with which key context.
#[derive(Debug, Default)]
pub struct RecordingKms {
    ciphertext: String,
    plaintext: String,
    pub encrypted: RefCell<Vec<(String, KeyContext)>>,
    pub decrypted: RefCell<Vec<(String, KeyContext)>>,
}

impl RecordingKms {
    /// Encrypt always returns `ciphertext`; decrypting it returns `plaintext`.
    pub fn new(ciphertext: &str, plaintext: &str) -> Self {
        Self {
            ciphertext: ciphertext.to_string(),
            plaintext: plaintext.to_string(),
            ..Default::default()
        }
    }

    /// Total number of remote calls made.
    pub fn calls(&self) -> usize {
        self.encrypted.borrow().len() + self.decrypted.borrow().len()
    }
}

impl KmsBackend for RecordingKms {
    fn encrypt(&self, plaintext: &str, ctx: &KeyContext) -> Result<String> {
        self.encrypted
            .borrow_mut()
            .push((plaintext.to_string(), ctx.clone()));
        Ok(self.ciphertext.clone())
    }

    fn decrypt(&self, ciphertext: &str, ctx: &KeyContext) -> Result<String> {
        self.decrypted
            .borrow_mut()
            .push((ciphertext.to_string(), ctx.clone()));
        if ciphertext == self.ciphertext {
            Ok(self.plaintext.clone())
        } else {
            Err(CipherError::DecryptionFailed(format!("unknown ciphertext: {}", ciphertext)).into())
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// KMS fake whose every call fails like an unreachable service.
#[derive(Debug, Default)]
pub struct FailingKms;

impl KmsBackend for FailingKms {
    fn encrypt(&self, _plaintext: &str, _ctx: &KeyContext) -> Result<String> {
        Err(CipherError::EncryptionFailed("service unavailable".to_string()).into())
    }

    fn decrypt(&self, _ciphertext: &str, _ctx: &KeyContext) -> Result<String> {
        Err(CipherError::DecryptionFailed("service unavailable".to_string()).into())
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
