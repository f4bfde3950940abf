//! Mock KMS backend for testing.
//!
//! Uses simple hex encoding with a prefix. Validates the plumbing without
//! network access. Encryption still demands a resolved key id so missing
//! configuration surfaces the same way it would against AWS.

use super::KmsBackend;
use crate::core::domain::KeyContext;
use crate::error::{CipherError, Result};

const MOCK_PREFIX: &str = "mock-kms:";

/// Deterministic stand-in for a real KMS.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockKms;

impl KmsBackend for MockKms {
    fn encrypt(&self, plaintext: &str, ctx: &KeyContext) -> Result<String> {
        if ctx.key_id.is_none() {
            return Err(CipherError::MissingKeyId {
                stage: ctx.stage.clone(),
            }
            .into());
        }
        let hex: String = plaintext.bytes().map(|b| format!("{:02x}", b)).collect();
        Ok(format!("{}{}", MOCK_PREFIX, hex))
    }

    fn decrypt(&self, ciphertext: &str, _ctx: &KeyContext) -> Result<String> {
        let hex = ciphertext.strip_prefix(MOCK_PREFIX).ok_or_else(|| {
            CipherError::DecryptionFailed("not a mock-kms ciphertext".to_string())
        })?;
        if !hex.is_ascii() || hex.len() % 2 != 0 {
            return Err(CipherError::DecryptionFailed("malformed hex payload".to_string()).into());
        }
        let bytes: std::result::Result<Vec<u8>, _> = (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect();
        let bytes =
            bytes.map_err(|e| CipherError::DecryptionFailed(format!("invalid hex: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| CipherError::DecryptionFailed(format!("invalid utf8: {}", e)).into())
    }

    fn name(&self) -> &'static str {
        "mock-kms"
    }
}
