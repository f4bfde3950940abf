//! AWS KMS backend.
//!
//! Enable with `--features aws` (default).
//!
//! Credentials come from the default AWS provider chain. The context's
//! region and profile, when resolved, override the chain's defaults.
//! Ciphertext blobs are stored base64-encoded.

use ::base64::Engine;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_kms::primitives::Blob;
use tracing::trace;

use super::KmsBackend;
use crate::core::domain::KeyContext;
use crate::error::{CipherError, Error, Result};

/// AWS Key Management Service backend.
///
/// Stateless: each call builds a current-thread runtime and a client for
/// the call's key context.
#[derive(Debug, Default, Clone, Copy)]
pub struct AwsKms;

impl AwsKms {
    pub fn new() -> Self {
        Self
    }

    fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
    }
}

async fn client(ctx: &KeyContext) -> aws_sdk_kms::Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &ctx.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &ctx.profile {
        loader = loader.profile_name(profile);
    }
    aws_sdk_kms::Client::new(&loader.load().await)
}

impl KmsBackend for AwsKms {
    fn encrypt(&self, plaintext: &str, ctx: &KeyContext) -> Result<String> {
        let key_id = ctx.key_id.as_deref().ok_or_else(|| CipherError::MissingKeyId {
            stage: ctx.stage.clone(),
        })?;

        trace!(
            key_id = %key_id,
            plaintext_len = plaintext.len(),
            "encrypting with AWS KMS"
        );

        let rt = Self::runtime().map_err(|e| {
            CipherError::EncryptionFailed(format!("failed to create runtime: {}", e))
        })?;

        rt.block_on(async {
            let result = client(ctx)
                .await
                .encrypt()
                .key_id(key_id)
                .plaintext(Blob::new(plaintext.as_bytes()))
                .send()
                .await
                .map_err(|e| {
                    CipherError::EncryptionFailed(format!(
                        "KMS encrypt failed: {}",
                        aws_sdk_kms::error::DisplayErrorContext(&e)
                    ))
                })?;

            let blob = result
                .ciphertext_blob()
                .ok_or_else(|| CipherError::EncryptionFailed("no ciphertext returned".into()))?;
            let encoded = ::base64::engine::general_purpose::STANDARD.encode(blob.as_ref());

            trace!(ciphertext_len = encoded.len(), "encrypted with AWS KMS");
            Ok::<_, Error>(encoded)
        })
    }

    fn decrypt(&self, ciphertext: &str, ctx: &KeyContext) -> Result<String> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting with AWS KMS");

        let blob = ::base64::engine::general_purpose::STANDARD
            .decode(ciphertext)
            .map_err(|e| CipherError::DecryptionFailed(format!("invalid base64: {}", e)))?;

        let rt = Self::runtime().map_err(|e| {
            CipherError::DecryptionFailed(format!("failed to create runtime: {}", e))
        })?;

        rt.block_on(async {
            // Symmetric ciphertext names its key; pass ours only to pin it.
            let result = client(ctx)
                .await
                .decrypt()
                .set_key_id(ctx.key_id.clone())
                .ciphertext_blob(Blob::new(blob))
                .send()
                .await
                .map_err(|e| {
                    CipherError::DecryptionFailed(format!(
                        "KMS decrypt failed: {}",
                        aws_sdk_kms::error::DisplayErrorContext(&e)
                    ))
                })?;

            let plaintext_blob = result
                .plaintext()
                .ok_or_else(|| CipherError::DecryptionFailed("no plaintext returned".into()))?;
            let plaintext = String::from_utf8(plaintext_blob.as_ref().to_vec())
                .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)))?;

            trace!(plaintext_len = plaintext.len(), "decrypted with AWS KMS");
            Ok::<_, Error>(plaintext)
        })
    }

    fn name(&self) -> &'static str {
        "aws-kms"
    }
}
