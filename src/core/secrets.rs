//! Secret operations (set, reveal).
//!
//! Each operation is a straight pipeline: validate, load the store, call
//! the KMS, persist (set only), report. The first failure ends it, and
//! nothing is written unless every earlier step succeeded.

use std::borrow::Cow;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::cipher::KmsBackend;
use crate::core::domain::{CommandOptions, KeyContext, Namespace};
use crate::core::store::{self, SecretStore};
use crate::core::types::{SecretName, SecretValue};
use crate::error::{Result, SecretError};

/// What an `encryptor` run did, for the caller to report.
#[derive(Debug)]
pub enum Outcome {
    /// A secret was encrypted and written to the store.
    Set {
        variable: SecretName,
        namespace: Namespace,
        /// Stored value, marker included
        stored: SecretValue,
    },
    /// A secret was decrypted.
    Revealed {
        variable: SecretName,
        namespace: Namespace,
        plaintext: Zeroizing<String>,
        /// False when the stored value lacked the encryption marker
        marked: bool,
    },
}

/// Run one `encryptor` invocation: reveal when `decrypt` is set, else set.
///
/// # Errors
///
/// See [`set_secret`] and [`reveal_secret`].
pub fn execute(
    options: &CommandOptions,
    ctx: &KeyContext,
    kms: &dyn KmsBackend,
) -> Result<Outcome> {
    if options.decrypt {
        reveal_secret(options, ctx, kms)
    } else {
        set_secret(options, ctx, kms)
    }
}

/// Encrypt a value and store it under the chosen namespace.
///
/// Overwrites any existing value with the same name. The stage map is
/// created if this is the stage's first secret.
///
/// # Errors
///
/// Returns `ValidationError` if the variable or value is missing,
/// `ConfigError::MissingStage` for a stage write without a stage,
/// `StoreError` if the store cannot be read, parsed or written, and
/// `CipherError` if the KMS call fails. Validation and stage errors happen
/// before any I/O.
pub fn set_secret(
    options: &CommandOptions,
    ctx: &KeyContext,
    kms: &dyn KmsBackend,
) -> Result<Outcome> {
    let variable = options.require_variable()?;
    let value = options.require_value()?;
    let namespace = Namespace::select(options.common, ctx)?;

    let path = ctx.store_path();
    let mut secrets = SecretStore::load(&path)?;

    debug!(
        variable,
        namespace = %namespace,
        backend = kms.name(),
        value_len = value.len(),
        "encrypting secret"
    );
    let ciphertext = kms.encrypt(value, ctx)?;
    let stored = store::mark_encrypted(&ciphertext);

    if secrets
        .insert(&namespace, variable, stored.clone())
        .is_some()
    {
        debug!(variable, namespace = %namespace, "overwriting existing secret");
    }
    secrets.save(&path)?;

    info!(variable, namespace = %namespace, "secret set");
    Ok(Outcome::Set {
        variable: variable.to_string(),
        namespace,
        stored,
    })
}

/// Decrypt a stored secret.
///
/// The store is never written on this path.
///
/// # Errors
///
/// Returns `ValidationError::MissingVariable` if no variable was given,
/// `SecretError::NotFound` if the namespace has no (or an empty) value for
/// it, `StoreError` if the store cannot be read or parsed, and
/// `CipherError` if the KMS call fails.
pub fn reveal_secret(
    options: &CommandOptions,
    ctx: &KeyContext,
    kms: &dyn KmsBackend,
) -> Result<Outcome> {
    let variable = options.require_variable()?;
    let namespace = Namespace::select(options.common, ctx)?;

    let secrets = SecretStore::load(&ctx.store_path())?;

    // An empty stored value counts as absent.
    let value = secrets
        .get(&namespace, variable)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SecretError::NotFound {
            name: variable.to_string(),
            namespace: namespace.clone(),
        })?;

    let marked = store::is_encrypted(value);
    debug!(
        variable,
        namespace = %namespace,
        backend = kms.name(),
        marked,
        "decrypting secret"
    );

    // Common secrets may carry any stage's key, so the key id is only
    // pinned for stage secrets.
    let decrypt_ctx = match namespace {
        Namespace::Common => Cow::Owned(KeyContext {
            key_id: None,
            ..ctx.clone()
        }),
        Namespace::Stage(_) => Cow::Borrowed(ctx),
    };
    let plaintext = Zeroizing::new(kms.decrypt(store::unmark_encrypted(value), &decrypt_ctx)?);

    info!(variable, namespace = %namespace, "secret revealed");
    Ok(Outcome::Revealed {
        variable: variable.to_string(),
        namespace,
        plaintext,
        marked,
    })
}
