//! Encryptor command - set or reveal one secret.

use tracing::debug;

use crate::cli::output;
use crate::core::cipher;
use crate::core::config::{self, Overrides};
use crate::core::domain::CommandOptions;
use crate::core::secrets::{self, Outcome};
use crate::error::Result;

/// Resolve the key context, run the set or reveal pipeline, report.
///
/// Missing `--variable` or `--value` is reported before the host config
/// is read or a backend is chosen.
pub fn execute(options: CommandOptions, overrides: &Overrides) -> Result<()> {
    options.require_variable()?;
    if !options.decrypt {
        options.require_value()?;
    }

    let ctx = config::load_context(overrides)?;
    let kms = cipher::default_backend()?;
    debug!(backend = kms.name(), decrypt = options.decrypt, "running encryptor");

    match secrets::execute(&options, &ctx, kms.as_ref())? {
        Outcome::Set {
            variable,
            namespace,
            stored,
        } => {
            output::success(&format!(
                "set {} for {} environment",
                output::key(&variable),
                namespace
            ));
            output::kv("stored:", &stored);
        }
        Outcome::Revealed {
            variable,
            plaintext,
            marked,
            ..
        } => {
            if !marked {
                output::warn(&format!(
                    "{} has no encryption marker, decrypted as stored",
                    output::key(&variable)
                ));
            }
            println!("{}", plaintext.as_str());
        }
    }

    Ok(())
}
