//! Init command - provision an empty secret store.

use tracing::info;

use crate::cli::output;
use crate::core::config::{self, Overrides};
use crate::core::constants;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Create `env.json` in the service path.
pub fn execute(overrides: &Overrides) -> Result<()> {
    let path = config::service_path(overrides).join(constants::STORE_FILE);
    info!(path = %path.display(), "initializing secret store");

    SecretStore::create(&path)?;

    output::success(&format!("initialized {}", output::path(&path.display().to_string())));
    output::hint(&format!(
        "next: {}",
        output::cmd("envcrypt encryptor --variable NAME --value VALUE")
    ));
    Ok(())
}
