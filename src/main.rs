//! envcrypt - KMS-encrypted, stage-aware secrets in env.json.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envcrypt::cli::output;
use envcrypt::cli::{execute, Cli};
use envcrypt::error::{CipherError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ENVCRYPT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envcrypt=debug")
        } else {
            EnvFilter::new("envcrypt=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.context) {
        let suggestion = match &e {
            Error::Store(err) if err.is_missing() => Some("run: envcrypt init"),
            Error::Config(ConfigError::MissingStage) => {
                Some("pass --stage or set provider.stage in .envcrypt.toml")
            }
            Error::Cipher(CipherError::MissingKeyId { .. }) => {
                Some("set custom.env_encryption_key_id in .envcrypt.toml")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
