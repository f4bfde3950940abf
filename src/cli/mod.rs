//! Command-line interface.

pub mod completions;
pub mod encryptor;
pub mod init;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Overrides;

/// envcrypt - KMS-encrypted, stage-aware secrets in env.json.
#[derive(Parser)]
#[command(
    name = "envcrypt",
    about = "KMS-encrypted, stage-aware secrets in env.json",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Host-context overrides shared by every command.
///
/// Each falls back to `.envcrypt.toml` in the service path when unset.
#[derive(Args, Debug, Default, Clone)]
pub struct ContextArgs {
    /// Deployment stage (e.g., dev, prod)
    #[arg(short, long, global = true, env = "ENVCRYPT_STAGE")]
    pub stage: Option<String>,

    /// AWS region of the KMS key
    #[arg(short, long, global = true, env = "ENVCRYPT_REGION")]
    pub region: Option<String>,

    /// AWS credentials profile
    #[arg(long, global = true, env = "ENVCRYPT_PROFILE")]
    pub profile: Option<String>,

    /// Service directory holding env.json and .envcrypt.toml
    #[arg(long, global = true, env = "ENVCRYPT_SERVICE_PATH")]
    pub service_path: Option<PathBuf>,
}

impl From<ContextArgs> for Overrides {
    fn from(args: ContextArgs) -> Self {
        Self {
            region: args.region,
            profile: args.profile,
            stage: args.stage,
            service_path: args.service_path,
        }
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt a value into env.json, or reveal one with --decrypt
    Encryptor {
        /// Value of the secret (required unless --decrypt)
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,
        /// Name of the secret
        #[arg(long)]
        variable: Option<String>,
        /// Decrypt and print the stored value instead of setting it
        #[arg(long)]
        decrypt: bool,
        /// Use the shared namespace instead of the current stage
        #[arg(long)]
        common: bool,
    },

    /// Create an empty env.json in the service path
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(command: Command, context: ContextArgs) -> crate::error::Result<()> {
    use Command::*;

    let overrides = Overrides::from(context);
    match command {
        Encryptor {
            value,
            variable,
            decrypt,
            common,
        } => encryptor::execute(
            crate::core::domain::CommandOptions {
                value,
                variable,
                decrypt,
                common,
            },
            &overrides,
        ),
        Init => init::execute(&overrides),
        Completions { shell } => completions::execute(shell),
    }
}
