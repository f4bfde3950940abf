//! envcrypt - KMS-encrypted, stage-aware secrets in `env.json`.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encryptor     # Set or reveal a secret
//! │   ├── init          # Provision an empty env.json
//! │   ├── completions   # Shell completions
//! │   └── output        # Status line helpers
//! └── core/             # Core library components
//!     ├── config        # .envcrypt.toml + key-context resolution
//!     ├── domain/       # KeyContext, Namespace, CommandOptions
//!     ├── store/        # env.json codec and encryption marker
//!     ├── cipher/       # KMS gateway
//!     │   ├── mod       # KmsBackend trait
//!     │   ├── aws       # AWS KMS implementation
//!     │   └── mock      # Deterministic test backend
//!     └── secrets       # Set / reveal pipelines
//! ```
//!
//! # Store format
//!
//! ```json
//! {
//!   "common": { "API_KEY": "encrypted:AQICAHh..." },
//!   "stages": { "dev": { "DB_PASS": "encrypted:AQICAHh..." } }
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;
