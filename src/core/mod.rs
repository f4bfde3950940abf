//! Core library components.
//!
//! Key-context resolution, the secret store codec, the KMS gateway and the
//! set/reveal engine. Nothing here prints; the CLI layer reports.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod secrets;
pub mod store;
pub mod types;
