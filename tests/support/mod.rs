//! Test support utilities for envcrypt integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fakes;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fakes::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated service directory.
///
/// Child processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Temporary service directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment (no env.json, no config).
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with env.json provisioned via `envcrypt init`.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize store: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with a given env.json and host config.
    pub fn with(store: &str, config: &str) -> Self {
        let t = Self::new();
        t.write_store(store);
        t.write_config(config);
        t
    }

    /// Path to env.json.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("env.json")
    }

    /// Overwrite env.json with raw contents.
    pub fn write_store(&self, contents: &str) {
        std::fs::write(self.store_path(), contents).expect("failed to write env.json");
    }

    /// Overwrite .envcrypt.toml with raw contents.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".envcrypt.toml"), contents)
            .expect("failed to write .envcrypt.toml");
    }

    /// Raw env.json contents.
    pub fn read_store_raw(&self) -> String {
        std::fs::read_to_string(self.store_path()).expect("failed to read env.json")
    }

    /// Parsed env.json.
    pub fn read_store(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_store_raw()).expect("env.json is not valid JSON")
    }
}
