//! Test fixtures and constants.

/// Host config with a per-stage key id table.
pub const PER_STAGE_CONFIG: &str = r#"
[provider]
stage = "dev"
region = "us-east-1"

[custom.env_encryption_key_id]
dev = "alias/app-dev"
prod = "alias/app-prod"
"#;

/// Host config with one key id for every stage.
pub const SINGLE_KEY_CONFIG: &str = r#"
[provider]
stage = "dev"

[custom]
env_encryption_key_id = "alias/app"
"#;

/// Host config without any key id.
pub const NO_KEY_CONFIG: &str = r#"
[provider]
stage = "dev"
"#;

/// Store with an empty dev stage.
pub const DEV_STORE: &str = r#"{"common":{},"stages":{"dev":{}}}"#;

/// Empty store as written by `envcrypt init`.
pub const EMPTY_STORE: &str = r#"{"common":{},"stages":{}}"#;

/// Values that must survive a set/reveal roundtrip byte-for-byte.
pub const TRICKY_VALUES: &[(&str, &str)] = &[
    ("UNICODE", "こんにちは世界 🚀"),
    ("QUOTES", r#"it's a "quoted" value"#),
    ("BACKSLASH", r"C:\path\to\file"),
    ("SHELL", "$(echo pwned) `id` && rm -rf /"),
    ("SPACES", "  padded value  "),
    ("JSONISH", r#"{"nested": ["json", 1]}"#),
];
