//! Domain types.
//!
//! Values that flow between the resolver, the store codec, the KMS gateway
//! and the command engine.

mod key_context;
mod namespace;
mod options;

pub use key_context::KeyContext;
pub use namespace::Namespace;
pub use options::CommandOptions;
