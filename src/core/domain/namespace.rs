//! Secret namespaces.

use std::fmt;

use super::KeyContext;
use crate::core::constants;
use crate::core::types::StageName;
use crate::error::Result;

/// Where a secret lives in the store: the shared `common` map or one
/// stage's map under `stages`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Namespace {
    Common,
    Stage(StageName),
}

impl Namespace {
    /// Pick the namespace for a command.
    ///
    /// The common namespace never needs a stage; a stage namespace fails
    /// with `ConfigError::MissingStage` when the context has none.
    pub fn select(common: bool, ctx: &KeyContext) -> Result<Self> {
        if common {
            return Ok(Self::Common);
        }
        Ok(Self::Stage(ctx.require_stage()?.to_string()))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => f.write_str(constants::COMMON_NAMESPACE),
            Self::Stage(stage) => f.write_str(stage),
        }
    }
}
