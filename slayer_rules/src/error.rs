//! Error types for strategy lookup and narration.

use thiserror::Error;

/// Errors raised while selecting or executing a strategy.
#[derive(Debug, Error)]
pub enum SlayerError {
    #[error("unknown strategy `{0}` (expected one of: melee, projectile, spell)")]
    UnknownStrategy(String),

    #[error("failed to narrate battle: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SlayerError>;
