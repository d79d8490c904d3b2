//! Error types for loading and running encounters.

use slayer_rules::SlayerError;
use thiserror::Error;

/// Errors raised while loading or narrating an encounter.
#[derive(Debug, Error)]
pub enum EncounterError {
    #[error("invalid encounter script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("encounter script has no stages")]
    EmptyScript,

    #[error(transparent)]
    Slayer(#[from] SlayerError),

    #[error("failed to narrate encounter: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EncounterError>;
