//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid field geometry: {0}")]
    InvalidGrid(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Rejection sampling ran out of attempts.
///
/// Only produced when an attempt cap is configured; without one the samplers
/// retry forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no free cell for food after {attempts} attempts")]
    Food { attempts: u32 },

    #[error("no free cell for obstacle #{index} after {attempts} attempts")]
    Obstacle { index: usize, attempts: u32 },
}

pub type Result<T> = std::result::Result<T, SnakeError>;
