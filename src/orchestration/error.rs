// Sun Oct 18 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error("Failed to spawn fetch unit: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("Conduit is closed")]
    ConduitClosed,
    #[error("Conduit is full")]
    ConduitFull,
    #[error("Conduit receiver disconnected")]
    Disconnected,
    #[error("Conduit must be closed before it is drained")]
    NotFinalized,
}

pub type Result<T> = std::result::Result<T, OrchestrationError>;
