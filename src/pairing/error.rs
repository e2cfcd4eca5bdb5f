//! Error types for the pairing engine.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// The engine was called with a configuration it cannot run with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No pairing without self-matches could be produced
    #[error("Unsatisfiable input: {0}")]
    UnsatisfiableInput(String),
}

pub type Result<T> = std::result::Result<T, PairingError>;
