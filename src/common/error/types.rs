//! Crate-level error types.
use thiserror::Error;

/// Main error type for quizpair operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unexpected document structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Part, worksheet or slide layout not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Feature of the input document that is not supported
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// The pairing engine could not produce a pairing
    #[error(transparent)]
    Pairing(#[from] crate::pairing::PairingError),
}

/// Result type for quizpair operations.
pub type Result<T> = std::result::Result<T, Error>;
