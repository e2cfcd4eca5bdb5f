//! Crate-level error types.
//!
//! This module provides the error type returned by the document collaborators
//! and the command-line front end, wrapping packaging and pairing errors.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
