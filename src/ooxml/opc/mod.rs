//! Open Packaging Conventions (OPC) support.
//!
//! Office documents are ZIP archives of parts linked by relationship parts.
//! This module loads such an archive into memory, resolves relationships
//! between parts, and writes edited packages back out.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod rel;

pub use error::{OpcError, Result};
pub use package::Package;
pub use packuri::PackURI;
pub use rel::{Relationship, Relationships};
