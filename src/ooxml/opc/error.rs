//! Errors raised while reading or writing an OPC package.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    /// The package file itself is missing
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    /// A part name that is not an absolute, slash-prefixed URI
    #[error("Invalid part name: {0}")]
    InvalidPackUri(String),

    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// No relationship of the requested type or id
    #[error("Relationship not found: {0}")]
    RelationshipNotFound(String),

    /// A relationship that cannot be followed, e.g. an external target
    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),

    #[error("Malformed package XML: {0}")]
    XmlError(String),

    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML reader error: {0}")]
    QuickXmlError(#[from] quick_xml::Error),

    /// A part that should be text is not valid UTF-8
    #[error("Part is not UTF-8: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("Bad XML attribute: {0}")]
    AttrError(#[from] quick_xml::events::attributes::AttrError),
}

pub type Result<T> = std::result::Result<T, OpcError>;
