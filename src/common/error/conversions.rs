//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            OpcError::ZipError(e) => Error::ZipError(e.to_string()),
            OpcError::XmlError(s) => Error::XmlError(s),
            OpcError::QuickXmlError(e) => Error::XmlError(e.to_string()),
            OpcError::PartNotFound(s) => Error::ComponentNotFound(s),
            OpcError::PackageNotFound(s) => Error::ComponentNotFound(s),
            OpcError::RelationshipNotFound(s) => Error::ComponentNotFound(s),
            OpcError::InvalidRelationship(s) => Error::InvalidFormat(s),
            OpcError::InvalidPackUri(s) => Error::InvalidFormat(format!("part name {}", s)),
            OpcError::Utf8Error(e) => e.into(),
            OpcError::AttrError(e) => e.into(),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlError(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipError(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidFormat(format!("invalid UTF-8 in document part: {}", err))
    }
}
