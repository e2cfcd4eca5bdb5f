//! Office Open XML (OOXML) documents.
//!
//! The question pool is read from a SpreadsheetML workbook (`.xlsx`) and the
//! quiz is written into a PresentationML template (`.pptx`). Both are Open
//! Packaging Conventions packages:
//!
//! 1. **OPC Layer** (`opc`): ZIP members, part names and relationships
//! 2. **Format-Specific Modules**:
//!    - `xlsx`: question workbooks
//!    - `pptx`: question decks
pub mod opc;
pub mod pptx;
pub mod xlsx;

// Re-export commonly used types from OPC layer
pub use opc::{PackURI, Package};
