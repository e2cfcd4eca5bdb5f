//! Shared strings table for Excel files.
//!
//! Cells of type `s` store an index into `xl/sharedStrings.xml` instead of
//! their text. Each `<si>` entry is either a single `<t>` or a sequence of
//! rich-text runs, flattened here to plain text.

use super::parsers::{namespace_prefix, text_runs};
use crate::common::xml::elements;

/// Shared strings table, indexed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedStrings {
    strings: Vec<String>,
}

impl SharedStrings {
    /// Parse xl/sharedStrings.xml content.
    pub fn parse(content: &str) -> Self {
        let prefix = namespace_prefix(content, "sst");
        let strings = elements(content, &format!("{}si", prefix))
            .map(|si| text_runs(si.text(), prefix))
            .collect();
        Self { strings }
    }

    /// Get a string by its index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl From<Vec<String>> for SharedStrings {
    fn from(strings: Vec<String>) -> Self {
        Self { strings }
    }
}
