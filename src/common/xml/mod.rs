//! XML text helpers.

pub mod escape;
pub mod scan;

pub use escape::{escape_xml, unescape_xml};
pub use scan::{Element, attribute, elements, next_element};
