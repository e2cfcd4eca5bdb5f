//! XML writers for parts added to a presentation.

pub mod slide;

pub use slide::{PlaceholderFill, SlideXml};
