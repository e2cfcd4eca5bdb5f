//! Slide XML for question slides.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::layout::Placeholder;

/// One placeholder shape on a new slide.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderFill<'a> {
    pub placeholder: &'a Placeholder,
    /// Text to show; `None` leaves the layout's prompt text visible
    pub text: Option<&'a str>,
}

/// A slide that repeats placeholders of its layout, some of them filled.
#[derive(Debug, Clone, Default)]
pub struct SlideXml<'a> {
    shapes: Vec<PlaceholderFill<'a>>,
}

impl<'a> SlideXml<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a placeholder shape, in shape-tree order.
    pub fn placeholder(&mut self, placeholder: &'a Placeholder, text: Option<&'a str>) -> &mut Self {
        self.shapes.push(PlaceholderFill { placeholder, text });
        self
    }

    /// Generate the slide part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<p:sld xmlns:a=""#);
        xml.push_str(namespace::DML_MAIN);
        xml.push_str(r#"" xmlns:r=""#);
        xml.push_str(namespace::OFC_RELATIONSHIPS);
        xml.push_str(r#"" xmlns:p=""#);
        xml.push_str(namespace::PML_MAIN);
        xml.push_str(r#"">"#);

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        // The group shape uses id 1
        for (i, shape) in self.shapes.iter().enumerate() {
            write_placeholder_shape(&mut xml, i as u32 + 2, shape);
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        xml
    }
}

fn write_placeholder_shape(xml: &mut String, id: u32, shape: &PlaceholderFill<'_>) {
    let ph = shape.placeholder;

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    xml.push_str(&format!(r#"<p:cNvPr id="{}" name=""#, id));
    if ph.name.is_empty() {
        xml.push_str(&format!("Placeholder {}", id - 1));
    } else {
        xml.push_str(&escape_xml(&ph.name));
    }
    xml.push_str(r#""/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str("<p:nvPr>");
    xml.push_str(&ph.ph_xml());
    xml.push_str("</p:nvPr>");
    xml.push_str("</p:nvSpPr>");
    xml.push_str("<p:spPr/>");

    match shape.text {
        Some(text) => {
            xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
            write_paragraphs(xml, text);
            xml.push_str("</p:txBody>");
        },
        None if ph.has_text_frame() => {
            xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>");
        },
        None => {},
    }

    xml.push_str("</p:sp>");
}

/// One `<a:p>` per line of `text`.
fn write_paragraphs(xml: &mut String, text: &str) {
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            xml.push_str("<a:p/>");
            continue;
        }
        xml.push_str("<a:p><a:r>");
        xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#);
        xml.push_str("<a:t>");
        xml.push_str(&escape_xml(line));
        xml.push_str("</a:t>");
        xml.push_str("</a:r></a:p>");
    }
}
