//! Slide layouts and their placeholders.
//!
//! A question slide inherits its look from one layout of the template. Only
//! the layout's name and placeholder shapes are read: new slides repeat each
//! placeholder (by type and idx) and PowerPoint pulls geometry and formatting
//! from the layout.

use std::collections::HashSet;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::common::xml::escape_xml;
use crate::common::{Error, Result};
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::{PackURI, Package};

/// Placeholder types a slide does not inherit from its layout.
const NON_CLONEABLE_TYPES: [&str; 3] = ["dt", "ftr", "sldNum"];

/// A `<p:ph>` placeholder shape of a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholder {
    /// Shape name from `<p:cNvPr name>`
    pub name: String,
    /// `type` attribute; absent means a generic object placeholder
    pub kind: Option<String>,
    pub idx: Option<u32>,
    pub orient: Option<String>,
    pub sz: Option<String>,
}

impl Placeholder {
    /// Title or centered-title placeholder.
    pub fn is_title(&self) -> bool {
        matches!(self.kind.as_deref(), Some("title" | "ctrTitle"))
    }

    /// Whether slides based on the layout get a copy of this placeholder.
    pub fn is_cloneable(&self) -> bool {
        !self
            .kind
            .as_deref()
            .is_some_and(|kind| NON_CLONEABLE_TYPES.contains(&kind))
    }

    /// Placeholders that hold text when first created.
    pub fn has_text_frame(&self) -> bool {
        matches!(
            self.kind.as_deref(),
            None | Some("title" | "ctrTitle" | "subTitle" | "body" | "obj")
        )
    }

    /// The `<p:ph .../>` element that links a slide shape to this placeholder.
    pub fn ph_xml(&self) -> String {
        let mut xml = String::from("<p:ph");
        if let Some(kind) = &self.kind {
            xml.push_str(&format!(r#" type="{}""#, escape_xml(kind)));
        }
        if let Some(orient) = &self.orient {
            xml.push_str(&format!(r#" orient="{}""#, escape_xml(orient)));
        }
        if let Some(sz) = &self.sz {
            xml.push_str(&format!(r#" sz="{}""#, escape_xml(sz)));
        }
        if let Some(idx) = self.idx {
            xml.push_str(&format!(r#" idx="{}""#, idx));
        }
        xml.push_str("/>");
        xml
    }
}

/// A slide layout part of the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideLayout {
    pub partname: PackURI,
    /// Layout name from `<p:cSld name>`, as shown in PowerPoint's layout gallery
    pub name: String,
    /// Placeholders in shape-tree order
    pub placeholders: Vec<Placeholder>,
}

impl SlideLayout {
    /// Parse a slideLayout part.
    pub fn parse(partname: PackURI, xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut name = String::new();
        let mut placeholders = Vec::new();
        // Placeholder under construction while inside a <p:sp>
        let mut current: Option<Placeholder> = None;
        let mut current_is_ph = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"sp" => {
                    current = Some(Placeholder::default());
                    current_is_ph = false;
                },
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"cSld" => name = attribute(&e, b"name")?.unwrap_or_default(),
                    b"cNvPr" => {
                        if let Some(ph) = current.as_mut() {
                            ph.name = attribute(&e, b"name")?.unwrap_or_default();
                        }
                    },
                    b"ph" => {
                        if let Some(ph) = current.as_mut() {
                            current_is_ph = true;
                            ph.kind = attribute(&e, b"type")?;
                            ph.orient = attribute(&e, b"orient")?;
                            ph.sz = attribute(&e, b"sz")?;
                            ph.idx = attribute(&e, b"idx")?
                                .and_then(|idx| atoi_simd::parse::<u32>(idx.as_bytes()).ok());
                        }
                    },
                    _ => {},
                },
                Ok(Event::End(e)) => {
                    if e.local_name().as_ref() == b"sp" {
                        if let Some(ph) = current.take()
                            && current_is_ph
                        {
                            placeholders.push(ph);
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "slide layout {}: {}",
                        partname, e
                    )));
                },
                _ => {},
            }
        }

        Ok(Self {
            partname,
            name,
            placeholders,
        })
    }

    pub fn title_placeholder(&self) -> Option<&Placeholder> {
        self.placeholders.iter().find(|ph| ph.is_title())
    }

    /// Placeholders copied onto each new slide, in shape-tree order.
    pub fn cloneable_placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.placeholders.iter().filter(|ph| ph.is_cloneable())
    }

    /// The two placeholders that receive group A's and group B's question:
    /// the first two cloneable placeholders after the title, in shape-tree
    /// order.
    pub fn question_placeholders(&self) -> Result<(&Placeholder, &Placeholder)> {
        if self.title_placeholder().is_none() {
            return Err(Error::InvalidFormat(format!(
                "layout '{}' has no title placeholder",
                self.name
            )));
        }

        let mut bodies = self.cloneable_placeholders().filter(|ph| !ph.is_title());
        match (bodies.next(), bodies.next()) {
            (Some(a), Some(b)) => Ok((a, b)),
            (found, _) => Err(Error::InvalidFormat(format!(
                "layout '{}' needs two placeholders besides the title, found {}",
                self.name,
                usize::from(found.is_some())
            ))),
        }
    }
}

/// Unescaped value of an attribute.
fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// All slide layouts reachable from the presentation's slide masters, in
/// master order.
pub fn slide_layouts(package: &Package, presentation: &PackURI) -> Result<Vec<SlideLayout>> {
    let pres_rels = package.rels_for(presentation)?;
    let mut seen = HashSet::new();
    let mut layouts = Vec::new();

    for master_rel in pres_rels
        .iter()
        .filter(|rel| rel.reltype() == relationship_type::SLIDE_MASTER)
    {
        let master = pres_rels.target_partname(master_rel)?;
        let master_rels = package.rels_for(&master)?;
        for layout_rel in master_rels
            .iter()
            .filter(|rel| rel.reltype() == relationship_type::SLIDE_LAYOUT)
        {
            let partname = master_rels.target_partname(layout_rel)?;
            if !seen.insert(partname.clone()) {
                continue;
            }
            let xml = package.part(&partname)?;
            layouts.push(SlideLayout::parse(partname, xml)?);
        }
    }

    Ok(layouts)
}
