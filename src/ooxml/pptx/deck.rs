//! Question decks built on a template presentation.

use std::path::Path;

use tracing::debug;

use super::layout::{SlideLayout, slide_layouts};
use super::presentation::{append_slide_id, next_slide_id};
use super::writer::SlideXml;
use crate::common::{Error, Result};
use crate::ooxml::opc::constants::{content_type, relationship_type};
use crate::ooxml::opc::{PackURI, Package, Relationships};
use crate::pairing::Pairing;
use crate::quiz::{Labels, QuizRenderer};

const SLIDE_PARTNAME_TEMPLATE: &str = "/ppt/slides/slide%d.xml";

/// A template presentation that question slides are appended to.
///
/// Every slide uses the same layout of the template. The layout's title
/// placeholder gets the slide title; two further placeholders get the
/// questions shown to group A and group B.
#[derive(Debug)]
pub struct QuestionDeck {
    package: Package,
    presentation: PackURI,
    layout: SlideLayout,
    layout_names: Vec<String>,
    slides_added: Vec<PackURI>,
}

impl QuestionDeck {
    /// Open a template and select the layout named `layout_name`.
    pub fn open<P: AsRef<Path>>(template: P, layout_name: &str) -> Result<Self> {
        Self::from_package(Package::open(template)?, layout_name)
    }

    /// Like [`open`](Self::open), with the template already in memory.
    pub fn from_bytes(bytes: &[u8], layout_name: &str) -> Result<Self> {
        Self::from_package(Package::from_bytes(bytes)?, layout_name)
    }

    fn from_package(package: Package, layout_name: &str) -> Result<Self> {
        let presentation = package
            .main_document_uri()
            .map_err(|e| Error::ComponentNotFound(format!("presentation part: {}", e)))?;

        let layouts = slide_layouts(&package, &presentation)?;
        let layout_names: Vec<String> = layouts.iter().map(|l| l.name.clone()).collect();
        let layout = layouts
            .into_iter()
            .find(|l| l.name == layout_name)
            .ok_or_else(|| {
                Error::ComponentNotFound(format!(
                    "slide layout '{}' (available: {})",
                    layout_name,
                    layout_names.join(", ")
                ))
            })?;

        // Fail on an unusable layout before any slide is written
        layout.question_placeholders()?;
        debug!(layout = %layout.name, part = %layout.partname, "selected slide layout");

        Ok(Self {
            package,
            presentation,
            layout,
            layout_names,
            slides_added: Vec::new(),
        })
    }

    #[inline]
    pub fn layout(&self) -> &SlideLayout {
        &self.layout
    }

    /// Names of all layouts in the template, in master order.
    #[inline]
    pub fn layout_names(&self) -> &[String] {
        &self.layout_names
    }

    /// Part names of the slides added so far.
    #[inline]
    pub fn slides_added(&self) -> &[PackURI] {
        &self.slides_added
    }

    /// Append one slide and return its part name.
    pub fn add_question_slide(
        &mut self,
        title: &str,
        question_a: &str,
        question_b: &str,
    ) -> Result<PackURI> {
        let xml = {
            let (ph_a, ph_b) = self.layout.question_placeholders()?;
            let mut slide = SlideXml::new();
            for ph in self.layout.cloneable_placeholders() {
                let text = if ph.is_title() {
                    Some(title)
                } else if std::ptr::eq(ph, ph_a) {
                    Some(question_a)
                } else if std::ptr::eq(ph, ph_b) {
                    Some(question_b)
                } else {
                    None
                };
                slide.placeholder(ph, text);
            }
            slide.to_xml()
        };

        let partname = self.package.next_partname(SLIDE_PARTNAME_TEMPLATE)?;
        self.package.set_part(&partname, xml);
        self.package
            .add_content_type_override(&partname, content_type::PML_SLIDE)?;

        let mut slide_rels = Relationships::new(partname.base_uri());
        slide_rels.add(relationship_type::SLIDE_LAYOUT, &self.layout.partname);
        self.package.set_rels(&partname, &slide_rels);

        let mut pres_rels = self.package.rels_for(&self.presentation)?;
        let r_id = pres_rels.add(relationship_type::SLIDE, &partname);
        self.package.set_rels(&self.presentation, &pres_rels);

        let pres_xml = self.package.part_str(&self.presentation)?;
        let slide_id = next_slide_id(pres_xml)?;
        let updated = append_slide_id(pres_xml, slide_id, &r_id)?;
        self.package.set_part(&self.presentation, updated);

        debug!(slide = %partname, slide_id, r_id = %r_id, "added question slide");
        self.slides_added.push(partname.clone());
        Ok(partname)
    }

    /// The presentation as `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.package.to_bytes()?)
    }

    /// Write the presentation to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        Ok(self.package.save(path)?)
    }
}

impl QuizRenderer for QuestionDeck {
    fn render(&mut self, pairing: &Pairing, labels: &Labels) -> Result<()> {
        for (i, (a, b)) in pairing.pairs().enumerate() {
            self.add_question_slide(&labels.question_title(i), a.question(), b.question())?;
        }
        debug!(slides = pairing.len(), "rendered question slides");
        Ok(())
    }
}
