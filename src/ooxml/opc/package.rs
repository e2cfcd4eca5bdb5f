//! In-memory OPC package.
//!
//! A [`Package`] holds every ZIP member of a workbook or presentation as raw
//! bytes, in archive order. Parts are looked up by [`PackURI`], edited as
//! bytes or strings, and written back out as a new archive.

use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Upper bound when probing for a free numbered part name.
const MAX_PART_NUMBER: u32 = 100_000;

#[derive(Debug, Clone, Default)]
pub struct Package {
    /// (member name, contents) in archive order
    members: Vec<(String, Vec<u8>)>,
    /// member name -> position in `members`
    index: HashMap<String, usize>,
}

impl Package {
    /// Open a package from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Load a package from bytes already in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }

    /// Load every member of a ZIP archive.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(reader)?;
        let mut package = Self::default();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().to_string();
            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data)?;
            package.insert(name, data);
        }

        tracing::debug!(members = package.members.len(), "loaded package");
        Ok(package)
    }

    fn insert(&mut self, name: String, data: Vec<u8>) {
        match self.index.get(&name) {
            Some(&pos) => self.members[pos].1 = data,
            None => {
                self.index.insert(name.clone(), self.members.len());
                self.members.push((name, data));
            },
        }
    }

    /// Raw bytes of a part.
    pub fn part(&self, partname: &PackURI) -> Result<&[u8]> {
        self.index
            .get(partname.membername())
            .map(|&pos| self.members[pos].1.as_slice())
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// A part decoded as UTF-8 text.
    pub fn part_str(&self, partname: &PackURI) -> Result<&str> {
        Ok(std::str::from_utf8(self.part(partname)?)?)
    }

    #[inline]
    pub fn contains(&self, partname: &PackURI) -> bool {
        self.index.contains_key(partname.membername())
    }

    /// Add a part, or replace the contents of an existing one.
    pub fn set_part(&mut self, partname: &PackURI, data: impl Into<Vec<u8>>) {
        self.insert(partname.membername().to_string(), data.into());
    }

    /// ZIP member names in archive order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(name, _)| name.as_str())
    }

    /// Relationships whose source is `source`. A part without a `.rels`
    /// part has no relationships.
    pub fn rels_for(&self, source: &PackURI) -> Result<Relationships> {
        let rels_uri = source.rels_uri();
        if !self.contains(&rels_uri) {
            return Ok(Relationships::new(source.base_uri()));
        }
        Relationships::from_xml(source.base_uri(), self.part(&rels_uri)?)
    }

    /// Replace the `.rels` part of `source`.
    pub fn set_rels(&mut self, source: &PackURI, rels: &Relationships) {
        self.set_part(&source.rels_uri(), rels.to_xml());
    }

    /// Part name of the main document (workbook, presentation, ...) named by
    /// the package-level officeDocument relationship.
    pub fn main_document_uri(&self) -> Result<PackURI> {
        let root = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let rels = self.rels_for(&root)?;
        let rel = rels.first_of_type(relationship_type::OFFICE_DOCUMENT)?;
        rels.target_partname(rel)
    }

    /// First unused part name from a template with a `%d` placeholder,
    /// e.g. `/ppt/slides/slide%d.xml`.
    pub fn next_partname(&self, template: &str) -> Result<PackURI> {
        for n in 1..=MAX_PART_NUMBER {
            let candidate = PackURI::new(template.replace("%d", &n.to_string()))
                .map_err(OpcError::InvalidPackUri)?;
            if !self.contains(&candidate) {
                return Ok(candidate);
            }
        }
        Err(OpcError::InvalidPackUri(format!(
            "no free part name for '{}'",
            template
        )))
    }

    /// Register a content type override for `partname` in
    /// `[Content_Types].xml`, unless one is already present.
    pub fn add_content_type_override(&mut self, partname: &PackURI, content_type: &str) -> Result<()> {
        let ct_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        let xml = self.part_str(&ct_uri)?;

        let needle = format!(r#"PartName="{}""#, partname);
        if memchr::memmem::find(xml.as_bytes(), needle.as_bytes()).is_some() {
            return Ok(());
        }

        let close = memchr::memmem::rfind(xml.as_bytes(), b"</Types>").ok_or_else(|| {
            OpcError::XmlError("[Content_Types].xml has no closing </Types>".to_string())
        })?;

        let mut updated = String::with_capacity(xml.len() + needle.len() + content_type.len() + 32);
        updated.push_str(&xml[..close]);
        updated.push_str("<Override ");
        updated.push_str(&needle);
        updated.push_str(r#" ContentType=""#);
        updated.push_str(content_type);
        updated.push_str(r#""/>"#);
        updated.push_str(&xml[close..]);

        self.set_part(&ct_uri, updated);
        Ok(())
    }

    /// Write the package as a ZIP archive.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (name, data) in &self.members {
            writer.start_file(name.as_str(), options)?;
            writer.write_all(data)?;
        }

        Ok(writer.finish()?.into_inner())
    }

    /// Write the package to a file, replacing it if it exists.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}
