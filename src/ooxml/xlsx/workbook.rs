//! Question workbooks.
//!
//! Each row of the selected worksheet is one question: column A holds the
//! question text, column B the answer.

use std::path::Path;

use tracing::{debug, warn};

use super::parsers::workbook_parser::{SheetEntry, parse_workbook_xml};
use super::parsers::worksheet_parser::{Row, parse_worksheet_xml};
use super::shared_strings::SharedStrings;
use crate::common::{Error, Result};
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::{PackURI, Package, Relationships};
use crate::pairing::Question;
use crate::quiz::QuestionSource;

const QUESTION_COLUMN: u32 = 1;
const ANSWER_COLUMN: u32 = 2;

/// Which rows of which sheet become questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Worksheet name; the first worksheet when `None`
    pub sheet: Option<String>,
    /// Rows numbered up to and including this are ignored (e.g. 1 for a
    /// header row)
    pub skip_rows: usize,
}

/// An `.xlsx` workbook holding a question pool.
#[derive(Debug)]
pub struct QuestionWorkbook {
    package: Package,
    rels: Relationships,
    sheets: Vec<SheetEntry>,
    shared_strings: SharedStrings,
    options: ReadOptions,
}

impl QuestionWorkbook {
    /// Open a workbook file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_package(Package::open(path)?)
    }

    /// Load a workbook from bytes in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_package(Package::from_bytes(bytes)?)
    }

    fn from_package(package: Package) -> Result<Self> {
        let workbook_uri = package.main_document_uri().map_err(|e| {
            Error::ComponentNotFound(format!("workbook part: {}", e))
        })?;
        if !package.contains(&workbook_uri) {
            return Err(Error::ComponentNotFound(format!(
                "workbook part {} is missing",
                workbook_uri
            )));
        }

        let sheets = parse_workbook_xml(package.part_str(&workbook_uri)?);
        let rels = package.rels_for(&workbook_uri)?;

        let shared_strings = match rels.first_of_type(relationship_type::SHARED_STRINGS) {
            Ok(rel) => {
                let uri = rels.target_partname(rel)?;
                SharedStrings::parse(package.part_str(&uri)?)
            },
            Err(_) => SharedStrings::default(),
        };

        debug!(
            sheets = sheets.len(),
            shared_strings = shared_strings.len(),
            "opened workbook"
        );

        Ok(Self {
            package,
            rels,
            sheets,
            shared_strings,
            options: ReadOptions::default(),
        })
    }

    /// Use `options` when reading questions.
    pub fn with_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Worksheet names in tab order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// All rows of a worksheet (the first one when `name` is `None`).
    pub fn rows(&self, name: Option<&str>) -> Result<Vec<Row>> {
        let sheet = self.sheet(name)?;
        let rel = self.rels.get(&sheet.relationship_id).ok_or_else(|| {
            Error::ComponentNotFound(format!(
                "relationship {} of sheet '{}'",
                sheet.relationship_id, sheet.name
            ))
        })?;
        if rel.reltype() != relationship_type::WORKSHEET {
            return Err(Error::Unsupported(format!(
                "sheet '{}' is not a worksheet ({})",
                sheet.name,
                rel.reltype()
            )));
        }

        let uri: PackURI = self.rels.target_partname(rel)?;
        parse_worksheet_xml(self.package.part_str(&uri)?, &self.shared_strings)
    }

    fn sheet(&self, name: Option<&str>) -> Result<&SheetEntry> {
        match name {
            Some(name) => self.sheets.iter().find(|s| s.name == name).ok_or_else(|| {
                Error::ComponentNotFound(format!(
                    "sheet '{}' (available: {})",
                    name,
                    self.sheet_names().join(", ")
                ))
            }),
            None => self
                .sheets
                .first()
                .ok_or_else(|| Error::ComponentNotFound("workbook has no sheets".to_string())),
        }
    }
}

impl QuestionSource for QuestionWorkbook {
    fn questions(&self) -> Result<Vec<Question>> {
        let rows = self.rows(self.options.sheet.as_deref())?;
        let mut questions = Vec::with_capacity(rows.len());

        for row in rows {
            if (row.index as usize) <= self.options.skip_rows {
                continue;
            }
            let question = row.text(QUESTION_COLUMN);
            let answer = row.text(ANSWER_COLUMN);
            if question.is_empty() && answer.is_empty() {
                warn!(row = row.index, "skipping row without question or answer");
                continue;
            }
            questions.push(Question::new(question, answer));
        }

        debug!(questions = questions.len(), "read question pool");
        Ok(questions)
    }
}
