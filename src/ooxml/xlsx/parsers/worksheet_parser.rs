//! Parser for Excel worksheet XML files.
//!
//! Extracts the rows of `<sheetData>` with their cell values resolved:
//! shared strings are looked up, inline strings flattened, and numbers parsed
//! with `atoi_simd` / `fast_float2`.

use super::{namespace_prefix, text_runs};
use crate::common::xml::{Element, elements, next_element, unescape_xml};
use crate::common::{Error, Result};
use crate::ooxml::xlsx::cell::{CellValue, column_number};
use crate::ooxml::xlsx::shared_strings::SharedStrings;

/// One `<row>` of a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based row number
    pub index: u32,
    /// (1-based column, value) in column order
    pub cells: Vec<(u32, CellValue)>,
}

impl Row {
    /// Value in a 1-based column, if the row has that cell.
    pub fn cell(&self, column: u32) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(col, _)| *col == column)
            .map(|(_, value)| value)
    }

    /// Text of a cell, empty when the cell is missing.
    pub fn text(&self, column: u32) -> String {
        self.cell(column).map(CellValue::to_text).unwrap_or_default()
    }
}

/// Parse worksheet XML into rows, sorted by row number.
///
/// Rows and cells without an `r` attribute follow the previous one.
pub fn parse_worksheet_xml(content: &str, shared_strings: &SharedStrings) -> Result<Vec<Row>> {
    let prefix = namespace_prefix(content, "worksheet");
    let Some(sheet_data) = next_element(content, &format!("{}sheetData", prefix), 0) else {
        return Ok(Vec::new());
    };

    let cell_name = format!("{}c", prefix);
    let mut rows = Vec::new();
    let mut last_row = 0u32;

    for row_element in elements(sheet_data.text(), &format!("{}row", prefix)) {
        let index = match row_element.attribute("r") {
            Some(r) => atoi_simd::parse::<u32>(r.as_bytes())
                .map_err(|_| Error::InvalidFormat(format!("Invalid row number: {}", r)))?,
            None => last_row + 1,
        };
        last_row = index;

        let mut cells = Vec::new();
        let mut last_col = 0u32;
        for cell in elements(row_element.text(), &cell_name) {
            let column = match cell.attribute("r") {
                Some(reference) => reference_to_coords(reference)?.0,
                None => last_col + 1,
            };
            last_col = column;
            cells.push((column, parse_cell(&cell, prefix, shared_strings)?));
        }

        rows.push(Row { index, cells });
    }

    rows.sort_by_key(|row| row.index);
    Ok(rows)
}

/// Resolve the value of one `<c>` element.
fn parse_cell(cell: &Element<'_>, prefix: &str, shared_strings: &SharedStrings) -> Result<CellValue> {
    let value = next_element(cell.text(), &format!("{}v", prefix), 0).map(|v| v.text());

    let cell_value = match (cell.attribute("t"), value) {
        (Some("inlineStr"), _) => {
            match next_element(cell.text(), &format!("{}is", prefix), 0) {
                Some(is) => CellValue::String(text_runs(is.text(), prefix)),
                None => CellValue::Empty,
            }
        },
        (Some("s"), Some(v)) => {
            let index = atoi_simd::parse::<u32>(v.trim().as_bytes()).map_err(|_| {
                Error::InvalidFormat(format!("Invalid shared string index: {}", v))
            })? as usize;
            let text = shared_strings.get(index).ok_or_else(|| {
                Error::InvalidFormat(format!(
                    "Shared string index {} out of range ({} strings)",
                    index,
                    shared_strings.len()
                ))
            })?;
            CellValue::String(text.to_string())
        },
        (Some("str" | "d"), Some(v)) => CellValue::String(unescape_xml(v)),
        (Some("e"), Some(v)) => CellValue::Error(unescape_xml(v)),
        (Some("b"), Some(v)) => match v.trim() {
            "1" | "true" => CellValue::Bool(true),
            "0" | "false" => CellValue::Bool(false),
            other => CellValue::Error(format!("Invalid boolean value: {}", other)),
        },
        (_, Some(v)) => {
            let v = v.trim();
            if v.is_empty() {
                CellValue::Empty
            } else if let Ok(int_val) = atoi_simd::parse::<i64>(v.as_bytes()) {
                CellValue::Int(int_val)
            } else if let Ok(float_val) = fast_float2::parse::<f64, _>(v) {
                CellValue::Float(float_val)
            } else {
                CellValue::String(unescape_xml(v))
            }
        },
        (_, None) => CellValue::Empty,
    };

    Ok(cell_value)
}

/// Convert an Excel reference (e.g. `B7`) to 1-based (column, row).
pub fn reference_to_coords(reference: &str) -> Result<(u32, u32)> {
    let digits_at = reference
        .bytes()
        .position(|b| b.is_ascii_digit())
        .ok_or_else(|| Error::InvalidFormat(format!("Invalid reference: {}", reference)))?;

    let column = column_number(&reference[..digits_at]).ok_or_else(|| {
        Error::InvalidFormat(format!("Invalid column in reference: {}", reference))
    })?;
    let row = atoi_simd::parse::<u32>(&reference.as_bytes()[digits_at..]).map_err(|_| {
        Error::InvalidFormat(format!("Invalid row number in reference: {}", reference))
    })?;

    Ok((column, row))
}
