//! Cell values read from worksheets.

use std::fmt;

/// Value of a single worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
    /// Error value such as `#N/A`
    Error(String),
}

impl CellValue {
    /// True for cells with no value or an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Text as shown in a question or answer.
    ///
    /// Integers print without a decimal point, booleans as `TRUE`/`FALSE`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::String(s) | CellValue::Error(s) => f.write_str(s),
        }
    }
}

/// Convert column letters to a 1-based column number (A=1, Z=26, AA=27).
pub fn column_number(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    letters.bytes().try_fold(0u32, |acc, byte| {
        if !byte.is_ascii_alphabetic() {
            return None;
        }
        acc.checked_mul(26)?
            .checked_add((byte.to_ascii_uppercase() - b'A' + 1) as u32)
    })
}
