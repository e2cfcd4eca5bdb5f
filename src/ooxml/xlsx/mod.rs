//! Excel (.xlsx) question workbooks.
//!
//! Reads the question pool from the first (or a named) worksheet of a
//! SpreadsheetML package: column A is the question, column B the answer.
//!
//! # Example
//!
//! ```rust,no_run
//! use quizpair::ooxml::xlsx::{QuestionWorkbook, ReadOptions};
//! use quizpair::quiz::QuestionSource;
//!
//! let workbook = QuestionWorkbook::open("questions.xlsx")?.with_options(ReadOptions {
//!     sheet: Some("Round 1".to_string()),
//!     skip_rows: 1,
//! });
//! for question in workbook.questions()? {
//!     println!("{} -> {}", question.question(), question.answer());
//! }
//! # Ok::<(), quizpair::common::Error>(())
//! ```

pub mod cell;
pub mod parsers;
pub mod shared_strings;
pub mod workbook;

pub use cell::CellValue;
pub use parsers::worksheet_parser::Row;
pub use shared_strings::SharedStrings;
pub use workbook::{QuestionWorkbook, ReadOptions};
