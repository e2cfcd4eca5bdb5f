//! quizpair - paired question decks for two-group quizzes
//!
//! Reads a question pool from an Excel workbook, pairs every question with a
//! different one, and writes one PowerPoint slide per pairing plus a text
//! answer key. Group A sees the pool in its original order, group B sees a
//! shuffled copy, and no slide ever shows the same question to both groups.
//!
//! # Features
//!
//! - **Pairing engine**: shuffle-and-repair with a bounded retry budget and a
//!   caller-supplied, seedable random source
//! - **XLSX reader**: shared and inline strings, numbers, booleans, named
//!   sheets and header rows
//! - **PPTX writer**: appends slides based on a named layout of any template
//! - **Answer key**: plain text, English or German labels
//!
//! # Example
//!
//! ```no_run
//! use quizpair::ooxml::pptx::QuestionDeck;
//! use quizpair::ooxml::xlsx::QuestionWorkbook;
//! use quizpair::pairing::{PairingEngine, SeededRandom};
//! use quizpair::quiz::{AnswerKey, Labels, QuestionSource, QuizRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let questions = QuestionWorkbook::open("questions.xlsx")?.questions()?;
//! let pairing = PairingEngine::default().pair(&questions, &mut SeededRandom::new(42))?;
//!
//! let labels = Labels::default();
//! let mut deck = QuestionDeck::open("template.pptx", "Two Content")?;
//! deck.render(&pairing, &labels)?;
//! deck.save("quiz.pptx")?;
//!
//! std::fs::write("quiz.pptx.txt", AnswerKey::new(&pairing, &labels).render())?;
//! # Ok(())
//! # }
//! ```

/// Shared error type and XML text helpers
pub mod common;

/// OOXML packages: the question workbook and the slide deck
pub mod ooxml;

/// The question pairing engine
pub mod pairing;

/// Question sources, renderers, labels and the answer key
pub mod quiz;

pub use common::{Error, Result};
pub use pairing::{Pairing, PairingConfig, PairingEngine, Question, SeededRandom};
