//! PowerPoint (.pptx) question decks.
//!
//! A template presentation supplies the look: one of its slide layouts is
//! chosen by name, and each pairing becomes a new slide based on that layout.
//! Slides and other parts already in the template are kept.
//!
//! # Example
//!
//! ```rust,no_run
//! use quizpair::ooxml::pptx::QuestionDeck;
//!
//! let mut deck = QuestionDeck::open("template.pptx", "Two Content")?;
//! deck.add_question_slide("Question 1", "Capital of France?", "Largest ocean?")?;
//! deck.save("quiz.pptx")?;
//! # Ok::<(), quizpair::common::Error>(())
//! ```

pub mod deck;
pub mod layout;
pub mod presentation;
pub mod writer;

pub use deck::QuestionDeck;
pub use layout::{Placeholder, SlideLayout, slide_layouts};
