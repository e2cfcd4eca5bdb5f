//! Quiz assembly around the pairing engine.
//!
//! A [`QuestionSource`] supplies the question pool, the engine pairs it, and
//! each [`QuizRenderer`] turns the [`Pairing`] into an artifact: the slide
//! deck for the two groups and the answer key used for grading.

pub mod answer_key;

pub use answer_key::{AnswerKey, AnswerKeyWriter, answer_key_path};

use crate::common::Result;
use crate::pairing::{Pairing, Question};

/// Anything questions can be read from.
pub trait QuestionSource {
    /// All questions, in source order.
    fn questions(&self) -> Result<Vec<Question>>;
}

/// Renders a finished pairing into some output.
pub trait QuizRenderer {
    fn render(&mut self, pairing: &Pairing, labels: &Labels) -> Result<()>;
}

/// Language of the labels printed on slides and in the answer key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Language {
    #[default]
    En,
    De,
}

/// Fixed texts used when rendering a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Prefix of slide titles and answer lines, e.g. "Question"
    pub question: String,
    /// Heading of the group A answers
    pub answers_a: String,
    /// Heading of the group B answers
    pub answers_b: String,
}

impl Labels {
    pub fn new(language: Language) -> Self {
        let (question, answers_a, answers_b) = match language {
            Language::En => ("Question", "Answers Group A", "Answers Group B"),
            Language::De => ("Frage", "Lösungen Gruppe A", "Lösungen Gruppe B"),
        };
        Self {
            question: question.to_string(),
            answers_a: answers_a.to_string(),
            answers_b: answers_b.to_string(),
        }
    }

    /// Title of the slide at a 0-based pairing index ("Question 1", ...).
    pub fn question_title(&self, index: usize) -> String {
        format!("{} {}", self.question, index + 1)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl From<Language> for Labels {
    fn from(language: Language) -> Self {
        Self::new(language)
    }
}
