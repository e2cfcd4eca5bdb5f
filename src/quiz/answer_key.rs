//! Plain-text answer key for both groups.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Labels, QuizRenderer};
use crate::common::Result;
use crate::pairing::{Pairing, Question};

/// Answer key text for a pairing.
///
/// Group A's answers come first, then two blank lines, then group B's:
///
/// ```text
/// Answers Group A
/// Question 1: <answer>
/// ...
///
///
/// Answers Group B
/// Question 1: <answer>
/// ...
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AnswerKey<'a> {
    pairing: &'a Pairing,
    labels: &'a Labels,
}

impl<'a> AnswerKey<'a> {
    pub fn new(pairing: &'a Pairing, labels: &'a Labels) -> Self {
        Self { pairing, labels }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.push_section(&mut out, &self.labels.answers_a, self.pairing.group_a());
        out.push_str("\n\n");
        self.push_section(&mut out, &self.labels.answers_b, self.pairing.group_b());
        out
    }

    fn push_section(&self, out: &mut String, heading: &str, group: &[Question]) {
        out.push_str(heading);
        out.push('\n');
        for (i, question) in group.iter().enumerate() {
            out.push_str(&format!("{}: {}\n", self.labels.question_title(i), question.answer()));
        }
    }
}

/// Where the answer key for a deck is written: the deck path with `.txt`
/// appended, so `quiz.pptx` gets `quiz.pptx.txt`.
pub fn answer_key_path(deck: &Path) -> PathBuf {
    let mut path = OsString::from(deck.as_os_str());
    path.push(".txt");
    PathBuf::from(path)
}

/// Writes the answer key to any byte sink.
#[derive(Debug)]
pub struct AnswerKeyWriter<W: Write> {
    writer: W,
}

impl<W: Write> AnswerKeyWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> QuizRenderer for AnswerKeyWriter<W> {
    fn render(&mut self, pairing: &Pairing, labels: &Labels) -> Result<()> {
        let text = AnswerKey::new(pairing, labels).render();
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        tracing::debug!(entries = pairing.len(), "wrote answer key");
        Ok(())
    }
}
