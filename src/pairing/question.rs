//! Question records.

/// A single question/answer pair read from the input sheet.
///
/// Records are immutable once built. Two records are "the same question" for
/// pairing purposes when their question text is identical, regardless of the
/// answer; see [`Question::same_question`]. The derived `PartialEq` compares
/// both fields and is only used where whole records must match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Question {
    question: String,
    answer: String,
}

impl Question {
    /// Create a new question record.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// The question text shown on the slide.
    #[inline]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The answer text written to the answer key.
    #[inline]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether both records carry the same question text.
    #[inline]
    pub fn same_question(&self, other: &Question) -> bool {
        self.question == other.question
    }
}

impl<Q: Into<String>, A: Into<String>> From<(Q, A)> for Question {
    fn from((question, answer): (Q, A)) -> Self {
        Self::new(question, answer)
    }
}
