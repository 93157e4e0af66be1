use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least two answers, got {got}")]
    TooFewAnswers { got: usize },

    #[error("correct answer index {index} is out of range for {answers} answers")]
    CorrectIndexOutOfRange { index: usize, answers: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Immutable once constructed; the answer list keeps its on-disk order so
/// `correct_answer_index` stays meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    answers: Vec<String>,
    correct_answer_index: usize,
    image_path: Option<String>,
}

impl Question {
    /// Creates a new question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is empty or
    /// whitespace-only, `QuestionError::TooFewAnswers` for fewer than two
    /// answers, and `QuestionError::CorrectIndexOutOfRange` if the correct
    /// index does not point into the answer list.
    pub fn new(
        text: impl Into<String>,
        answers: Vec<String>,
        correct_answer_index: usize,
        image_path: Option<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if answers.len() < 2 {
            return Err(QuestionError::TooFewAnswers { got: answers.len() });
        }
        if correct_answer_index >= answers.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_answer_index,
                answers: answers.len(),
            });
        }

        let image_path = image_path
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty());

        Ok(Self {
            text: text.trim().to_owned(),
            answers,
            correct_answer_index,
            image_path,
        })
    }

    // Accessors
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    /// Path of the illustration image, if the question has one.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }

    /// Whether `answer_index` picks the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer_index: usize) -> bool {
        answer_index == self.correct_answer_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("answer {i}")).collect()
    }

    #[test]
    fn question_new_happy_path() {
        let q = Question::new("What is 2 + 2?", answers(4), 1, None).unwrap();
        assert_eq!(q.text(), "What is 2 + 2?");
        assert_eq!(q.answers().len(), 4);
        assert_eq!(q.correct_answer_index(), 1);
        assert_eq!(q.image_path(), None);
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn question_rejects_empty_text() {
        let err = Question::new("   ", answers(2), 0, None).unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn question_rejects_single_answer() {
        let err = Question::new("Q", answers(1), 0, None).unwrap_err();
        assert_eq!(err, QuestionError::TooFewAnswers { got: 1 });
    }

    #[test]
    fn question_rejects_out_of_range_index() {
        let err = Question::new("Q", answers(3), 3, None).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectIndexOutOfRange {
                index: 3,
                answers: 3
            }
        );
    }

    #[test]
    fn question_filters_empty_image_path() {
        let q = Question::new("Q", answers(2), 0, Some("  ".into())).unwrap();
        assert_eq!(q.image_path(), None);

        let q = Question::new("Q", answers(2), 0, Some("img/water.png".into())).unwrap();
        assert_eq!(q.image_path(), Some("img/water.png"));
    }

    #[test]
    fn question_trims_text() {
        let q = Question::new("  Which planet?  ", answers(2), 0, None).unwrap();
        assert_eq!(q.text(), "Which planet?");
    }
}
