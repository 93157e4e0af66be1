use thiserror::Error;

use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,

    #[error("category name cannot contain path separators: {name}")]
    InvalidName { name: String },
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// A named group of questions the player can pick from.
///
/// The name is both the display label and the storage identity (one file per
/// category, named after it), so it must not contain path separators.
/// A category may carry an empty question list after loading; starting a
/// session against one fails instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    questions: Vec<Question>,
}

impl Category {
    /// Creates a new category.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` if the name is empty or
    /// whitespace-only, and `CategoryError::InvalidName` if it contains
    /// path separators.
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, CategoryError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        if name.contains(['/', '\\']) {
            return Err(CategoryError::InvalidName {
                name: name.to_owned(),
            });
        }

        Ok(Self {
            name: name.to_owned(),
            questions,
        })
    }

    // Accessors
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn build_question(text: &str) -> Question {
        Question::new(text, vec!["yes".into(), "no".into()], 0, None).unwrap()
    }

    #[test]
    fn category_new_happy_path() {
        let category = Category::new("Science", vec![build_question("Q1")]).unwrap();
        assert_eq!(category.name(), "Science");
        assert_eq!(category.question_count(), 1);
    }

    #[test]
    fn category_trims_name() {
        let category = Category::new("  History  ", vec![build_question("Q1")]).unwrap();
        assert_eq!(category.name(), "History");
    }

    #[test]
    fn category_rejects_empty_name() {
        let err = Category::new("   ", vec![build_question("Q1")]).unwrap_err();
        assert_eq!(err, CategoryError::EmptyName);
    }

    #[test]
    fn category_rejects_path_separators() {
        let err = Category::new("../etc", Vec::new()).unwrap_err();
        assert!(matches!(err, CategoryError::InvalidName { .. }));

        let err = Category::new("a\\b", Vec::new()).unwrap_err();
        assert!(matches!(err, CategoryError::InvalidName { .. }));
    }

    #[test]
    fn category_allows_empty_question_list() {
        let category = Category::new("Drafts", Vec::new()).unwrap();
        assert_eq!(category.question_count(), 0);
    }
}
