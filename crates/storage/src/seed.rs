//! Default category set a fresh install starts with.

use thiserror::Error;

use quiz_core::model::{Category, Question};

use crate::repository::{CategoryRepository, StorageError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    #[error(transparent)]
    Invalid(#[from] quiz_core::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The built-in categories: two per-topic starters with four-answer
/// questions, enough to play with before anyone authors real content.
///
/// # Errors
///
/// Returns a validation error only if the built-in data is inconsistent.
pub fn default_categories() -> Result<Vec<Category>, quiz_core::Error> {
    let science = Category::new(
        "Science",
        vec![
            Question::new(
                "What is the chemical symbol for water?",
                vec!["H2O".into(), "O2".into(), "CO2".into(), "NaCl".into()],
                0,
                None,
            )?,
            Question::new(
                "What planet is known as the Red Planet?",
                vec![
                    "Earth".into(),
                    "Mars".into(),
                    "Jupiter".into(),
                    "Venus".into(),
                ],
                1,
                None,
            )?,
        ],
    )?;

    let history = Category::new(
        "History",
        vec![
            Question::new(
                "Who was the first President of the United States?",
                vec![
                    "George Washington".into(),
                    "Thomas Jefferson".into(),
                    "Abraham Lincoln".into(),
                    "John Adams".into(),
                ],
                0,
                None,
            )?,
            Question::new(
                "In which year did World War II end?",
                vec!["1945".into(), "1939".into(), "1918".into(), "1963".into()],
                0,
                None,
            )?,
        ],
    )?;

    Ok(vec![science, history])
}

/// Write the default categories unconditionally.
///
/// Calling this against a location that already holds files of the same
/// category names overwrites them; use [`seed_if_missing`] for the
/// only-when-empty behavior.
///
/// # Errors
///
/// Returns `SeedError` if a record cannot be stored.
pub async fn seed_default_categories(repo: &dyn CategoryRepository) -> Result<(), SeedError> {
    for category in default_categories()? {
        repo.save_category(&category).await?;
    }
    Ok(())
}

/// Seed the defaults only when no category record exists yet.
///
/// Returns whether seeding happened.
///
/// # Errors
///
/// Returns `SeedError` if the probe or a write fails.
pub async fn seed_if_missing(repo: &dyn CategoryRepository) -> Result<bool, SeedError> {
    if repo.has_categories().await? {
        return Ok(false);
    }
    seed_default_categories(repo).await?;
    Ok(true)
}
