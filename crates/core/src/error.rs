use thiserror::Error;

use crate::model::{AppSettingsError, CategoryError, QuestionError};

/// Aggregate error for domain validation failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Settings(#[from] AppSettingsError),
}
