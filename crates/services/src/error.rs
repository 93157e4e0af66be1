//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::quiz::SessionError;
use storage::repository::StorageError;
use storage::seed::SeedError;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Seed(#[from] SeedError),
}
