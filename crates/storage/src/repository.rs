use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use quiz_core::model::{AppSettings, Category};

/// Errors surfaced by storage adapters.
///
/// `Unavailable` is the hard failure for a missing or unreadable storage
/// location; a single malformed record inside an available location is
/// recovered by the adapter (skip and warn) and never surfaces from
/// `load_all`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage location unavailable: {0}")]
    Unavailable(String),

    #[error("malformed record: {0}")]
    Malformed(String),
}

/// Repository contract for category records.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Write or overwrite the record for one category.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_category(&self, category: &Category) -> Result<(), StorageError>;

    /// Load every category record, ordered by category name.
    ///
    /// Records that cannot be read, parsed, or validated are skipped with a
    /// warning; they never abort the remaining loads.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the storage location itself is
    /// missing or unreadable.
    async fn load_all(&self) -> Result<Vec<Category>, StorageError>;

    /// Whether any category record exists.
    ///
    /// A missing storage location counts as "none" — this is the seeding
    /// probe, so it must not hard-fail where `load_all` would.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for failures other than a missing location.
    async fn has_categories(&self) -> Result<bool, StorageError>;
}

/// Repository contract for the settings record.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read the settings record; `None` when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Malformed` when the record exists but cannot
    /// be parsed or validated, `StorageError::Unavailable` for I/O failures.
    async fn load_settings(&self) -> Result<Option<AppSettings>, StorageError>;

    /// Write the settings record, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    categories: Arc<Mutex<HashMap<String, Category>>>,
    settings: Arc<Mutex<Option<AppSettings>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryRepository {
    async fn save_category(&self, category: &Category) -> Result<(), StorageError> {
        let mut guard = self
            .categories
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard.insert(category.name().to_owned(), category.clone());
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Category>, StorageError> {
        let guard = self
            .categories
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        let mut categories: Vec<Category> = guard.values().cloned().collect();
        categories.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(categories)
    }

    async fn has_categories(&self) -> Result<bool, StorageError> {
        let guard = self
            .categories
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(!guard.is_empty())
    }
}

#[async_trait]
impl SettingsRepository for InMemoryRepository {
    async fn load_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        let guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = Some(*settings);
        Ok(())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub categories: Arc<dyn CategoryRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let categories: Arc<dyn CategoryRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo);
        Self {
            categories,
            settings,
        }
    }
}
