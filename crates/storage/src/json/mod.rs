use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::repository::{CategoryRepository, SettingsRepository, Storage, StorageError};

mod category_repo;
mod settings_repo;

/// Default directory holding one JSON file per category.
pub const DEFAULT_QUESTIONS_DIR: &str = "questions";

/// Default settings file, kept in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Flat-file JSON backend: one `<Name>.json` per category under a directory,
/// plus a single settings file.
///
/// Files are opened per operation and closed right after; the repository
/// itself holds no handles.
#[derive(Debug, Clone)]
pub struct JsonRepository {
    questions_dir: PathBuf,
    settings_path: PathBuf,
}

impl JsonRepository {
    #[must_use]
    pub fn new(questions_dir: impl Into<PathBuf>, settings_path: impl Into<PathBuf>) -> Self {
        Self {
            questions_dir: questions_dir.into(),
            settings_path: settings_path.into(),
        }
    }

    /// The layout the application uses when nothing overrides it:
    /// `questions/` and `settings.json` under the working directory.
    #[must_use]
    pub fn default_layout() -> Self {
        Self::new(DEFAULT_QUESTIONS_DIR, DEFAULT_SETTINGS_FILE)
    }

    /// The default layout rooted at `root` instead of the working directory.
    #[must_use]
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::new(
            root.join(DEFAULT_QUESTIONS_DIR),
            root.join(DEFAULT_SETTINGS_FILE),
        )
    }

    #[must_use]
    pub fn questions_dir(&self) -> &Path {
        &self.questions_dir
    }

    #[must_use]
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    fn category_path(&self, name: &str) -> PathBuf {
        self.questions_dir.join(format!("{name}.json"))
    }
}

fn unavailable(path: &Path, err: &std::io::Error) -> StorageError {
    StorageError::Unavailable(format!("{}: {err}", path.display()))
}

impl Storage {
    /// Build a `Storage` backed by flat JSON files.
    #[must_use]
    pub fn json(repo: JsonRepository) -> Self {
        let categories: Arc<dyn CategoryRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo);
        Self {
            categories,
            settings,
        }
    }
}
