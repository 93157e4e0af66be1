use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use quiz_core::model::Category;

use super::{JsonRepository, unavailable};
use crate::records::CategoryRecord;
use crate::repository::{CategoryRepository, StorageError};

#[async_trait]
impl CategoryRepository for JsonRepository {
    async fn save_category(&self, category: &Category) -> Result<(), StorageError> {
        fs::create_dir_all(self.questions_dir())
            .await
            .map_err(|e| unavailable(self.questions_dir(), &e))?;

        let record = CategoryRecord::from_category(category);
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| StorageError::Malformed(e.to_string()))?;

        let path = self.category_path(category.name());
        fs::write(&path, json)
            .await
            .map_err(|e| unavailable(&path, &e))?;
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Category>, StorageError> {
        let mut entries = fs::read_dir(self.questions_dir())
            .await
            .map_err(|e| unavailable(self.questions_dir(), &e))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| unavailable(self.questions_dir(), &e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        // Directory iteration order is OS-dependent; file name order is the
        // category order callers see.
        paths.sort();

        let mut categories = Vec::new();
        for path in paths {
            match load_category_file(&path).await {
                Ok(category) => categories.push(category),
                Err(reason) => {
                    warn!(path = %path.display(), %reason, "skipping category file");
                }
            }
        }
        Ok(categories)
    }

    async fn has_categories(&self) -> Result<bool, StorageError> {
        let mut entries = match fs::read_dir(self.questions_dir()).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(unavailable(self.questions_dir(), &e)),
        };
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| unavailable(self.questions_dir(), &e))?
        {
            if entry.path().extension().is_some_and(|ext| ext == "json") {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

async fn load_category_file(path: &Path) -> Result<Category, String> {
    let json = fs::read_to_string(path).await.map_err(|e| e.to_string())?;
    let record: CategoryRecord = serde_json::from_str(&json).map_err(|e| e.to_string())?;
    record.into_category().map_err(|e| e.to_string())
}
