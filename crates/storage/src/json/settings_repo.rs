use std::io::ErrorKind;

use async_trait::async_trait;
use tokio::fs;

use quiz_core::model::AppSettings;

use super::{JsonRepository, unavailable};
use crate::records::SettingsRecord;
use crate::repository::{SettingsRepository, StorageError};

#[async_trait]
impl SettingsRepository for JsonRepository {
    async fn load_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        let json = match fs::read_to_string(self.settings_path()).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(unavailable(self.settings_path(), &e)),
        };

        let record: SettingsRecord =
            serde_json::from_str(&json).map_err(|e| StorageError::Malformed(e.to_string()))?;
        let settings = record
            .into_settings()
            .map_err(|e| StorageError::Malformed(e.to_string()))?;
        Ok(Some(settings))
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        if let Some(parent) = self.settings_path().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| unavailable(parent, &e))?;
            }
        }

        let record = SettingsRecord::from_settings(settings);
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| StorageError::Malformed(e.to_string()))?;
        fs::write(self.settings_path(), json)
            .await
            .map_err(|e| unavailable(self.settings_path(), &e))?;
        Ok(())
    }
}
