use std::sync::{Arc, Mutex};

use tracing::warn;

use quiz_core::model::AppSettings;
use storage::repository::SettingsRepository;

/// Settings access with a first-read cache.
///
/// One instance is constructed at startup and handed to whatever owns the
/// session; the cache lives in the instance, not in a static. Storage
/// failures never surface: reads fall back to defaults and writes keep the
/// in-memory value authoritative for the rest of the process.
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
    cached: Mutex<Option<AppSettings>>,
}

impl SettingsService {
    #[must_use]
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self {
            repo,
            cached: Mutex::new(None),
        }
    }

    /// Current settings, from cache after the first successful read.
    ///
    /// When the backing record is absent or unreadable, synthesizes the
    /// defaults, persists them best-effort, caches and returns them — so the
    /// first call on a fresh install creates the settings file.
    pub async fn load(&self) -> AppSettings {
        if let Some(cached) = self.cached() {
            return cached;
        }

        let stored = match self.repo.load_settings().await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "failed to read settings, falling back to defaults");
                None
            }
        };

        let settings = match stored {
            Some(settings) => settings,
            None => {
                let defaults = AppSettings::default();
                if let Err(e) = self.repo.save_settings(&defaults).await {
                    warn!(error = %e, "failed to persist default settings");
                }
                defaults
            }
        };

        self.store(settings);
        settings
    }

    /// Persist `settings` and replace the cache unconditionally.
    ///
    /// A write failure is logged and swallowed; the in-memory value still
    /// takes effect for the remainder of the process.
    pub async fn save(&self, settings: AppSettings) {
        if let Err(e) = self.repo.save_settings(&settings).await {
            warn!(error = %e, "failed to persist settings, keeping the in-memory value");
        }
        self.store(settings);
    }

    /// Drop the cache; the next `load` re-reads storage.
    pub fn reload(&self) {
        if let Ok(mut guard) = self.cached.lock() {
            *guard = None;
        }
    }

    fn cached(&self) -> Option<AppSettings> {
        self.cached.lock().ok().and_then(|guard| *guard)
    }

    fn store(&self, settings: AppSettings) {
        if let Ok(mut guard) = self.cached.lock() {
            *guard = Some(settings);
        }
    }
}
