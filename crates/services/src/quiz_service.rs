use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use quiz_core::model::Category;
use quiz_core::quiz::QuizSession;
use quiz_core::time::Clock;
use storage::repository::CategoryRepository;
use storage::seed;

use crate::error::QuizServiceError;
use crate::settings_service::SettingsService;

/// The boundary the presentation layer drives: category listing, first-run
/// seeding, and session construction.
///
/// Sessions are owned by the caller; "restart" is dropping the session and
/// asking for a fresh one. `load_categories` always re-reads the repository,
/// so a restarted quiz sees freshly loaded data.
#[derive(Clone)]
pub struct QuizService {
    categories: Arc<dyn CategoryRepository>,
    settings: Arc<SettingsService>,
    clock: Clock,
}

impl QuizService {
    #[must_use]
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        settings: Arc<SettingsService>,
        clock: Clock,
    ) -> Self {
        Self {
            categories,
            settings,
            clock,
        }
    }

    /// Write the default category set when the storage location is empty.
    ///
    /// Returns whether seeding happened. Run once at startup, before the
    /// first category listing.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError` if the probe or a write fails.
    pub async fn ensure_seeded(&self) -> Result<bool, QuizServiceError> {
        let seeded = seed::seed_if_missing(self.categories.as_ref()).await?;
        if seeded {
            debug!("seeded default categories");
        }
        Ok(seeded)
    }

    /// All categories, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError` if the storage location is unavailable.
    pub async fn load_categories(&self) -> Result<Vec<Category>, QuizServiceError> {
        Ok(self.categories.load_all().await?)
    }

    /// All categories, or an empty list when loading fails.
    ///
    /// The degrade path for drivers that must keep running: the failure is
    /// logged, the caller renders an empty selection.
    pub async fn categories_or_empty(&self) -> Vec<Category> {
        match self.load_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!(error = %e, "failed to load categories, showing none");
                Vec::new()
            }
        }
    }

    /// Start a session over `category`, bounded by the configured
    /// max-questions-per-session.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Session` if the category has no questions.
    pub async fn start_session(&self, category: Category) -> Result<QuizSession, QuizServiceError> {
        let settings = self.settings.load().await;
        debug!(
            category = category.name(),
            max_questions = settings.max_questions(),
            "starting session"
        );
        Ok(QuizSession::start(
            category,
            settings.max_questions(),
            self.clock,
        )?)
    }

    /// `start_session` with a fixed draw order for deterministic tests.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Session` if the category has no questions.
    pub async fn start_session_seeded(
        &self,
        category: Category,
        rng_seed: u64,
    ) -> Result<QuizSession, QuizServiceError> {
        let settings = self.settings.load().await;
        Ok(QuizSession::start_with_rng(
            category,
            settings.max_questions(),
            self.clock,
            StdRng::seed_from_u64(rng_seed),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiz_core::model::AppSettings;
    use quiz_core::time::fixed_clock;
    use storage::repository::{InMemoryRepository, StorageError};

    fn build_service(repo: InMemoryRepository) -> QuizService {
        let settings = Arc::new(SettingsService::new(Arc::new(repo.clone())));
        QuizService::new(Arc::new(repo), settings, fixed_clock())
    }

    #[tokio::test]
    async fn ensure_seeded_populates_an_empty_repository_once() {
        let service = build_service(InMemoryRepository::new());
        assert!(service.ensure_seeded().await.unwrap());
        assert!(!service.ensure_seeded().await.unwrap());

        let names: Vec<String> = service
            .load_categories()
            .await
            .unwrap()
            .iter()
            .map(|c| c.name().to_owned())
            .collect();
        assert_eq!(names, ["History", "Science"]);
    }

    #[tokio::test]
    async fn session_uses_the_configured_question_bound() {
        let repo = InMemoryRepository::new();
        let settings = Arc::new(SettingsService::new(Arc::new(repo.clone())));
        let service = QuizService::new(Arc::new(repo), settings.clone(), fixed_clock());
        service.ensure_seeded().await.unwrap();
        settings.save(AppSettings::new(1).unwrap()).await;

        let category = service.load_categories().await.unwrap().remove(0);
        let mut session = service.start_session_seeded(category, 4).await.unwrap();
        assert_eq!(session.max_questions(), 1);

        session.next_question().unwrap();
        session.answer(0).unwrap();
        assert!(session.next_question().is_none());
    }

    struct NoCategories;

    #[async_trait]
    impl CategoryRepository for NoCategories {
        async fn save_category(
            &self,
            _category: &Category,
        ) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".into()))
        }

        async fn load_all(&self) -> Result<Vec<Category>, StorageError> {
            Err(StorageError::Unavailable("missing directory".into()))
        }

        async fn has_categories(&self) -> Result<bool, StorageError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn categories_or_empty_degrades_instead_of_failing() {
        let settings = Arc::new(SettingsService::new(Arc::new(InMemoryRepository::new())));
        let service = QuizService::new(Arc::new(NoCategories), settings, fixed_clock());

        assert!(service.load_categories().await.is_err());
        assert!(service.categories_or_empty().await.is_empty());
    }
}
