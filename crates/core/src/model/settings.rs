use thiserror::Error;

/// Questions asked per session when no settings file overrides it.
pub const DEFAULT_MAX_QUESTIONS: u32 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppSettingsError {
    #[error("max questions per session must be > 0")]
    InvalidMaxQuestions,
}

/// Application-wide tunables persisted next to the executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    max_questions: u32,
}

impl AppSettings {
    /// Creates settings with the given per-session question bound.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError::InvalidMaxQuestions` if the bound is zero.
    pub fn new(max_questions: u32) -> Result<Self, AppSettingsError> {
        if max_questions == 0 {
            return Err(AppSettingsError::InvalidMaxQuestions);
        }
        Ok(Self { max_questions })
    }

    #[must_use]
    pub fn max_questions(&self) -> u32 {
        self.max_questions
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
        }
    }
}
