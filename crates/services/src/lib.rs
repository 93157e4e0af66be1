#![forbid(unsafe_code)]

pub mod error;
pub mod pacing;
pub mod quiz_service;
pub mod settings_service;

pub use quiz_core::time::Clock;

pub use error::QuizServiceError;
pub use pacing::{Pacing, Pause};
pub use quiz_service::QuizService;
pub use settings_service::SettingsService;
