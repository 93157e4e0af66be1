#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod quiz;
pub mod time;

pub use error::Error;
pub use model::{
    AppSettings, AppSettingsError, Category, CategoryError, Question, QuestionError, QuizSummary,
};
pub use quiz::{QuizSession, SessionError, SessionPhase};
pub use time::Clock;
