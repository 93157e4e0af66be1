#![forbid(unsafe_code)]

pub mod json;
pub mod records;
pub mod repository;
pub mod seed;

pub use json::JsonRepository;
pub use repository::{
    CategoryRepository, InMemoryRepository, SettingsRepository, Storage, StorageError,
};
pub use seed::{SeedError, default_categories, seed_default_categories, seed_if_missing};
