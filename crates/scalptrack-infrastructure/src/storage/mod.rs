//! File-backed storage for configuration and credentials.

pub mod config_storage;
pub mod token_storage;

pub use config_storage::ConfigStorage;
pub use token_storage::{TokenStorage, TokenStorageError};
