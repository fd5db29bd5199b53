//! Error types for schedule-it.

use thiserror::Error;

/// Errors a user can trigger when saving or moving an event.
///
/// These are returned as values and rendered next to the form that caused
/// them; none of them is fatal.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("{0}")]
    Validation(String),

    #[error("Event overlaps with another existing event.")]
    Overlap,

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from the key-value substrate.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors while locating or reading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EventResult<T> = Result<T, EventError>;
pub type StoreResult<T> = Result<T, StoreError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
