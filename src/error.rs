use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid layout name: {0:?}")]
    InvalidName(String),
    #[error("a layout named `{0}` already exists")]
    DuplicateName(String),
    #[error("no layout named `{0}`")]
    NotFound(String),
    #[error("layout `{0}` has no saved state")]
    EmptyState(String),
    #[error("layout store error: {0}")]
    Persist(String),
    #[error("host rejected layout `{0}`")]
    Apply(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// True when the store file could not be read or written. The in-memory
    /// model should be reloaded before retrying.
    pub fn is_persist_failure(&self) -> bool {
        matches!(self, Self::Persist(_))
    }
}
