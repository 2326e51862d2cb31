use thiserror::Error;

/// Failures surfaced by the experience store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Experience not found: {0}")]
    NotFound(String),
    #[error("Invalid experience type: {0}")]
    InvalidType(String),
    #[error("Identifier collision persisted after {attempts} attempts")]
    IdCollision { attempts: usize },
    #[error("Duplicate experience id: {0}")]
    DuplicateId(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
