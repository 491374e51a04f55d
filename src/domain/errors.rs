// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn invalid_field(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }
}
