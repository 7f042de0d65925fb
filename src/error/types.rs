// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Application-layer errors: domain rejections plus what the
/// load/save/emit plumbing around the aggregate can raise.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Aluno {0} not found")]
    NotFound(Uuid),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Domain messages, in order; empty for non-domain errors
    pub fn mensagens(&self) -> &[String] {
        match self {
            AppError::Domain(domain_error) => domain_error.mensagens(),
            _ => &[],
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
