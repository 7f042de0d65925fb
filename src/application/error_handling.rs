// src/application/error_handling.rs
//
// Error Handling for the transport boundary
//
// ARCHITECTURE:
// - Maps AppError -> serializable response
// - Domain rejections carry every violation message
// - Never exposes internal implementation details

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    /// Ordered violation messages (domain errors only)
    pub details: Vec<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Aggregate or enrollment not found (404)
    NotFound,

    /// Field validation failed (400)
    Validation,

    /// State-machine guard rejected the call (422)
    DomainError,

    /// Duplicate resource (409)
    Conflict,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound(aluno_id) => Self::not_found(&format!("Aluno {}", aluno_id)),

            AppError::Domain(domain_error) => {
                let (error_type, message) = match &domain_error {
                    DomainError::InvariantViolation(_) => {
                        (ErrorType::Validation, "Domain validation failed")
                    }
                    DomainError::InvalidStateTransition(_) => {
                        (ErrorType::DomainError, "Operation not allowed")
                    }
                    DomainError::NotFound(_) => (ErrorType::NotFound, "Resource not found"),
                };
                Self {
                    success: false,
                    error_type,
                    message: message.to_string(),
                    details: domain_error.mensagens().to_vec(),
                }
            }

            AppError::Conflict(message) => Self {
                success: false,
                error_type: ErrorType::Conflict,
                message,
                details: Vec::new(),
            },

            AppError::Serialization(serde_error) => {
                log::error!("serialization error: {:?}", serde_error);
                Self::internal("Data serialization failed")
            }

            AppError::Other(message) => {
                log::error!("unexpected error: {}", message);
                Self::internal(&message)
            }
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: Vec::new(),
        }
    }

    fn internal(message: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Internal,
            message: message.to_string(),
            details: Vec::new(),
        }
    }
}

/// Helper trait to convert Results into a JSON error payload
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
