// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod aluno;
pub mod certificado;
pub mod entidade;
pub mod historico_aprendizado;
pub mod matricula_curso;
pub mod validacao;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Aggregate root
pub use aluno::{validate_aluno, Aluno, NovoAluno};

// Enrollment
pub use matricula_curso::{validate_matricula_curso, EstadoMatricula, MatriculaCurso};

// Learning history
pub use historico_aprendizado::{validate_historico_aprendizado, HistoricoAprendizado};

// Certificate
pub use certificado::{validate_certificado, Certificado};

// Shared building blocks
pub use entidade::Entidade;
pub use validacao::ResultadoValidacao;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants.
/// Every variant exposes its messages, in order, through `mensagens()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Batch validation failure: every violated field rule
    #[error("Invariant violation: {}", .0.join("; "))]
    InvariantViolation(Vec<String>),

    /// A state-machine guard rejected the call
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub(crate) fn transicao(mensagem: &str) -> Self {
        DomainError::InvalidStateTransition(mensagem.to_string())
    }

    pub fn mensagens(&self) -> &[String] {
        match self {
            DomainError::InvariantViolation(mensagens) => mensagens,
            DomainError::InvalidStateTransition(mensagem) | DomainError::NotFound(mensagem) => {
                std::slice::from_ref(mensagem)
            }
        }
    }

    /// True when any message contains `trecho`
    pub fn contem(&self, trecho: &str) -> bool {
        self.mensagens().iter().any(|m| m.contains(trecho))
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
