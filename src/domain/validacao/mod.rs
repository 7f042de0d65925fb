// src/domain/validacao/mod.rs
//
// Batch validation
//
// Every rule for an operation runs against one collector; the collector is
// raised once at the end, so callers see every violation at the same time.

pub mod regras;

use crate::domain::{DomainError, DomainResult};

/// Accumulates violation messages for one entity instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultadoValidacao {
    erros: Vec<String>,
}

impl ResultadoValidacao {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, mensagem: impl Into<String>) {
        self.erros.push(mensagem.into());
    }

    pub fn erros(&self) -> &[String] {
        &self.erros
    }

    pub fn is_valid(&self) -> bool {
        self.erros.is_empty()
    }

    /// No-op when empty, otherwise one error carrying every message in order
    pub fn raise_if_invalid(self) -> DomainResult<()> {
        if self.erros.is_empty() {
            return Ok(());
        }
        Err(DomainError::InvariantViolation(self.erros))
    }
}
