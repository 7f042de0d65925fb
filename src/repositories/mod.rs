// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - The aggregate is loaded and saved whole, enrollments included

pub mod aluno_repository;

pub use aluno_repository::{AlunoRepository, InMemoryAlunoRepository};

#[cfg(test)]
pub use aluno_repository::MockAlunoRepository;
