// src/lib.rs
// Plataforma Alunos - Student enrollment aggregate of an online-course platform
//
// Architecture:
// - Domain-centric: Aluno is the only consistency boundary
// - Validate-then-commit: a rejected call leaves the aggregate untouched
// - Event-driven: services announce accepted commands on the EventBus
// - Explicit: every failure is a Result, never a panic

// ============================================================================
// CORE
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_aluno,
    validate_certificado,
    validate_historico_aprendizado,
    validate_matricula_curso,
    // Aluno (aggregate root)
    Aluno,
    NovoAluno,
    // Certificado
    Certificado,
    DomainError,
    DomainResult,
    Entidade,
    // MatriculaCurso
    EstadoMatricula,
    // HistoricoAprendizado
    HistoricoAprendizado,
    MatriculaCurso,
    ResultadoValidacao,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    AlunoAtivado,
    AlunoCadastrado,
    AlunoInativado,
    AlunoMatriculado,
    CertificadoEmitido,
    CertificadoSolicitado,
    CursoConcluido,
    DomainEvent,
    EventBus,
    EventLogEntry,
    HistoricoAprendizadoRegistrado,
    PagamentoMatriculaRegistrado,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{AlunoRepository, InMemoryAlunoRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AlunoService,
    AlunoServiceConfig,
    MatricularAlunoRequest,
    RegistrarHistoricoRequest,
    RequisitarCertificadoRequest,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::dto;
pub use application::{ErrorResponse, ErrorType, ToErrorResponse};
