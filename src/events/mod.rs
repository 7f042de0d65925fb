// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventLogEntry, DEFAULT_LOG_CAPACITY};
pub use types::DomainEvent;

pub use types::{
    // Student
    AlunoAtivado,
    AlunoCadastrado,
    AlunoInativado,
    // Enrollment
    AlunoMatriculado,
    CursoConcluido,
    HistoricoAprendizadoRegistrado,
    PagamentoMatriculaRegistrado,
    // Certificate
    CertificadoEmitido,
    CertificadoSolicitado,
};
