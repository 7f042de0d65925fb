// src/events/types.rs
//
// Facts emitted by the application layer after an aggregate change was saved.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - The domain core never emits events itself

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;

    /// Aggregate the event belongs to
    fn aluno_id(&self) -> Uuid;
}

macro_rules! impl_domain_event {
    ($tipo:ty, $nome:literal) => {
        impl DomainEvent for $tipo {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { $nome }
            fn aluno_id(&self) -> Uuid { self.aluno_id }
        }
    };
}

// ============================================================================
// STUDENT EVENTS
// ============================================================================

/// Emitted when a student is registered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlunoCadastrado {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub aluno_id: Uuid,
    pub codigo_usuario_autenticacao: String,
    pub email: String,
}

impl AlunoCadastrado {
    pub fn new(aluno_id: Uuid, codigo_usuario_autenticacao: String, email: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aluno_id,
            codigo_usuario_autenticacao,
            email,
        }
    }
}

impl_domain_event!(AlunoCadastrado, "AlunoCadastrado");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlunoAtivado {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub aluno_id: Uuid,
}

impl AlunoAtivado {
    pub fn new(aluno_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aluno_id,
        }
    }
}

impl_domain_event!(AlunoAtivado, "AlunoAtivado");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlunoInativado {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub aluno_id: Uuid,
}

impl AlunoInativado {
    pub fn new(aluno_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aluno_id,
        }
    }
}

impl_domain_event!(AlunoInativado, "AlunoInativado");

// ============================================================================
// ENROLLMENT EVENTS
// ============================================================================

/// Emitted when a new enrollment was created (pending payment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlunoMatriculado {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub aluno_id: Uuid,
    pub matricula_id: Uuid,
    pub curso_id: Uuid,
    pub valor: f64,
}

impl AlunoMatriculado {
    pub fn new(aluno_id: Uuid, matricula_id: Uuid, curso_id: Uuid, valor: f64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aluno_id,
            matricula_id,
            curso_id,
            valor,
        }
    }
}

impl_domain_event!(AlunoMatriculado, "AlunoMatriculado");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagamentoMatriculaRegistrado {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub aluno_id: Uuid,
    pub matricula_id: Uuid,
}

impl PagamentoMatriculaRegistrado {
    pub fn new(aluno_id: Uuid, matricula_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aluno_id,
            matricula_id,
        }
    }
}

impl_domain_event!(PagamentoMatriculaRegistrado, "PagamentoMatriculaRegistrado");

/// Emitted for every lesson attempt recorded (new or replaced)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricoAprendizadoRegistrado {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub aluno_id: Uuid,
    pub matricula_id: Uuid,
    pub aula_id: Uuid,
    pub finalizada: bool,
}

impl HistoricoAprendizadoRegistrado {
    pub fn new(aluno_id: Uuid, matricula_id: Uuid, aula_id: Uuid, finalizada: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aluno_id,
            matricula_id,
            aula_id,
            finalizada,
        }
    }
}

impl_domain_event!(HistoricoAprendizadoRegistrado, "HistoricoAprendizadoRegistrado");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursoConcluido {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub aluno_id: Uuid,
    pub matricula_id: Uuid,
    pub data_conclusao: DateTime<Utc>,
}

impl CursoConcluido {
    pub fn new(aluno_id: Uuid, matricula_id: Uuid, data_conclusao: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aluno_id,
            matricula_id,
            data_conclusao,
        }
    }
}

impl_domain_event!(CursoConcluido, "CursoConcluido");

// ============================================================================
// CERTIFICATE EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificadoSolicitado {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub aluno_id: Uuid,
    pub matricula_id: Uuid,
    pub certificado_id: Uuid,
    pub carga_horaria: i16,
}

impl CertificadoSolicitado {
    pub fn new(
        aluno_id: Uuid,
        matricula_id: Uuid,
        certificado_id: Uuid,
        carga_horaria: i16,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aluno_id,
            matricula_id,
            certificado_id,
            carga_horaria,
        }
    }
}

impl_domain_event!(CertificadoSolicitado, "CertificadoSolicitado");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificadoEmitido {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub aluno_id: Uuid,
    pub matricula_id: Uuid,
    pub data_emissao: DateTime<Utc>,
}

impl CertificadoEmitido {
    pub fn new(aluno_id: Uuid, matricula_id: Uuid, data_emissao: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            aluno_id,
            matricula_id,
            data_emissao,
        }
    }
}

impl_domain_event!(CertificadoEmitido, "CertificadoEmitido");
