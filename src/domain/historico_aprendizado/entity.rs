use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invariants::validate_historico_aprendizado;
use crate::domain::{DomainResult, Entidade};

/// One lesson attempt inside an enrollment.
/// Immutable once built; an open entry is superseded by a new value that keeps
/// the original `data_inicio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricoAprendizado {
    #[serde(flatten)]
    entidade: Entidade,

    /// Owning enrollment
    matricula_curso_id: Uuid,

    curso_id: Uuid,

    aula_id: Uuid,

    nome_aula: String,

    /// Lesson workload in hours
    carga_horaria: i32,

    data_inicio: DateTime<Utc>,

    /// None while the lesson is still open
    data_termino: Option<DateTime<Utc>>,
}

impl HistoricoAprendizado {
    /// Build and validate an entry.
    /// `data_inicio` defaults to now, or to `data_termino` when the lesson
    /// is recorded as already finished.
    pub fn new(
        matricula_curso_id: Uuid,
        curso_id: Uuid,
        aula_id: Uuid,
        nome_aula: String,
        carga_horaria: i32,
        data_inicio: Option<DateTime<Utc>>,
        data_termino: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        let agora = Utc::now();
        let data_inicio =
            data_inicio.unwrap_or_else(|| data_termino.map_or(agora, |termino| termino.min(agora)));

        let historico = Self {
            entidade: Entidade::nova(),
            matricula_curso_id,
            curso_id,
            aula_id,
            nome_aula: nome_aula.trim().to_string(),
            carga_horaria,
            data_inicio,
            data_termino,
        };

        validate_historico_aprendizado(&historico)?;
        Ok(historico)
    }

    pub fn id(&self) -> Uuid {
        self.entidade.id()
    }

    pub fn entidade(&self) -> &Entidade {
        &self.entidade
    }

    pub fn matricula_curso_id(&self) -> Uuid {
        self.matricula_curso_id
    }

    pub fn curso_id(&self) -> Uuid {
        self.curso_id
    }

    pub fn aula_id(&self) -> Uuid {
        self.aula_id
    }

    pub fn nome_aula(&self) -> &str {
        &self.nome_aula
    }

    pub fn carga_horaria(&self) -> i32 {
        self.carga_horaria
    }

    pub fn data_inicio(&self) -> DateTime<Utc> {
        self.data_inicio
    }

    pub fn data_termino(&self) -> Option<DateTime<Utc>> {
        self.data_termino
    }

    /// Lesson has a termination date
    pub fn finalizada(&self) -> bool {
        self.data_termino.is_some()
    }
}

impl std::fmt::Display for HistoricoAprendizado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}h)", self.nome_aula, self.carga_horaria)
    }
}
