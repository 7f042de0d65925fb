use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invariants::{validar_matricula, validate_matricula_curso};
use crate::domain::{Certificado, DomainError, DomainResult, Entidade, HistoricoAprendizado};

/// Value returned by `calcular_media_final_curso` whenever hours exist.
/// Recorded grades are not consulted yet.
pub const MEDIA_FINAL_FIXA: u8 = 10;

/// One student's registration in one course.
///
/// State machine:
/// PendentePagamento -> PagamentoRealizado -> Concluido (terminal).
/// Abandonado is never entered here; it only arrives from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatriculaCurso {
    #[serde(flatten)]
    entidade: Entidade,

    /// Owning student (immutable)
    aluno_id: Uuid,

    /// Course reference (immutable)
    curso_id: Uuid,

    nome_curso: String,

    /// Price paid for the course
    valor: f64,

    data_matricula: DateTime<Utc>,

    /// Set once, on completion
    data_conclusao: Option<DateTime<Utc>>,

    estado_matricula: EstadoMatricula,

    observacao: Option<String>,

    /// Owned lesson attempts, in registration order
    historicos_aprendizado: Vec<HistoricoAprendizado>,

    /// At most one, requested after completion
    certificado: Option<Certificado>,
}

/// Enrollment status. Ordinals are stable for storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoMatricula {
    PendentePagamento,
    PagamentoRealizado,
    Concluido,
    Abandonado,
}

impl EstadoMatricula {
    pub fn as_ordinal(self) -> u8 {
        match self {
            EstadoMatricula::PendentePagamento => 1,
            EstadoMatricula::PagamentoRealizado => 2,
            EstadoMatricula::Concluido => 3,
            EstadoMatricula::Abandonado => 4,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(EstadoMatricula::PendentePagamento),
            2 => Some(EstadoMatricula::PagamentoRealizado),
            3 => Some(EstadoMatricula::Concluido),
            4 => Some(EstadoMatricula::Abandonado),
            _ => None,
        }
    }
}

impl MatriculaCurso {
    /// Create a pending-payment enrollment.
    /// Only the Aluno aggregate creates enrollments.
    pub(crate) fn new(
        aluno_id: Uuid,
        curso_id: Uuid,
        nome_curso: String,
        valor: f64,
        observacao: Option<String>,
    ) -> DomainResult<Self> {
        let matricula = Self {
            entidade: Entidade::nova(),
            aluno_id,
            curso_id,
            nome_curso: nome_curso.trim().to_string(),
            valor,
            data_matricula: Utc::now(),
            data_conclusao: None,
            estado_matricula: EstadoMatricula::PendentePagamento,
            observacao: observacao
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty()),
            historicos_aprendizado: Vec::new(),
            certificado: None,
        };

        validate_matricula_curso(&matricula)?;
        Ok(matricula)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn id(&self) -> Uuid {
        self.entidade.id()
    }

    pub fn entidade(&self) -> &Entidade {
        &self.entidade
    }

    pub fn aluno_id(&self) -> Uuid {
        self.aluno_id
    }

    pub fn curso_id(&self) -> Uuid {
        self.curso_id
    }

    pub fn nome_curso(&self) -> &str {
        &self.nome_curso
    }

    pub fn valor(&self) -> f64 {
        self.valor
    }

    pub fn data_matricula(&self) -> DateTime<Utc> {
        self.data_matricula
    }

    pub fn data_conclusao(&self) -> Option<DateTime<Utc>> {
        self.data_conclusao
    }

    pub fn estado_matricula(&self) -> EstadoMatricula {
        self.estado_matricula
    }

    pub fn observacao(&self) -> Option<&str> {
        self.observacao.as_deref()
    }

    pub fn historicos_aprendizado(&self) -> &[HistoricoAprendizado] {
        &self.historicos_aprendizado
    }

    pub fn certificado(&self) -> Option<&Certificado> {
        self.certificado.as_ref()
    }

    pub fn obter_historico_aprendizado(&self, aula_id: Uuid) -> Option<&HistoricoAprendizado> {
        self.historicos_aprendizado
            .iter()
            .find(|h| h.aula_id() == aula_id)
    }

    // ------------------------------------------------------------------------
    // Read helpers
    // ------------------------------------------------------------------------

    pub fn quantidade_aulas_finalizadas(&self) -> usize {
        self.historicos_aprendizado
            .iter()
            .filter(|h| h.finalizada())
            .count()
    }

    pub fn quantidade_aulas_em_andamento(&self) -> usize {
        self.historicos_aprendizado
            .iter()
            .filter(|h| !h.finalizada())
            .count()
    }

    pub fn obter_quantidade_aulas_registradas(&self) -> usize {
        self.historicos_aprendizado.len()
    }

    /// Open and finished lessons alike
    pub fn quantidade_total_carga_horaria(&self) -> i32 {
        self.historicos_aprendizado
            .iter()
            .map(HistoricoAprendizado::carga_horaria)
            .sum()
    }

    pub fn pagamento_pode_ser_realizado(&self) -> bool {
        matches!(
            self.estado_matricula,
            EstadoMatricula::PendentePagamento | EstadoMatricula::Abandonado
        )
    }

    pub fn matricula_curso_disponivel(&self) -> bool {
        self.estado_matricula == EstadoMatricula::PagamentoRealizado
            && !self.matricula_curso_concluido()
    }

    pub fn pode_concluir_curso(&self) -> bool {
        self.estado_matricula == EstadoMatricula::PagamentoRealizado
            && self.quantidade_aulas_em_andamento() == 0
    }

    pub fn matricula_curso_concluido(&self) -> bool {
        self.data_conclusao.is_some()
    }

    pub fn obter_nota_final_curso(&self) -> Option<u8> {
        self.certificado.as_ref().map(Certificado::nota_final)
    }

    pub fn calcular_media_final_curso(&self) -> DomainResult<u8> {
        if self.quantidade_total_carga_horaria() == 0 {
            return Err(DomainError::transicao(
                "Não é possível calcular a média final sem carga horária registrada",
            ));
        }
        Ok(MEDIA_FINAL_FIXA)
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// PendentePagamento | Abandonado -> PagamentoRealizado
    pub fn registrar_pagamento_matricula(&mut self) -> DomainResult<()> {
        validar_matricula(self, EstadoMatricula::PagamentoRealizado, self.data_conclusao)?;

        self.estado_matricula = EstadoMatricula::PagamentoRealizado;
        self.entidade.tocar();
        Ok(())
    }

    /// Record a lesson attempt. An open entry for the same lesson is replaced
    /// (keeping its start date); a finished one cannot be touched again.
    pub fn registrar_historico_aprendizado(
        &mut self,
        aula_id: Uuid,
        nome_aula: String,
        carga_horaria: i32,
        data_termino: Option<DateTime<Utc>>,
    ) -> DomainResult<()> {
        validate_matricula_curso(self)?;

        if !self.matricula_curso_disponivel() {
            return Err(DomainError::transicao(
                "Matrícula não está disponível para registrar histórico de aprendizado",
            ));
        }

        let existente = self
            .historicos_aprendizado
            .iter()
            .position(|h| h.aula_id() == aula_id);

        match existente {
            Some(indice) => {
                let anterior = &self.historicos_aprendizado[indice];
                if anterior.finalizada() {
                    return Err(DomainError::transicao("Esta aula já foi concluída"));
                }

                let historico = HistoricoAprendizado::new(
                    self.id(),
                    self.curso_id,
                    aula_id,
                    nome_aula,
                    carga_horaria,
                    Some(anterior.data_inicio()),
                    data_termino,
                )?;
                self.historicos_aprendizado[indice] = historico;
            }
            None => {
                let historico = HistoricoAprendizado::new(
                    self.id(),
                    self.curso_id,
                    aula_id,
                    nome_aula,
                    carga_horaria,
                    None,
                    data_termino,
                )?;
                self.historicos_aprendizado.push(historico);
            }
        }

        self.entidade.tocar();
        Ok(())
    }

    /// PagamentoRealizado (no open lessons) -> Concluido
    pub fn concluir_curso(&mut self) -> DomainResult<()> {
        if self.estado_matricula == EstadoMatricula::Abandonado {
            return Err(DomainError::transicao(
                "Não é possível concluir um curso com matrícula abandonada",
            ));
        }

        if self.estado_matricula != EstadoMatricula::Concluido && !self.pode_concluir_curso() {
            if self.estado_matricula != EstadoMatricula::PagamentoRealizado {
                return Err(DomainError::transicao(
                    "Não é possível concluir o curso, o pagamento não foi realizado",
                ));
            }
            return Err(DomainError::transicao(
                "Não é possível concluir o curso, existem aulas não finalizadas",
            ));
        }

        if self.matricula_curso_concluido() {
            return Err(DomainError::transicao("Curso já foi concluído"));
        }

        let data_conclusao = Utc::now();
        validar_matricula(self, EstadoMatricula::Concluido, Some(data_conclusao))?;

        self.data_conclusao = Some(data_conclusao);
        self.estado_matricula = EstadoMatricula::Concluido;
        self.entidade.tocar();
        Ok(())
    }

    /// Create the (single) certificate of a concluded enrollment.
    /// Workload is the sum of every recorded lesson.
    pub fn requisitar_certificado_conclusao(
        &mut self,
        nota_final: u8,
        path_certificado: String,
        nome_instrutor: String,
    ) -> DomainResult<&Certificado> {
        if self.certificado.is_some() {
            return Err(DomainError::transicao(
                "Certificado já foi solicitado para esta matrícula",
            ));
        }

        if !self.matricula_curso_concluido() {
            return Err(DomainError::transicao(
                "Certificado só pode ser solicitado após a conclusão do curso",
            ));
        }

        // Out-of-range totals saturate and are reported by validation
        let carga_horaria =
            i16::try_from(self.quantidade_total_carga_horaria()).unwrap_or(i16::MAX);

        let certificado = Certificado::new(
            self.id(),
            self.nome_curso.clone(),
            None,
            None,
            carga_horaria,
            nota_final,
            path_certificado,
            nome_instrutor,
        )?;

        self.entidade.tocar();
        Ok(self.certificado.insert(certificado))
    }

    pub fn atualizar_nota_final_curso(&mut self, nota_final: u8) -> DomainResult<()> {
        self.certificado_solicitado()?.atualizar_nota_final(nota_final)?;
        self.entidade.tocar();
        Ok(())
    }

    /// Mark the certificate as issued on `data_emissao`
    pub fn registrar_emissao_certificado(&mut self, data_emissao: DateTime<Utc>) -> DomainResult<()> {
        self.certificado_solicitado()?
            .atualizar_data_emissao(data_emissao)?;
        self.entidade.tocar();
        Ok(())
    }

    fn certificado_solicitado(&mut self) -> DomainResult<&mut Certificado> {
        self.certificado.as_mut().ok_or_else(|| {
            DomainError::transicao(
                "Certificado não foi solicitado para esta matrícula, não é possível alterá-lo",
            )
        })
    }
}

impl std::fmt::Display for EstadoMatricula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstadoMatricula::PendentePagamento => write!(f, "pendente_pagamento"),
            EstadoMatricula::PagamentoRealizado => write!(f, "pagamento_realizado"),
            EstadoMatricula::Concluido => write!(f, "concluido"),
            EstadoMatricula::Abandonado => write!(f, "abandonado"),
        }
    }
}
