use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invariants::validate_certificado;
use crate::domain::{DomainError, DomainResult, Entidade};

/// Instructor recorded when none is given
pub const NOME_INSTRUTOR_PADRAO: &str = "ONLINE";

const CERTIFICADO_EMITIDO: &str = "Certificado foi emitido e não pode sofrer alterações";

/// Completion certificate of one enrollment.
///
/// CRITICAL INVARIANTS:
/// - Created by its MatriculaCurso only, at most once
/// - Once `data_emissao` is set, workload, grade, path and instructor are frozen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificado {
    #[serde(flatten)]
    entidade: Entidade,

    matricula_curso_id: Uuid,

    /// Course name copied at request time
    nome_curso: String,

    data_solicitacao: DateTime<Utc>,

    /// None until issued
    data_emissao: Option<DateTime<Utc>>,

    /// Sum of lesson hours at request time
    carga_horaria: i16,

    nota_final: u8,

    path_certificado: String,

    nome_instrutor: String,
}

impl Certificado {
    /// Build and validate a certificate.
    /// `data_solicitacao` defaults to now, a blank instructor to "ONLINE".
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        matricula_curso_id: Uuid,
        nome_curso: String,
        data_solicitacao: Option<DateTime<Utc>>,
        data_emissao: Option<DateTime<Utc>>,
        carga_horaria: i16,
        nota_final: u8,
        path_certificado: String,
        nome_instrutor: String,
    ) -> DomainResult<Self> {
        let nome_instrutor = match nome_instrutor.trim() {
            "" => NOME_INSTRUTOR_PADRAO.to_string(),
            nome => nome.to_string(),
        };

        let certificado = Self {
            entidade: Entidade::nova(),
            matricula_curso_id,
            nome_curso: nome_curso.trim().to_string(),
            data_solicitacao: data_solicitacao.unwrap_or_else(Utc::now),
            data_emissao,
            carga_horaria,
            nota_final,
            path_certificado: path_certificado.trim().to_string(),
            nome_instrutor,
        };

        validate_certificado(&certificado)?;
        Ok(certificado)
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

    pub fn nome_curso(&self) -> &str {
        &self.nome_curso
    }

    pub fn data_solicitacao(&self) -> DateTime<Utc> {
        self.data_solicitacao
    }

    pub fn data_emissao(&self) -> Option<DateTime<Utc>> {
        self.data_emissao
    }

    pub fn carga_horaria(&self) -> i16 {
        self.carga_horaria
    }

    pub fn nota_final(&self) -> u8 {
        self.nota_final
    }

    pub fn path_certificado(&self) -> &str {
        &self.path_certificado
    }

    pub fn nome_instrutor(&self) -> &str {
        &self.nome_instrutor
    }

    pub fn emitido(&self) -> bool {
        self.data_emissao.is_some()
    }

    /// Record the issue date. Not blocked once issued.
    pub fn atualizar_data_emissao(&mut self, data_emissao: DateTime<Utc>) -> DomainResult<()> {
        self.alterar(|c| c.data_emissao = Some(data_emissao))
    }

    pub fn atualizar_carga_horaria(&mut self, carga_horaria: i16) -> DomainResult<()> {
        self.garantir_nao_emitido()?;
        self.alterar(|c| c.carga_horaria = carga_horaria)
    }

    pub fn atualizar_nota_final(&mut self, nota_final: u8) -> DomainResult<()> {
        self.garantir_nao_emitido()?;
        self.alterar(|c| c.nota_final = nota_final)
    }

    pub fn atualizar_path_certificado(&mut self, path_certificado: String) -> DomainResult<()> {
        self.garantir_nao_emitido()?;
        self.alterar(|c| c.path_certificado = path_certificado.trim().to_string())
    }

    pub fn atualizar_nome_instrutor(&mut self, nome_instrutor: String) -> DomainResult<()> {
        self.garantir_nao_emitido()?;
        self.alterar(|c| c.nome_instrutor = nome_instrutor.trim().to_string())
    }

    fn garantir_nao_emitido(&self) -> DomainResult<()> {
        if self.emitido() {
            return Err(DomainError::transicao(CERTIFICADO_EMITIDO));
        }
        Ok(())
    }

    /// Validate-then-commit: the change is applied to a copy, the copy is
    /// validated as a whole, and only then replaces `self`.
    fn alterar(&mut self, aplicar: impl FnOnce(&mut Self)) -> DomainResult<()> {
        let mut proposta = self.clone();
        aplicar(&mut proposta);
        validate_certificado(&proposta)?;

        proposta.entidade.tocar();
        *self = proposta;
        Ok(())
    }
}
