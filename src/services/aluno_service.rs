// src/services/aluno_service.rs
//
// Aluno Service - Command and Query Orchestration
//
// CRITICAL RULES:
// - Loads the aggregate, invokes exactly ONE aggregate method, saves it
// - Saves only when the aggregate accepted the change
// - Emits events only after a successful save
// - Business rules live in the domain, never here

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::application::dto::{AlunoDto, MatriculaCursoDto};
use crate::domain::{Aluno, DomainResult, NovoAluno};
use crate::error::{AppError, AppResult};
use crate::events::{
    AlunoAtivado, AlunoCadastrado, AlunoInativado, AlunoMatriculado, CertificadoEmitido,
    CertificadoSolicitado, CursoConcluido, DomainEvent, EventBus, HistoricoAprendizadoRegistrado,
    PagamentoMatriculaRegistrado,
};
use crate::repositories::AlunoRepository;

/// Service behaviour switches
#[derive(Debug, Clone)]
pub struct AlunoServiceConfig {
    /// Publish domain events after successful commands
    pub emitir_eventos: bool,
    /// Log rejected commands at warn level with every domain message
    pub registrar_rejeicoes: bool,
}

impl Default for AlunoServiceConfig {
    fn default() -> Self {
        Self {
            emitir_eventos: true,
            registrar_rejeicoes: true,
        }
    }
}

/// Request to enroll a student in a course
#[derive(Debug, Clone)]
pub struct MatricularAlunoRequest {
    pub aluno_id: Uuid,
    pub curso_id: Uuid,
    pub nome_curso: String,
    pub valor: f64,
    pub observacao: Option<String>,
}

/// Request to record a lesson attempt
#[derive(Debug, Clone)]
pub struct RegistrarHistoricoRequest {
    pub aluno_id: Uuid,
    pub matricula_id: Uuid,
    pub aula_id: Uuid,
    pub nome_aula: String,
    pub carga_horaria: i32,
    pub data_termino: Option<DateTime<Utc>>,
}

/// Request for the completion certificate
#[derive(Debug, Clone)]
pub struct RequisitarCertificadoRequest {
    pub aluno_id: Uuid,
    pub matricula_id: Uuid,
    pub nota_final: u8,
    pub path_certificado: String,
    pub nome_instrutor: String,
}

pub struct AlunoService {
    aluno_repo: Arc<dyn AlunoRepository>,
    event_bus: Arc<EventBus>,
    config: AlunoServiceConfig,
}

impl AlunoService {
    pub fn new(aluno_repo: Arc<dyn AlunoRepository>, event_bus: Arc<EventBus>) -> Self {
        Self::with_config(aluno_repo, event_bus, AlunoServiceConfig::default())
    }

    pub fn with_config(
        aluno_repo: Arc<dyn AlunoRepository>,
        event_bus: Arc<EventBus>,
        config: AlunoServiceConfig,
    ) -> Self {
        Self {
            aluno_repo,
            event_bus,
            config,
        }
    }

    // ========================================================================
    // COMMANDS
    // ========================================================================

    /// Register a new (inactive) student.
    /// One student per auth subject.
    pub fn cadastrar_aluno(&self, dados: NovoAluno) -> AppResult<Uuid> {
        let codigo = dados.codigo_usuario_autenticacao.trim().to_string();
        if self.aluno_repo.get_by_codigo_usuario(&codigo)?.is_some() {
            return Err(AppError::Conflict(format!(
                "Já existe aluno cadastrado para o usuário {}",
                codigo
            )));
        }

        let aluno = self.rejeitar_se_invalido("cadastrar_aluno", None, Aluno::new(dados))?;
        self.aluno_repo.save(&aluno)?;
        log::info!("aluno {} cadastrado", aluno.id());

        self.publicar(AlunoCadastrado::new(
            aluno.id(),
            aluno.codigo_usuario_autenticacao().to_string(),
            aluno.email().to_string(),
        ));
        Ok(aluno.id())
    }

    pub fn ativar_aluno(&self, aluno_id: Uuid) -> AppResult<()> {
        self.executar(aluno_id, "ativar_aluno", |aluno| {
            aluno.ativar_aluno();
            Ok(())
        })?;
        self.publicar(AlunoAtivado::new(aluno_id));
        Ok(())
    }

    pub fn inativar_aluno(&self, aluno_id: Uuid) -> AppResult<()> {
        self.executar(aluno_id, "inativar_aluno", |aluno| {
            aluno.inativar_aluno();
            Ok(())
        })?;
        self.publicar(AlunoInativado::new(aluno_id));
        Ok(())
    }

    /// Returns the new enrollment id
    pub fn matricular_aluno(&self, request: MatricularAlunoRequest) -> AppResult<Uuid> {
        let MatricularAlunoRequest {
            aluno_id,
            curso_id,
            nome_curso,
            valor,
            observacao,
        } = request;

        let matricula_id = self.executar(aluno_id, "matricular_aluno", |aluno| {
            aluno
                .matricular_aluno_em_curso(curso_id, nome_curso, valor, observacao)
                .map(|m| m.id())
        })?;

        self.publicar(AlunoMatriculado::new(aluno_id, matricula_id, curso_id, valor));
        Ok(matricula_id)
    }

    pub fn registrar_pagamento(&self, aluno_id: Uuid, matricula_id: Uuid) -> AppResult<()> {
        self.executar(aluno_id, "registrar_pagamento", |aluno| {
            aluno.atualizar_pagamento_matricula(matricula_id)
        })?;
        self.publicar(PagamentoMatriculaRegistrado::new(aluno_id, matricula_id));
        Ok(())
    }

    pub fn registrar_historico_aprendizado(&self, request: RegistrarHistoricoRequest) -> AppResult<()> {
        let RegistrarHistoricoRequest {
            aluno_id,
            matricula_id,
            aula_id,
            nome_aula,
            carga_horaria,
            data_termino,
        } = request;

        self.executar(aluno_id, "registrar_historico_aprendizado", |aluno| {
            aluno.registrar_historico_aprendizado(
                matricula_id,
                aula_id,
                nome_aula,
                carga_horaria,
                data_termino,
            )
        })?;

        self.publicar(HistoricoAprendizadoRegistrado::new(
            aluno_id,
            matricula_id,
            aula_id,
            data_termino.is_some(),
        ));
        Ok(())
    }

    pub fn concluir_curso(&self, aluno_id: Uuid, matricula_id: Uuid) -> AppResult<()> {
        let data_conclusao = self.executar(aluno_id, "concluir_curso", |aluno| {
            aluno.concluir_curso(matricula_id)?;
            Ok(aluno
                .obter_matricula_curso_pelo_id(matricula_id)
                .and_then(|m| m.data_conclusao())
                .unwrap_or_else(Utc::now))
        })?;

        self.publicar(CursoConcluido::new(aluno_id, matricula_id, data_conclusao));
        Ok(())
    }

    /// Returns the new certificate id
    pub fn requisitar_certificado(&self, request: RequisitarCertificadoRequest) -> AppResult<Uuid> {
        let RequisitarCertificadoRequest {
            aluno_id,
            matricula_id,
            nota_final,
            path_certificado,
            nome_instrutor,
        } = request;

        let (certificado_id, carga_horaria) =
            self.executar(aluno_id, "requisitar_certificado", |aluno| {
                aluno
                    .requisitar_certificado_conclusao(
                        matricula_id,
                        nota_final,
                        path_certificado,
                        nome_instrutor,
                    )
                    .map(|c| (c.id(), c.carga_horaria()))
            })?;

        self.publicar(CertificadoSolicitado::new(
            aluno_id,
            matricula_id,
            certificado_id,
            carga_horaria,
        ));
        Ok(certificado_id)
    }

    pub fn atualizar_nota_final(
        &self,
        aluno_id: Uuid,
        matricula_id: Uuid,
        nota_final: u8,
    ) -> AppResult<()> {
        self.executar(aluno_id, "atualizar_nota_final", |aluno| {
            aluno.atualizar_nota_final_curso(matricula_id, nota_final)
        })
    }

    pub fn emitir_certificado(
        &self,
        aluno_id: Uuid,
        matricula_id: Uuid,
        data_emissao: DateTime<Utc>,
    ) -> AppResult<()> {
        self.executar(aluno_id, "emitir_certificado", |aluno| {
            aluno.registrar_emissao_certificado(matricula_id, data_emissao)
        })?;
        self.publicar(CertificadoEmitido::new(aluno_id, matricula_id, data_emissao));
        Ok(())
    }

    // ========================================================================
    // QUERIES (never mutate)
    // ========================================================================

    pub fn obter_aluno(&self, aluno_id: Uuid) -> AppResult<AlunoDto> {
        Ok(AlunoDto::from(&self.carregar(aluno_id)?))
    }

    /// `None` when the student has no such enrollment
    pub fn obter_matricula(
        &self,
        aluno_id: Uuid,
        matricula_id: Uuid,
    ) -> AppResult<Option<MatriculaCursoDto>> {
        let aluno = self.carregar(aluno_id)?;
        Ok(aluno
            .obter_matricula_curso_pelo_id(matricula_id)
            .map(MatriculaCursoDto::from))
    }

    // ========================================================================
    // PLUMBING
    // ========================================================================

    fn carregar(&self, aluno_id: Uuid) -> AppResult<Aluno> {
        self.aluno_repo
            .get_by_id(aluno_id)?
            .ok_or(AppError::NotFound(aluno_id))
    }

    /// Load, apply one aggregate operation, save on success
    fn executar<T>(
        &self,
        aluno_id: Uuid,
        comando: &str,
        operacao: impl FnOnce(&mut Aluno) -> DomainResult<T>,
    ) -> AppResult<T> {
        let mut aluno = self.carregar(aluno_id)?;
        let resultado = self.rejeitar_se_invalido(comando, Some(aluno_id), operacao(&mut aluno))?;

        self.aluno_repo.save(&aluno)?;
        log::info!("{} aceito para aluno {}", comando, aluno_id);
        Ok(resultado)
    }

    fn rejeitar_se_invalido<T>(
        &self,
        comando: &str,
        aluno_id: Option<Uuid>,
        resultado: DomainResult<T>,
    ) -> AppResult<T> {
        resultado.map_err(|erro| {
            if self.config.registrar_rejeicoes {
                log::warn!(
                    "{} rejeitado (aluno: {:?}): {}",
                    comando,
                    aluno_id,
                    erro.mensagens().join("; ")
                );
            }
            AppError::Domain(erro)
        })
    }

    fn publicar<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        if self.config.emitir_eventos {
            self.event_bus.emit(event);
        }
    }
}
