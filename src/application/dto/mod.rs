// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are read-side projections for the query layer
// - DTOs NEVER leak mutable access to the aggregate
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Aluno, Certificado, HistoricoAprendizado, MatriculaCurso};

// ============================================================================
// STUDENT DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlunoDto {
    pub id: String,
    pub codigo_usuario_autenticacao: String,
    pub nome: String,
    pub email: String,
    pub cpf: String,
    pub data_nascimento: String,
    pub telefone: Option<String>,
    pub ativo: bool,
    pub genero: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub foto: Option<String>,
    pub matriculas: Vec<MatriculaCursoDto>,
    pub criado_em: String,
    pub atualizado_em: String,
}

// ============================================================================
// ENROLLMENT DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatriculaCursoDto {
    pub id: String,
    pub aluno_id: String,
    pub curso_id: String,
    pub nome_curso: String,
    pub valor: f64,
    pub data_matricula: String,
    pub data_conclusao: Option<String>,
    pub estado_matricula: String,
    /// Stable storage ordinal of `estado_matricula`
    pub estado_matricula_ordinal: u8,
    pub observacao: Option<String>,
    pub quantidade_aulas_registradas: usize,
    pub quantidade_aulas_finalizadas: usize,
    pub quantidade_aulas_em_andamento: usize,
    pub quantidade_total_carga_horaria: i32,
    pub pagamento_pode_ser_realizado: bool,
    pub pode_concluir_curso: bool,
    pub nota_final: Option<u8>,
    pub path_certificado: Option<String>,
    pub historicos_aprendizado: Vec<HistoricoAprendizadoDto>,
    pub certificado: Option<CertificadoDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricoAprendizadoDto {
    pub id: String,
    pub aula_id: String,
    pub nome_aula: String,
    pub carga_horaria: i32,
    pub data_inicio: String,
    pub data_termino: Option<String>,
    pub finalizada: bool,
}

// ============================================================================
// CERTIFICATE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificadoDto {
    pub id: String,
    pub nome_curso: String,
    pub data_solicitacao: String,
    pub data_emissao: Option<String>,
    pub carga_horaria: i16,
    pub nota_final: u8,
    pub path_certificado: String,
    pub nome_instrutor: String,
    pub emitido: bool,
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&Aluno> for AlunoDto {
    fn from(aluno: &Aluno) -> Self {
        Self {
            id: aluno.id().to_string(),
            codigo_usuario_autenticacao: aluno.codigo_usuario_autenticacao().to_string(),
            nome: aluno.nome().to_string(),
            email: aluno.email().to_string(),
            cpf: aluno.cpf().to_string(),
            data_nascimento: aluno.data_nascimento().to_string(),
            telefone: aluno.telefone().map(str::to_string),
            ativo: aluno.ativo(),
            genero: aluno.genero().to_string(),
            cidade: aluno.cidade().to_string(),
            estado: aluno.estado().to_string(),
            cep: aluno.cep().to_string(),
            foto: aluno.foto().map(str::to_string),
            matriculas: aluno
                .matriculas_cursos()
                .iter()
                .map(MatriculaCursoDto::from)
                .collect(),
            criado_em: aluno.entidade().criado_em().to_rfc3339(),
            atualizado_em: aluno.entidade().atualizado_em().to_rfc3339(),
        }
    }
}

impl From<&MatriculaCurso> for MatriculaCursoDto {
    fn from(matricula: &MatriculaCurso) -> Self {
        Self {
            id: matricula.id().to_string(),
            aluno_id: matricula.aluno_id().to_string(),
            curso_id: matricula.curso_id().to_string(),
            nome_curso: matricula.nome_curso().to_string(),
            valor: matricula.valor(),
            data_matricula: matricula.data_matricula().to_rfc3339(),
            data_conclusao: matricula.data_conclusao().map(|d| d.to_rfc3339()),
            estado_matricula: matricula.estado_matricula().to_string(),
            estado_matricula_ordinal: matricula.estado_matricula().as_ordinal(),
            observacao: matricula.observacao().map(str::to_string),
            quantidade_aulas_registradas: matricula.obter_quantidade_aulas_registradas(),
            quantidade_aulas_finalizadas: matricula.quantidade_aulas_finalizadas(),
            quantidade_aulas_em_andamento: matricula.quantidade_aulas_em_andamento(),
            quantidade_total_carga_horaria: matricula.quantidade_total_carga_horaria(),
            pagamento_pode_ser_realizado: matricula.pagamento_pode_ser_realizado(),
            pode_concluir_curso: matricula.pode_concluir_curso(),
            nota_final: matricula.obter_nota_final_curso(),
            path_certificado: matricula
                .certificado()
                .map(|c| c.path_certificado().to_string()),
            historicos_aprendizado: matricula
                .historicos_aprendizado()
                .iter()
                .map(HistoricoAprendizadoDto::from)
                .collect(),
            certificado: matricula.certificado().map(CertificadoDto::from),
        }
    }
}

impl From<&HistoricoAprendizado> for HistoricoAprendizadoDto {
    fn from(historico: &HistoricoAprendizado) -> Self {
        Self {
            id: historico.id().to_string(),
            aula_id: historico.aula_id().to_string(),
            nome_aula: historico.nome_aula().to_string(),
            carga_horaria: historico.carga_horaria(),
            data_inicio: historico.data_inicio().to_rfc3339(),
            data_termino: historico.data_termino().map(|d| d.to_rfc3339()),
            finalizada: historico.finalizada(),
        }
    }
}

impl From<&Certificado> for CertificadoDto {
    fn from(certificado: &Certificado) -> Self {
        Self {
            id: certificado.id().to_string(),
            nome_curso: certificado.nome_curso().to_string(),
            data_solicitacao: certificado.data_solicitacao().to_rfc3339(),
            data_emissao: certificado.data_emissao().map(|d| d.to_rfc3339()),
            carga_horaria: certificado.carga_horaria(),
            nota_final: certificado.nota_final(),
            path_certificado: certificado.path_certificado().to_string(),
            nome_instrutor: certificado.nome_instrutor().to_string(),
            emitido: certificado.emitido(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aluno::tests_support::aluno_ativo;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_matricula_projection() {
        let mut aluno = aluno_ativo();
        let matricula_id = aluno
            .matricular_aluno_em_curso(
                Uuid::new_v4(),
                "Domain Driven Design".to_string(),
                99.0,
                None,
            )
            .unwrap()
            .id();

        let dto = MatriculaCursoDto::from(aluno.obter_matricula_curso_pelo_id(matricula_id).unwrap());
        assert_eq!(dto.estado_matricula, "pendente_pagamento");
        assert_eq!(dto.estado_matricula_ordinal, 1);
        assert!(dto.pagamento_pode_ser_realizado);
        assert!(dto.certificado.is_none());

        aluno.atualizar_pagamento_matricula(matricula_id).unwrap();
        aluno
            .registrar_historico_aprendizado(
                matricula_id,
                Uuid::new_v4(),
                "Bounded contexts".to_string(),
                8,
                Some(Utc::now()),
            )
            .unwrap();
        aluno.concluir_curso(matricula_id).unwrap();
        aluno
            .requisitar_certificado_conclusao(matricula_id, 9, "ddd.pdf".into(), "".into())
            .unwrap();

        let dto = AlunoDto::from(&aluno);
        let matricula = &dto.matriculas[0];
        assert_eq!(matricula.estado_matricula, "concluido");
        assert_eq!(matricula.quantidade_aulas_finalizadas, 1);
        assert_eq!(matricula.quantidade_total_carga_horaria, 8);
        assert_eq!(matricula.nota_final, Some(9));
        assert_eq!(matricula.path_certificado.as_deref(), Some("ddd.pdf"));
        assert_eq!(matricula.certificado.as_ref().unwrap().nome_instrutor, "ONLINE");
        assert!(matricula.data_conclusao.is_some());
    }
}
