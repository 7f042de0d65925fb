use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invariants::{validar_aluno, validate_aluno};
use crate::domain::{
    Certificado, DomainError, DomainResult, Entidade, HistoricoAprendizado, MatriculaCurso,
};

/// Registration data for a new student, before normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovoAluno {
    /// Subject id issued by the external identity provider
    pub codigo_usuario_autenticacao: String,
    pub nome: String,
    pub email: String,
    /// Tax id (CPF), stored as given
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub genero: String,
    pub cidade: String,
    /// Two-letter state code
    pub estado: String,
    /// Postal code; `-` and `.` are stripped
    pub cep: String,
    pub foto: Option<String>,
}

/// Student aggregate root.
///
/// The only entry point that creates or mutates enrollments. Enrollments
/// and their children are exposed as read-only views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aluno {
    #[serde(flatten)]
    entidade: Entidade,

    codigo_usuario_autenticacao: String,

    nome: String,

    email: String,

    cpf: String,

    data_nascimento: NaiveDate,

    telefone: Option<String>,

    ativo: bool,

    genero: String,

    cidade: String,

    estado: String,

    cep: String,

    foto: Option<String>,

    /// At most one per course, in enrollment order
    matriculas_cursos: Vec<MatriculaCurso>,
}

impl Aluno {
    /// Create an inactive student from normalized registration data
    pub fn new(dados: NovoAluno) -> DomainResult<Self> {
        let aluno = Self {
            entidade: Entidade::nova(),
            codigo_usuario_autenticacao: dados.codigo_usuario_autenticacao.trim().to_string(),
            nome: dados.nome.trim().to_string(),
            email: dados.email.trim().to_lowercase(),
            cpf: dados.cpf,
            data_nascimento: dados.data_nascimento,
            telefone: None,
            ativo: false,
            genero: dados.genero.trim().to_string(),
            cidade: dados.cidade.trim().to_string(),
            estado: dados.estado.trim().to_string(),
            cep: dados.cep.trim().replace(['-', '.'], ""),
            foto: normalizar_opcional(dados.foto),
            matriculas_cursos: Vec::new(),
        };

        validate_aluno(&aluno)?;
        Ok(aluno)
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

    pub fn codigo_usuario_autenticacao(&self) -> &str {
        &self.codigo_usuario_autenticacao
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn data_nascimento(&self) -> NaiveDate {
        self.data_nascimento
    }

    pub fn telefone(&self) -> Option<&str> {
        self.telefone.as_deref()
    }

    pub fn ativo(&self) -> bool {
        self.ativo
    }

    pub fn genero(&self) -> &str {
        &self.genero
    }

    pub fn cidade(&self) -> &str {
        &self.cidade
    }

    pub fn estado(&self) -> &str {
        &self.estado
    }

    pub fn cep(&self) -> &str {
        &self.cep
    }

    pub fn foto(&self) -> Option<&str> {
        self.foto.as_deref()
    }

    pub fn matriculas_cursos(&self) -> &[MatriculaCurso] {
        &self.matriculas_cursos
    }

    // ------------------------------------------------------------------------
    // Student data
    // ------------------------------------------------------------------------

    pub fn ativar_aluno(&mut self) {
        self.ativo = true;
        self.entidade.tocar();
    }

    pub fn inativar_aluno(&mut self) {
        self.ativo = false;
        self.entidade.tocar();
    }

    pub fn atualizar_telefone(&mut self, telefone: Option<String>) -> DomainResult<()> {
        let telefone = normalizar_opcional(telefone);
        validar_aluno(self, telefone.as_deref(), self.foto())?;

        self.telefone = telefone;
        self.entidade.tocar();
        Ok(())
    }

    pub fn atualizar_foto(&mut self, foto: Option<String>) -> DomainResult<()> {
        let foto = normalizar_opcional(foto);
        validar_aluno(self, self.telefone(), foto.as_deref())?;

        self.foto = foto;
        self.entidade.tocar();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Enrollments
    // ------------------------------------------------------------------------

    /// Enroll in a course, starting at PendentePagamento
    pub fn matricular_aluno_em_curso(
        &mut self,
        curso_id: Uuid,
        nome_curso: String,
        valor: f64,
        observacao: Option<String>,
    ) -> DomainResult<&MatriculaCurso> {
        validate_aluno(self)?;

        if !self.ativo {
            return Err(DomainError::transicao(
                "Aluno inativo não pode ser matriculado em cursos",
            ));
        }

        if self.matriculas_cursos.iter().any(|m| m.curso_id() == curso_id) {
            return Err(DomainError::transicao("Aluno já está matriculado neste curso"));
        }

        let matricula = MatriculaCurso::new(self.id(), curso_id, nome_curso, valor, observacao)?;

        let indice = self.matriculas_cursos.len();
        self.matriculas_cursos.push(matricula);
        self.entidade.tocar();
        Ok(&self.matriculas_cursos[indice])
    }

    pub fn atualizar_pagamento_matricula(&mut self, matricula_id: Uuid) -> DomainResult<()> {
        localizar_matricula(&mut self.matriculas_cursos, matricula_id)?
            .registrar_pagamento_matricula()?;
        self.entidade.tocar();
        Ok(())
    }

    pub fn concluir_curso(&mut self, matricula_id: Uuid) -> DomainResult<()> {
        localizar_matricula(&mut self.matriculas_cursos, matricula_id)?.concluir_curso()?;
        self.entidade.tocar();
        Ok(())
    }

    pub fn registrar_historico_aprendizado(
        &mut self,
        matricula_id: Uuid,
        aula_id: Uuid,
        nome_aula: String,
        carga_horaria: i32,
        data_termino: Option<DateTime<Utc>>,
    ) -> DomainResult<()> {
        localizar_matricula(&mut self.matriculas_cursos, matricula_id)?
            .registrar_historico_aprendizado(aula_id, nome_aula, carga_horaria, data_termino)?;
        self.entidade.tocar();
        Ok(())
    }

    pub fn requisitar_certificado_conclusao(
        &mut self,
        matricula_id: Uuid,
        nota_final: u8,
        path_certificado: String,
        nome_instrutor: String,
    ) -> DomainResult<&Certificado> {
        let certificado = localizar_matricula(&mut self.matriculas_cursos, matricula_id)?
            .requisitar_certificado_conclusao(nota_final, path_certificado, nome_instrutor)?;
        self.entidade.tocar();
        Ok(certificado)
    }

    pub fn atualizar_nota_final_curso(
        &mut self,
        matricula_id: Uuid,
        nota_final: u8,
    ) -> DomainResult<()> {
        localizar_matricula(&mut self.matriculas_cursos, matricula_id)?
            .atualizar_nota_final_curso(nota_final)?;
        self.entidade.tocar();
        Ok(())
    }

    pub fn registrar_emissao_certificado(
        &mut self,
        matricula_id: Uuid,
        data_emissao: DateTime<Utc>,
    ) -> DomainResult<()> {
        localizar_matricula(&mut self.matriculas_cursos, matricula_id)?
            .registrar_emissao_certificado(data_emissao)?;
        self.entidade.tocar();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Queries (never fail)
    // ------------------------------------------------------------------------

    pub fn obter_matricula_curso_pelo_id(&self, matricula_id: Uuid) -> Option<&MatriculaCurso> {
        self.matriculas_cursos.iter().find(|m| m.id() == matricula_id)
    }

    pub fn obter_historico_aprendizado(
        &self,
        matricula_id: Uuid,
        aula_id: Uuid,
    ) -> Option<&HistoricoAprendizado> {
        self.obter_matricula_curso_pelo_id(matricula_id)?
            .obter_historico_aprendizado(aula_id)
    }

    pub fn obter_historicos_aprendizado(&self, matricula_id: Uuid) -> &[HistoricoAprendizado] {
        self.obter_matricula_curso_pelo_id(matricula_id)
            .map(MatriculaCurso::historicos_aprendizado)
            .unwrap_or_default()
    }

    pub fn obter_quantidade_aulas_registradas(&self, matricula_id: Uuid) -> usize {
        self.obter_matricula_curso_pelo_id(matricula_id)
            .map_or(0, MatriculaCurso::obter_quantidade_aulas_registradas)
    }

    pub fn obter_quantidade_aulas_finalizadas(&self, matricula_id: Uuid) -> usize {
        self.obter_matricula_curso_pelo_id(matricula_id)
            .map_or(0, MatriculaCurso::quantidade_aulas_finalizadas)
    }

    pub fn obter_quantidade_aulas_em_andamento(&self, matricula_id: Uuid) -> usize {
        self.obter_matricula_curso_pelo_id(matricula_id)
            .map_or(0, MatriculaCurso::quantidade_aulas_em_andamento)
    }
}

/// Lookup used by mutators: a miss is an error
fn localizar_matricula(
    matriculas: &mut [MatriculaCurso],
    matricula_id: Uuid,
) -> DomainResult<&mut MatriculaCurso> {
    matriculas
        .iter_mut()
        .find(|m| m.id() == matricula_id)
        .ok_or_else(|| DomainError::NotFound("Matrícula não foi localizada".to_string()))
}

fn normalizar_opcional(valor: Option<String>) -> Option<String> {
    valor
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl std::fmt::Display for Aluno {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.nome, self.email)
    }
}
