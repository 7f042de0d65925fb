use chrono::{DateTime, Utc};

use super::entity::{EstadoMatricula, MatriculaCurso};
use crate::domain::validacao::regras::*;
use crate::domain::validacao::ResultadoValidacao;
use crate::domain::DomainResult;

pub const NOME_CURSO_MIN: usize = 10;
pub const NOME_CURSO_MAX: usize = 200;
pub const OBSERVACAO_MAX: usize = 2000;

/// Validates all MatriculaCurso invariants against its current state
pub fn validate_matricula_curso(matricula: &MatriculaCurso) -> DomainResult<()> {
    validar_matricula(
        matricula,
        matricula.estado_matricula(),
        matricula.data_conclusao(),
    )
}

/// Same rule set, with a proposed status and conclusion date standing in for
/// the stored ones. Transitions call this before committing anything.
pub(super) fn validar_matricula(
    matricula: &MatriculaCurso,
    estado: EstadoMatricula,
    data_conclusao: Option<DateTime<Utc>>,
) -> DomainResult<()> {
    let mut resultado = ResultadoValidacao::new();

    validar_id(
        matricula.aluno_id(),
        "Identificação do aluno não pode ser vazia",
        &mut resultado,
    );
    validar_id(
        matricula.curso_id(),
        "Identificação do curso não pode ser vazia",
        &mut resultado,
    );
    validar_obrigatorio(
        matricula.nome_curso(),
        "Nome do curso não pode ser vazio ou nulo",
        &mut resultado,
    );
    validar_tamanho(
        matricula.nome_curso(),
        NOME_CURSO_MIN,
        NOME_CURSO_MAX,
        "Nome do curso deve ter entre 10 e 200 caracteres",
        &mut resultado,
    );
    validar_maior_que_zero(
        matricula.valor(),
        "Valor da matrícula deve ser maior que zero",
        &mut resultado,
    );
    validar_data_valida(
        matricula.data_matricula(),
        "Data da matrícula deve ser válida",
        &mut resultado,
    );
    validar_data_nao_futura(
        matricula.data_matricula(),
        "Data da matrícula não pode ser superior à data atual",
        &mut resultado,
    );
    validar_tamanho_opcional(
        matricula.observacao(),
        0,
        OBSERVACAO_MAX,
        "Observação deve ter no máximo 2000 caracteres",
        &mut resultado,
    );

    match (estado, data_conclusao) {
        (EstadoMatricula::Concluido, None) => {
            resultado.add_error("Data de conclusão deve ser informada para matrícula concluída")
        }
        (EstadoMatricula::Concluido, Some(conclusao)) => {
            validar_data_minima(
                conclusao,
                matricula.data_matricula(),
                "Data de conclusão deve ser igual ou superior à data da matrícula",
                &mut resultado,
            );
            validar_data_nao_futura(
                conclusao,
                "Data de conclusão não pode ser superior à data atual",
                &mut resultado,
            );
        }
        (_, Some(_)) => resultado
            .add_error("Data de conclusão só pode ser informada para matrícula concluída"),
        (_, None) => {}
    }

    resultado.raise_if_invalid()
}

/// Invariants that must hold true for an enrollment:
///
/// 1. Student and course references are non-nil and never change
/// 2. Course name is 10-200 chars, price is strictly positive
/// 3. Enrollment date is a real instant, not in the future
/// 4. Note, when present, is at most 2000 chars
/// 5. Conclusion date is present exactly when the status is Concluido
/// 6. Conclusion date is between the enrollment date and now
/// 7. At most one entry per lesson, at most one certificate

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aluno::tests_support::aluno_ativo;
    use crate::domain::DomainError;
    use chrono::Duration;
    use uuid::Uuid;

    fn matricular(nome_curso: &str, valor: f64, observacao: Option<String>) -> DomainResult<()> {
        let mut aluno = aluno_ativo();
        aluno
            .matricular_aluno_em_curso(Uuid::new_v4(), nome_curso.to_string(), valor, observacao)
            .map(|_| ())
    }

    #[test]
    fn test_valid_enrollment() {
        assert!(matricular("Domain Driven Design", 100.0, Some("  turma A ".into())).is_ok());
    }

    #[test]
    fn test_invalid_enrollment_reports_all_rules() {
        let err = matricular("Curto", 0.0, Some("x".repeat(2001))).unwrap_err();

        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(err.mensagens().len(), 3);
        assert!(err.contem("entre 10 e 200"));
        assert!(err.contem("maior que zero"));
        assert!(err.contem("2000 caracteres"));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(matricular("Domain Driven Design", -10.0, None).is_err());
    }

    #[test]
    fn test_conclusion_date_rules() {
        let mut aluno = aluno_ativo();
        let matricula = aluno
            .matricular_aluno_em_curso(
                Uuid::new_v4(),
                "Domain Driven Design".to_string(),
                100.0,
                None,
            )
            .unwrap()
            .clone();

        let antes = matricula.data_matricula() - Duration::days(1);
        let futura = Utc::now() + Duration::days(1);

        assert!(validar_matricula(&matricula, EstadoMatricula::Concluido, None).is_err());
        assert!(validar_matricula(&matricula, EstadoMatricula::Concluido, Some(antes)).is_err());
        assert!(validar_matricula(&matricula, EstadoMatricula::Concluido, Some(futura)).is_err());
        assert!(validar_matricula(&matricula, EstadoMatricula::Concluido, Some(Utc::now())).is_ok());
        assert!(
            validar_matricula(&matricula, EstadoMatricula::Abandonado, Some(Utc::now())).is_err()
        );
        assert!(validar_matricula(&matricula, EstadoMatricula::Abandonado, None).is_ok());
    }
}
