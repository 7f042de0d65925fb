use super::entity::Aluno;
use crate::domain::validacao::regras::*;
use crate::domain::validacao::ResultadoValidacao;
use crate::domain::DomainResult;

pub const NOME_MIN: usize = 3;
pub const NOME_MAX: usize = 100;
pub const EMAIL_MIN: usize = 3;
pub const EMAIL_MAX: usize = 100;
pub const TELEFONE_MAX: usize = 25;
pub const GENERO_MAX: usize = 20;
pub const CIDADE_MAX: usize = 50;
pub const ESTADO_TAMANHO: usize = 2;
pub const CEP_MAX: usize = 8;
pub const FOTO_MAX: usize = 1024;

/// Validates all Aluno invariants against its current state
pub fn validate_aluno(aluno: &Aluno) -> DomainResult<()> {
    validar_aluno(aluno, aluno.telefone(), aluno.foto())
}

/// Full rule set with proposed contact fields standing in for the stored ones
pub(super) fn validar_aluno(
    aluno: &Aluno,
    telefone: Option<&str>,
    foto: Option<&str>,
) -> DomainResult<()> {
    let mut resultado = ResultadoValidacao::new();

    validar_obrigatorio(
        aluno.codigo_usuario_autenticacao(),
        "Código de identificação do usuário não pode ser vazio ou nulo",
        &mut resultado,
    );
    validar_obrigatorio(aluno.nome(), "Nome não pode ser vazio ou nulo", &mut resultado);
    validar_tamanho(
        aluno.nome(),
        NOME_MIN,
        NOME_MAX,
        "Nome deve ter entre 3 e 100 caracteres",
        &mut resultado,
    );
    validar_obrigatorio(aluno.email(), "Email não pode ser vazio ou nulo", &mut resultado);
    validar_tamanho(
        aluno.email(),
        EMAIL_MIN,
        EMAIL_MAX,
        "Email deve ter entre 3 e 100 caracteres",
        &mut resultado,
    );
    validar_expressao(
        aluno.email(),
        padrao_email(),
        "Email informado é inválido",
        &mut resultado,
    );
    validar_obrigatorio(aluno.cpf(), "CPF não pode ser vazio ou nulo", &mut resultado);
    validar_cpf(aluno.cpf(), "CPF deve conter 11 dígitos", &mut resultado);
    validar_data_sem_hora(
        aluno.data_nascimento(),
        "Data de nascimento deve ser válida e não pode ser superior à data atual",
        &mut resultado,
    );
    validar_tamanho_opcional(
        telefone,
        0,
        TELEFONE_MAX,
        "Telefone deve ter no máximo 25 caracteres",
        &mut resultado,
    );
    validar_tamanho(
        aluno.genero(),
        1,
        GENERO_MAX,
        "Gênero deve ter entre 1 e 20 caracteres",
        &mut resultado,
    );
    validar_tamanho(
        aluno.cidade(),
        1,
        CIDADE_MAX,
        "Cidade deve ter entre 1 e 50 caracteres",
        &mut resultado,
    );
    validar_tamanho(
        aluno.estado(),
        ESTADO_TAMANHO,
        ESTADO_TAMANHO,
        "Estado deve ter 2 caracteres",
        &mut resultado,
    );
    validar_tamanho(
        aluno.cep(),
        0,
        CEP_MAX,
        "CEP deve ter no máximo 8 caracteres",
        &mut resultado,
    );
    validar_tamanho_opcional(
        foto,
        0,
        FOTO_MAX,
        "Foto deve ter no máximo 1024 caracteres",
        &mut resultado,
    );

    resultado.raise_if_invalid()
}

/// Invariants that must hold true for a student:
///
/// 1. Auth subject id is present
/// 2. Text fields are stored trimmed, email lower-cased, CEP without punctuation
/// 3. CPF has exactly 11 digits; its formatting is kept as given
/// 4. Birth date is not in the future
/// 5. New students start inactive; only active students may enroll
/// 6. At most one enrollment per course

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aluno::tests_support::novo_aluno;
    use crate::domain::{DomainError, NovoAluno};
    use chrono::{Duration, Utc};

    #[test]
    fn test_valid_student_is_normalized() {
        let aluno = Aluno::new(NovoAluno {
            nome: "  Ana Souza ".to_string(),
            email: " X@Y.COM ".to_string(),
            cpf: "123.456.789-09".to_string(),
            cep: "80.010-000".to_string(),
            cidade: " Curitiba ".to_string(),
            foto: Some("   ".to_string()),
            ..novo_aluno()
        })
        .unwrap();

        assert_eq!(aluno.nome(), "Ana Souza");
        assert_eq!(aluno.email(), "x@y.com");
        assert_eq!(aluno.cpf(), "123.456.789-09");
        assert_eq!(aluno.cep(), "80010000");
        assert_eq!(aluno.cidade(), "Curitiba");
        assert_eq!(aluno.foto(), None);
        assert!(!aluno.ativo());
        assert!(aluno.matriculas_cursos().is_empty());
    }

    #[test]
    fn test_plain_cpf_and_uppercase_email() {
        let aluno = Aluno::new(NovoAluno {
            cpf: "12345678909".to_string(),
            email: "X@Y.COM".to_string(),
            ..novo_aluno()
        })
        .unwrap();
        assert_eq!(aluno.email(), "x@y.com");
        assert_eq!(aluno.cpf(), "12345678909");
    }

    #[test]
    fn test_constructor_reports_every_violation() {
        let err = Aluno::new(NovoAluno {
            codigo_usuario_autenticacao: " ".to_string(),
            nome: "Al".to_string(),
            email: "sem-arroba".to_string(),
            cpf: "123".to_string(),
            data_nascimento: Utc::now().date_naive() + Duration::days(1),
            genero: "".to_string(),
            cidade: "x".repeat(51),
            estado: "PRR".to_string(),
            cep: "123456789".to_string(),
            foto: None,
        })
        .unwrap_err();

        assert!(matches!(err, DomainError::InvariantViolation(_)));
        let esperadas = [
            "Código de identificação",
            "Nome deve ter",
            "Email informado é inválido",
            "CPF deve conter 11 dígitos",
            "Data de nascimento",
            "Gênero",
            "Cidade",
            "Estado deve ter 2",
            "CEP",
        ];
        for trecho in esperadas {
            assert!(err.contem(trecho), "missing message: {trecho}");
        }
        assert_eq!(err.mensagens().len(), esperadas.len());
    }

    #[test]
    fn test_today_birth_date_is_accepted() {
        let aluno = Aluno::new(NovoAluno {
            data_nascimento: Utc::now().date_naive(),
            ..novo_aluno()
        });
        assert!(aluno.is_ok());
    }

    #[test]
    fn test_long_email_rejected() {
        let err = Aluno::new(NovoAluno {
            email: format!("{}@exemplo.com", "a".repeat(100)),
            ..novo_aluno()
        })
        .unwrap_err();
        assert!(err.contem("Email deve ter entre 3 e 100"));
    }
}
