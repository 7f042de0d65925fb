use super::entity::HistoricoAprendizado;
use crate::domain::validacao::regras::*;
use crate::domain::validacao::ResultadoValidacao;
use crate::domain::DomainResult;

pub const NOME_AULA_MIN: usize = 5;
pub const NOME_AULA_MAX: usize = 100;
pub const CARGA_HORARIA_MIN: i32 = 1;
pub const CARGA_HORARIA_MAX: i32 = 200;

/// Validates all HistoricoAprendizado invariants in one pass
pub fn validate_historico_aprendizado(historico: &HistoricoAprendizado) -> DomainResult<()> {
    let mut resultado = ResultadoValidacao::new();

    validar_id(
        historico.matricula_curso_id(),
        "Identificação da matrícula não pode ser vazia",
        &mut resultado,
    );
    validar_id(
        historico.curso_id(),
        "Identificação do curso não pode ser vazia",
        &mut resultado,
    );
    validar_id(
        historico.aula_id(),
        "Identificação da aula não pode ser vazia",
        &mut resultado,
    );
    validar_obrigatorio(
        historico.nome_aula(),
        "Nome da aula não pode ser vazio ou nulo",
        &mut resultado,
    );
    validar_tamanho(
        historico.nome_aula(),
        NOME_AULA_MIN,
        NOME_AULA_MAX,
        "Nome da aula deve ter entre 5 e 100 caracteres",
        &mut resultado,
    );
    validar_intervalo(
        historico.carga_horaria(),
        CARGA_HORARIA_MIN,
        CARGA_HORARIA_MAX,
        "Carga horária deve estar entre 1 e 200 horas",
        &mut resultado,
    );
    validar_data_valida(
        historico.data_inicio(),
        "Data de início deve ser válida",
        &mut resultado,
    );
    validar_data_nao_futura(
        historico.data_inicio(),
        "Data de início não pode ser superior à data atual",
        &mut resultado,
    );

    if let Some(termino) = historico.data_termino() {
        validar_data_minima(
            termino,
            historico.data_inicio(),
            "Data de término deve ser igual ou superior à data de início",
            &mut resultado,
        );
        validar_data_nao_futura(
            termino,
            "Data de término não pode ser superior à data atual",
            &mut resultado,
        );
    }

    resultado.raise_if_invalid()
}

/// Invariants that must hold true for a learning-history entry:
///
/// 1. Belongs to exactly one enrollment, course and lesson (non-nil ids)
/// 2. Lesson name is 5-100 chars after trimming
/// 3. Workload is 1-200 hours
/// 4. Start is a real instant, never in the future
/// 5. Termination, when present, is between start and now
/// 6. Fields never change after construction
