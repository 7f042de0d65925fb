use super::entity::Certificado;
use crate::domain::validacao::regras::*;
use crate::domain::validacao::ResultadoValidacao;
use crate::domain::DomainResult;

pub const NOME_CURSO_MAX: usize = 200;
pub const CARGA_HORARIA_MIN: i16 = 1;
pub const CARGA_HORARIA_MAX: i16 = 10_000;
pub const NOTA_FINAL_MAX: u8 = 10;
pub const PATH_CERTIFICADO_MAX: usize = 1024;
pub const NOME_INSTRUTOR_MAX: usize = 100;

/// Validates all Certificado invariants in one pass
pub fn validate_certificado(certificado: &Certificado) -> DomainResult<()> {
    let mut resultado = ResultadoValidacao::new();

    validar_id(
        certificado.matricula_curso_id(),
        "Identificação da matrícula não pode ser vazia",
        &mut resultado,
    );
    validar_obrigatorio(
        certificado.nome_curso(),
        "Nome do curso não pode ser vazio ou nulo",
        &mut resultado,
    );
    validar_tamanho(
        certificado.nome_curso(),
        1,
        NOME_CURSO_MAX,
        "Nome do curso deve ter entre 1 e 200 caracteres",
        &mut resultado,
    );
    validar_data_valida(
        certificado.data_solicitacao(),
        "Data de solicitação deve ser válida",
        &mut resultado,
    );
    validar_data_nao_futura(
        certificado.data_solicitacao(),
        "Data de solicitação não pode ser superior à data atual",
        &mut resultado,
    );
    if let Some(emissao) = certificado.data_emissao() {
        validar_data_valida(emissao, "Data de emissão deve ser válida", &mut resultado);
        validar_data_nao_futura(
            emissao,
            "Data de emissão não pode ser superior à data atual",
            &mut resultado,
        );
    }
    validar_intervalo(
        certificado.carga_horaria(),
        CARGA_HORARIA_MIN,
        CARGA_HORARIA_MAX,
        "Carga horária deve estar entre 1 e 10000 horas",
        &mut resultado,
    );
    validar_intervalo(
        certificado.nota_final(),
        0,
        NOTA_FINAL_MAX,
        "Nota final deve estar entre 0 e 10",
        &mut resultado,
    );
    validar_obrigatorio(
        certificado.path_certificado(),
        "Path do certificado não pode ser vazio ou nulo",
        &mut resultado,
    );
    validar_tamanho(
        certificado.path_certificado(),
        1,
        PATH_CERTIFICADO_MAX,
        "Path do certificado deve ter entre 1 e 1024 caracteres",
        &mut resultado,
    );
    validar_tamanho(
        certificado.nome_instrutor(),
        1,
        NOME_INSTRUTOR_MAX,
        "Nome do instrutor deve ter entre 1 e 100 caracteres",
        &mut resultado,
    );

    resultado.raise_if_invalid()
}
