// tests/matricula_fluxo.rs
//
// End-to-end enrollment scenarios through the public API.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use plataforma_alunos::{Aluno, DomainError, EstadoMatricula, NovoAluno};

fn dados(email: &str) -> NovoAluno {
    NovoAluno {
        codigo_usuario_autenticacao: Uuid::new_v4().to_string(),
        nome: "  Carlos Lima  ".to_string(),
        email: email.to_string(),
        cpf: "12345678909".to_string(),
        data_nascimento: NaiveDate::from_ymd_opt(1990, 7, 1).unwrap(),
        genero: "Masculino".to_string(),
        cidade: "Recife".to_string(),
        estado: "PE".to_string(),
        cep: "50030-230".to_string(),
        foto: None,
    }
}

fn aluno_matriculado() -> (Aluno, Uuid) {
    let mut aluno = Aluno::new(dados("carlos@exemplo.com")).unwrap();
    aluno.ativar_aluno();
    let matricula_id = aluno
        .matricular_aluno_em_curso(
            Uuid::new_v4(),
            "Arquitetura de Software".to_string(),
            199.9,
            None,
        )
        .unwrap()
        .id();
    (aluno, matricula_id)
}

#[test]
fn email_is_normalized_on_creation() {
    let aluno = Aluno::new(dados("X@Y.COM")).unwrap();

    assert_eq!(aluno.email(), "x@y.com");
    assert_eq!(aluno.cpf(), "12345678909");
    assert_eq!(aluno.nome(), "Carlos Lima");
    assert!(!aluno.ativo());
}

#[test]
fn enrollment_runs_until_certificate() {
    let (mut aluno, matricula_id) = aluno_matriculado();
    let estado = |a: &Aluno| a.obter_matricula_curso_pelo_id(matricula_id).unwrap().estado_matricula();

    assert_eq!(estado(&aluno), EstadoMatricula::PendentePagamento);

    aluno.atualizar_pagamento_matricula(matricula_id).unwrap();
    assert_eq!(estado(&aluno), EstadoMatricula::PagamentoRealizado);

    aluno
        .registrar_historico_aprendizado(
            matricula_id,
            Uuid::new_v4(),
            "Camadas e portas".to_string(),
            12,
            Some(Utc::now()),
        )
        .unwrap();

    aluno.concluir_curso(matricula_id).unwrap();
    let matricula = aluno.obter_matricula_curso_pelo_id(matricula_id).unwrap();
    assert_eq!(matricula.estado_matricula(), EstadoMatricula::Concluido);
    assert!(matricula.data_conclusao().is_some());

    let certificado = aluno
        .requisitar_certificado_conclusao(
            matricula_id,
            9,
            "path.pdf".to_string(),
            "Bob".to_string(),
        )
        .unwrap();
    assert_eq!(certificado.carga_horaria(), 12);
    assert_eq!(certificado.nome_instrutor(), "Bob");
    assert_eq!(certificado.nota_final(), 9);
}

#[test]
fn open_lesson_blocks_completion() {
    let (mut aluno, matricula_id) = aluno_matriculado();
    aluno.atualizar_pagamento_matricula(matricula_id).unwrap();

    aluno
        .registrar_historico_aprendizado(
            matricula_id,
            Uuid::new_v4(),
            "Camadas e portas".to_string(),
            12,
            Some(Utc::now()),
        )
        .unwrap();
    aluno
        .registrar_historico_aprendizado(
            matricula_id,
            Uuid::new_v4(),
            "Eventos de domínio".to_string(),
            6,
            None,
        )
        .unwrap();

    let antes = aluno.clone();
    let err = aluno.concluir_curso(matricula_id).unwrap_err();

    assert!(matches!(err, DomainError::InvalidStateTransition(_)));
    assert!(err.contem("existem aulas não finalizadas"));
    assert_eq!(aluno, antes);
    assert_eq!(aluno.obter_quantidade_aulas_em_andamento(matricula_id), 1);
}
