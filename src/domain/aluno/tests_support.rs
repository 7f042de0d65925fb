// Builders shared by domain and service tests

use chrono::NaiveDate;
use uuid::Uuid;

use super::{Aluno, NovoAluno};

pub fn novo_aluno() -> NovoAluno {
    NovoAluno {
        codigo_usuario_autenticacao: Uuid::new_v4().to_string(),
        nome: "Ana Souza".to_string(),
        email: "ana.souza@exemplo.com".to_string(),
        cpf: "12345678909".to_string(),
        data_nascimento: NaiveDate::from_ymd_opt(1995, 3, 14).unwrap(),
        genero: "Feminino".to_string(),
        cidade: "Curitiba".to_string(),
        estado: "PR".to_string(),
        cep: "80010-000".to_string(),
        foto: None,
    }
}

pub fn aluno_ativo() -> Aluno {
    let mut aluno = Aluno::new(novo_aluno()).unwrap();
    aluno.ativar_aluno();
    aluno
}
