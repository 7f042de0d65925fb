// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod aluno_service;


pub use aluno_service::{
    AlunoService,
    AlunoServiceConfig,
    MatricularAlunoRequest,
    RegistrarHistoricoRequest,
    RequisitarCertificadoRequest,
};
