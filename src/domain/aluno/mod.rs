pub mod entity;
pub mod invariants;

#[cfg(test)]
pub(crate) mod tests_support;

pub use entity::{Aluno, NovoAluno};
pub use invariants::validate_aluno;
