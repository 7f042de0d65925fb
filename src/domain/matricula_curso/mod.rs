pub mod entity;
pub mod invariants;

pub use entity::{EstadoMatricula, MatriculaCurso};
pub use invariants::validate_matricula_curso;
