pub mod entity;
pub mod invariants;

pub use entity::Certificado;
pub use invariants::validate_certificado;
