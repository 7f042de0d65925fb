pub mod entity;
pub mod invariants;

pub use entity::HistoricoAprendizado;
pub use invariants::validate_historico_aprendizado;
