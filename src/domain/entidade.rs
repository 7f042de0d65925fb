// src/domain/entidade.rs
//
// Identity + audit timestamps shared by every entity.
// Embedded by value; entities never inherit from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entidade {
    /// Internal immutable identifier
    id: Uuid,

    /// Creation timestamp
    criado_em: DateTime<Utc>,

    /// Last update timestamp
    atualizado_em: DateTime<Utc>,
}

impl Entidade {
    /// Fresh identity, both timestamps set to now
    pub fn nova() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            criado_em: now,
            atualizado_em: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn criado_em(&self) -> DateTime<Utc> {
        self.criado_em
    }

    pub fn atualizado_em(&self) -> DateTime<Utc> {
        self.atualizado_em
    }

    /// Record a successful mutation
    pub(crate) fn tocar(&mut self) {
        self.atualizado_em = Utc::now();
    }
}

impl Default for Entidade {
    fn default() -> Self {
        Self::nova()
    }
}
