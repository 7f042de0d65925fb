// src/repositories/aluno_repository.rs
//
// Aluno persistence boundary.
//
// The real store (schema, migrations, concurrency tokens) lives outside this
// crate. The in-memory implementation keeps serialized snapshots so every
// load hands out a fresh aggregate, exactly like a database round trip.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use crate::domain::Aluno;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait AlunoRepository: Send + Sync {
    /// Insert or replace the whole aggregate
    fn save(&self, aluno: &Aluno) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Aluno>>;
    fn get_by_codigo_usuario(&self, codigo_usuario_autenticacao: &str) -> AppResult<Option<Aluno>>;
    fn exists(&self, id: Uuid) -> AppResult<bool>;
}

#[derive(Default)]
pub struct InMemoryAlunoRepository {
    /// aluno id -> JSON snapshot
    snapshots: RwLock<HashMap<Uuid, String>>,
}

impl InMemoryAlunoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AlunoRepository for InMemoryAlunoRepository {
    fn save(&self, aluno: &Aluno) -> AppResult<()> {
        let snapshot = serde_json::to_string(aluno)?;
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(aluno.id(), snapshot);
        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Aluno>> {
        let snapshots = self.snapshots.read().unwrap_or_else(PoisonError::into_inner);
        snapshots
            .get(&id)
            .map(|snapshot| serde_json::from_str(snapshot))
            .transpose()
            .map_err(Into::into)
    }

    fn get_by_codigo_usuario(&self, codigo_usuario_autenticacao: &str) -> AppResult<Option<Aluno>> {
        let snapshots = self.snapshots.read().unwrap_or_else(PoisonError::into_inner);
        for snapshot in snapshots.values() {
            let aluno: Aluno = serde_json::from_str(snapshot)?;
            if aluno.codigo_usuario_autenticacao() == codigo_usuario_autenticacao {
                return Ok(Some(aluno));
            }
        }
        Ok(None)
    }

    fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self
            .snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id))
    }
}
