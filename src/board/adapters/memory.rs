//! In-memory board repository for tests and single-process hosting.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{BoardGrid, ProjectId},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
///
/// Grids are stored whole, so `load` clones a consistent point-in-time
/// snapshot and `save` replaces the project's placements atomically
/// under the write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<HashMap<ProjectId, BoardGrid>>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn load(&self, project_id: ProjectId) -> BoardRepositoryResult<Option<BoardGrid>> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&project_id).cloned())
    }

    async fn save(&self, grid: &BoardGrid) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert(grid.project_id(), grid.clone());
        Ok(())
    }
}
