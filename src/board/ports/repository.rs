//! Repository port for board grid persistence.

use crate::board::domain::{BoardGrid, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract.
///
/// Implementations must hand out consistent snapshots: a grid returned
/// by [`BoardRepository::load`] reflects one instant of the board, never
/// a bucket observed mid-renumber. Serialising moves per project is the
/// caller's job (the positioning service); the repository only has to
/// make each `load`/`save` individually atomic.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Loads the full grid for one project.
    ///
    /// Returns `None` when the project has no board.
    async fn load(&self, project_id: ProjectId) -> BoardRepositoryResult<Option<BoardGrid>>;

    /// Persists every card placement of the grid.
    ///
    /// Creates the board when none exists yet, otherwise replaces the
    /// stored placements as one atomic unit.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when durable
    /// storage rejects the write.
    async fn save(&self, grid: &BoardGrid) -> BoardRepositoryResult<()>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// Stored board data could not be mapped back into a valid grid.
    #[error("stored board state is corrupt: {0}")]
    Corrupt(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
