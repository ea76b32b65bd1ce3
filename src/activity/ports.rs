//! Repository port for per-project activity markers.

use crate::board::domain::ProjectId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity repository operations.
pub type ActivityRepositoryResult<T> = Result<T, ActivityRepositoryError>;

/// Storage contract for the per-project last-modified marker.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Records a mutation instant for the project.
    ///
    /// Implementations must keep the marker monotonic: a recorded
    /// instant older than the stored one leaves the marker unchanged,
    /// so concurrent touches collapse to the latest value.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::Persistence`] when durable
    /// storage rejects the write.
    async fn record(
        &self,
        project_id: ProjectId,
        moment: DateTime<Utc>,
    ) -> ActivityRepositoryResult<()>;

    /// Returns the project's last recorded mutation instant.
    ///
    /// Returns `None` when no activity has ever been recorded.
    async fn last_modified(
        &self,
        project_id: ProjectId,
    ) -> ActivityRepositoryResult<Option<DateTime<Utc>>>;
}

/// Errors returned by activity repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
