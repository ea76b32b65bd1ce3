//! Change tracker: the poll-based change-detection protocol.

use crate::activity::ports::{ActivityRepository, ActivityRepositoryResult};
use crate::board::domain::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Coarse per-project activity signal backing the polling protocol.
///
/// Every board mutation calls [`ChangeTracker::touch`]; pollers call
/// [`ChangeTracker::is_modified_since`] with the marker they last saw
/// and skip re-rendering when nothing moved. The marker is an activity
/// signal, not a causal log: concurrent touches collapse to the latest
/// instant.
pub struct ChangeTracker<R, C>
where
    R: ActivityRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ChangeTracker<R, C>
where
    R: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new change tracker.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Records "now" as the project's last-modified marker.
    ///
    /// Returns the recorded instant so callers can hand it straight
    /// back to a freshly rendered view.
    ///
    /// # Errors
    ///
    /// Returns [`crate::activity::ports::ActivityRepositoryError`] when
    /// the marker store rejects the write.
    pub async fn touch(&self, project_id: ProjectId) -> ActivityRepositoryResult<DateTime<Utc>> {
        let now = self.clock.utc();
        self.repository.record(project_id, now).await?;
        Ok(now)
    }

    /// Answers whether the project changed after the given instant.
    ///
    /// A poller that supplies no timestamp is always considered stale
    /// and should fetch a fresh view.
    ///
    /// # Errors
    ///
    /// Returns [`crate::activity::ports::ActivityRepositoryError`] when
    /// the marker store cannot be read.
    pub async fn is_modified_since(
        &self,
        project_id: ProjectId,
        since: Option<DateTime<Utc>>,
    ) -> ActivityRepositoryResult<bool> {
        let Some(threshold) = since else {
            return Ok(true);
        };
        let marker = self.repository.last_modified(project_id).await?;
        Ok(marker.is_some_and(|moment| moment > threshold))
    }
}

impl<R, C> Clone for ChangeTracker<R, C>
where
    R: ActivityRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}
