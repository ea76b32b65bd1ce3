//! In-memory activity marker store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::activity::ports::{
    ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult,
};
use crate::board::domain::ProjectId;

/// Thread-safe in-memory marker store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityLog {
    state: Arc<RwLock<HashMap<ProjectId, DateTime<Utc>>>>,
}

impl InMemoryActivityLog {
    /// Creates an empty marker store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityLog {
    async fn record(
        &self,
        project_id: ProjectId,
        moment: DateTime<Utc>,
    ) -> ActivityRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let marker = state.entry(project_id).or_insert(moment);
        if moment > *marker {
            *marker = moment;
        }
        Ok(())
    }

    async fn last_modified(
        &self,
        project_id: ProjectId,
    ) -> ActivityRepositoryResult<Option<DateTime<Utc>>> {
        let state = self.state.read().map_err(|err| {
            ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&project_id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().expect("valid instant")
    }

    fn run<T>(future: impl std::future::Future<Output = T>) -> T {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to create test runtime")
            .block_on(future)
    }

    #[test]
    fn record_keeps_latest_instant() {
        let log = InMemoryActivityLog::new();
        let project = ProjectId::new(7).expect("valid project id");

        run(async {
            log.record(project, instant(900)).await.expect("record");
            log.record(project, instant(1100)).await.expect("record");
            let marker = log.last_modified(project).await.expect("read");
            assert_eq!(marker, Some(instant(1100)));
        });
    }

    #[test]
    fn record_ignores_older_instant() {
        let log = InMemoryActivityLog::new();
        let project = ProjectId::new(7).expect("valid project id");

        run(async {
            log.record(project, instant(1100)).await.expect("record");
            log.record(project, instant(900)).await.expect("record");
            let marker = log.last_modified(project).await.expect("read");
            assert_eq!(marker, Some(instant(1100)));
        });
    }

    #[test]
    fn unknown_project_has_no_marker() {
        let log = InMemoryActivityLog::new();
        let project = ProjectId::new(41).expect("valid project id");

        run(async {
            let marker = log.last_modified(project).await.expect("read");
            assert_eq!(marker, None);
        });
    }
}
