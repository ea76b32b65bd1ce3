//! Per-project mutual exclusion for board mutations.

use crate::board::domain::ProjectId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry handing out one async mutex per project.
///
/// Moves on the same project serialise behind the project's mutex;
/// moves on different projects proceed independently. Lock entries are
/// created on first use and live for the registry's lifetime, which is
/// bounded by the number of distinct projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectLockRegistry {
    locks: Arc<Mutex<HashMap<ProjectId, Arc<AsyncMutex<()>>>>>,
}

impl ProjectLockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the mutation lock for one project.
    ///
    /// The returned guard must be held across the whole
    /// load-mutate-save-touch sequence.
    pub async fn acquire(&self, project_id: ProjectId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self
                .locks
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(project_id).or_default())
        };
        lock.lock_owned().await
    }
}
