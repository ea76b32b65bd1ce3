//! `PostgreSQL` adapter for the activity marker store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::activity::ports::{
    ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult,
};
use crate::board::domain::ProjectId;

diesel::table! {
    /// Per-project last-modified markers.
    project_activity (project_id) {
        /// Owning project.
        project_id -> BigInt,
        /// Instant of the last recorded board mutation.
        last_modified -> Timestamptz,
    }
}

/// `PostgreSQL` connection pool type used by activity adapters.
pub type ActivityPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed activity marker store.
#[derive(Debug, Clone)]
pub struct PostgresActivityLog {
    pool: ActivityPgPool,
}

impl PostgresActivityLog {
    /// Creates a new marker store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ActivityPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ActivityRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ActivityRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ActivityRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ActivityRepositoryError::persistence)?
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityLog {
    async fn record(
        &self,
        project_id: ProjectId,
        moment: DateTime<Utc>,
    ) -> ActivityRepositoryResult<()> {
        let db_project = db_id(project_id)?;
        self.run_blocking(move |connection| {
            // GREATEST keeps the marker monotonic under concurrent
            // touches without a read-modify-write round trip.
            diesel::sql_query(concat!(
                "INSERT INTO project_activity (project_id, last_modified) ",
                "VALUES ($1, $2) ",
                "ON CONFLICT (project_id) DO UPDATE ",
                "SET last_modified = GREATEST(project_activity.last_modified, ",
                "EXCLUDED.last_modified)",
            ))
            .bind::<diesel::sql_types::BigInt, _>(db_project)
            .bind::<diesel::sql_types::Timestamptz, _>(moment)
            .execute(connection)
            .map_err(ActivityRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn last_modified(
        &self,
        project_id: ProjectId,
    ) -> ActivityRepositoryResult<Option<DateTime<Utc>>> {
        let db_project = db_id(project_id)?;
        self.run_blocking(move |connection| {
            project_activity::table
                .find(db_project)
                .select(project_activity::last_modified)
                .first::<DateTime<Utc>>(connection)
                .optional()
                .map_err(ActivityRepositoryError::persistence)
        })
        .await
    }
}

fn db_id(project_id: ProjectId) -> ActivityRepositoryResult<i64> {
    i64::try_from(project_id.value()).map_err(ActivityRepositoryError::persistence)
}
