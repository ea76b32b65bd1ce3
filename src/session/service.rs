//! Service layer for reading and updating viewer preferences.

use super::preferences::{BoardPreferences, DisplayMode, PreferenceKey};
use super::store::{PreferenceStore, PreferenceStoreResult};
use std::sync::Arc;

/// Orchestrates viewer preference reads and updates.
///
/// Missing entries resolve to the defaults (empty filter, expanded
/// cards) rather than errors, so a first-time viewer needs no setup.
pub struct PreferenceService<S>
where
    S: PreferenceStore,
{
    store: Arc<S>,
}

impl<S> PreferenceService<S>
where
    S: PreferenceStore,
{
    /// Creates a preference service over a keyed store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the viewer's preferences, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`super::store::PreferenceStoreError`] when the store
    /// cannot be read.
    pub async fn preferences_for(
        &self,
        key: PreferenceKey,
    ) -> PreferenceStoreResult<BoardPreferences> {
        Ok(self.store.load(key).await?.unwrap_or_default())
    }

    /// Returns the viewer's stored filter query, or the empty query.
    ///
    /// # Errors
    ///
    /// Returns [`super::store::PreferenceStoreError`] when the store
    /// cannot be read.
    pub async fn filter_for(&self, key: PreferenceKey) -> PreferenceStoreResult<String> {
        let preferences = self.preferences_for(key).await?;
        Ok(preferences.filter_query().to_owned())
    }

    /// Stores a new filter query, keeping the display mode.
    ///
    /// # Errors
    ///
    /// Returns [`super::store::PreferenceStoreError`] when the store
    /// rejects the write.
    pub async fn set_filter(
        &self,
        key: PreferenceKey,
        filter_query: impl Into<String> + Send,
    ) -> PreferenceStoreResult<()> {
        let updated = self
            .preferences_for(key)
            .await?
            .with_filter_query(filter_query);
        self.store.save(key, &updated).await
    }

    /// Stores a new display mode, keeping the filter query.
    ///
    /// # Errors
    ///
    /// Returns [`super::store::PreferenceStoreError`] when the store
    /// rejects the write.
    pub async fn set_display_mode(
        &self,
        key: PreferenceKey,
        display_mode: DisplayMode,
    ) -> PreferenceStoreResult<()> {
        let updated = self
            .preferences_for(key)
            .await?
            .with_display_mode(display_mode);
        self.store.save(key, &updated).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::domain::ProjectId;
    use crate::session::preferences::ViewerId;
    use crate::session::store::InMemoryPreferenceStore;

    fn key() -> PreferenceKey {
        PreferenceKey::new(
            ProjectId::new(3).expect("valid project id"),
            ViewerId::new(12).expect("valid viewer id"),
        )
    }

    fn run<T>(future: impl std::future::Future<Output = T>) -> T {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to create test runtime")
            .block_on(future)
    }

    #[test]
    fn first_time_viewer_gets_defaults() {
        let service = PreferenceService::new(Arc::new(InMemoryPreferenceStore::new()));

        run(async {
            let filter = service.filter_for(key()).await.expect("read filter");
            assert_eq!(filter, "");

            let preferences = service.preferences_for(key()).await.expect("read prefs");
            assert_eq!(preferences.display_mode(), DisplayMode::Expanded);
        });
    }

    #[test]
    fn set_filter_keeps_display_mode() {
        let service = PreferenceService::new(Arc::new(InMemoryPreferenceStore::new()));

        run(async {
            service
                .set_display_mode(key(), DisplayMode::Collapsed)
                .await
                .expect("store mode");
            service
                .set_filter(key(), "assignee:nadia")
                .await
                .expect("store filter");

            let preferences = service.preferences_for(key()).await.expect("read prefs");
            assert_eq!(preferences.filter_query(), "assignee:nadia");
            assert_eq!(preferences.display_mode(), DisplayMode::Collapsed);
        });
    }

    #[test]
    fn preferences_are_scoped_per_project_and_viewer() {
        let service = PreferenceService::new(Arc::new(InMemoryPreferenceStore::new()));
        let other = PreferenceKey::new(
            ProjectId::new(4).expect("valid project id"),
            ViewerId::new(12).expect("valid viewer id"),
        );

        run(async {
            service
                .set_filter(key(), "color:amber")
                .await
                .expect("store filter");

            let untouched = service.filter_for(other).await.expect("read filter");
            assert_eq!(untouched, "");
        });
    }
}
