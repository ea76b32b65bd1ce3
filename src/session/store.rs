//! Keyed preference storage: the port and its in-memory adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;

use super::preferences::{BoardPreferences, PreferenceKey};

/// Result type for preference store operations.
pub type PreferenceStoreResult<T> = Result<T, PreferenceStoreError>;

/// Storage contract for per-viewer board preferences.
///
/// This replaces ambient per-session globals: the keyed store is owned
/// by the hosting application and handed to callers explicitly.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Loads the preferences stored under the key.
    ///
    /// Returns `None` when the viewer has never saved preferences for
    /// the project.
    async fn load(&self, key: PreferenceKey) -> PreferenceStoreResult<Option<BoardPreferences>>;

    /// Stores the preferences under the key, replacing any previous
    /// value.
    async fn save(
        &self,
        key: PreferenceKey,
        preferences: &BoardPreferences,
    ) -> PreferenceStoreResult<()>;
}

/// Errors returned by preference store implementations.
#[derive(Debug, Clone, Error)]
pub enum PreferenceStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PreferenceStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Thread-safe in-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    state: Arc<RwLock<HashMap<PreferenceKey, BoardPreferences>>>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty preference store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn load(&self, key: PreferenceKey) -> PreferenceStoreResult<Option<BoardPreferences>> {
        let state = self.state.read().map_err(|err| {
            PreferenceStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&key).cloned())
    }

    async fn save(
        &self,
        key: PreferenceKey,
        preferences: &BoardPreferences,
    ) -> PreferenceStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PreferenceStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert(key, preferences.clone());
        Ok(())
    }
}
