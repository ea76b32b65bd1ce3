//! Per-viewer board preference types.

use crate::board::domain::ProjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors returned while constructing session domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// The viewer identifier is invalid.
    #[error("invalid viewer id {0}, expected a positive integer")]
    InvalidViewerId(u64),
}

/// Unique identifier for a board viewer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ViewerId(u64);

impl ViewerId {
    /// Creates a validated viewer identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::InvalidViewerId`] when the value is
    /// zero or exceeds the schema-backed maximum (`i64::MAX`).
    pub const fn new(value: u64) -> Result<Self, SessionDomainError> {
        if value == 0 || value > i64::MAX as u64 {
            return Err(SessionDomainError::InvalidViewerId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a viewer wants the board's cards drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Cards show their full detail.
    #[default]
    Expanded,
    /// Cards collapse to a single line.
    Collapsed,
}

/// One viewer's preferences for one project's board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPreferences {
    filter_query: String,
    display_mode: DisplayMode,
}

impl BoardPreferences {
    /// Creates preferences with the empty filter and expanded cards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored filter query.
    #[must_use]
    pub fn with_filter_query(mut self, filter_query: impl Into<String>) -> Self {
        self.filter_query = filter_query.into();
        self
    }

    /// Replaces the stored display mode.
    #[must_use]
    #[expect(
        clippy::missing_const_for_fn,
        reason = "field assignment through a Drop-carrying struct is not const-stable"
    )]
    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    /// Returns the stored filter query.
    #[must_use]
    pub fn filter_query(&self) -> &str {
        &self.filter_query
    }

    /// Returns the stored display mode.
    #[must_use]
    pub const fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }
}

/// Address of one viewer's preferences for one project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PreferenceKey {
    /// The project whose board is being viewed.
    pub project_id: ProjectId,
    /// The viewer the preferences belong to.
    pub viewer_id: ViewerId,
}

impl PreferenceKey {
    /// Creates a preference address.
    #[must_use]
    pub const fn new(project_id: ProjectId, viewer_id: ViewerId) -> Self {
        Self {
            project_id,
            viewer_id,
        }
    }
}
