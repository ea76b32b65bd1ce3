//! Columns and swimlanes: the two axes of a board grid.

use super::{BoardDomainError, ColumnId, SwimlaneId};
use serde::{Deserialize, Serialize};

/// A vertical column of the board.
///
/// Ordinal placement is implied by the column's position in the grid
/// layout, not stored on the column itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
}

impl Column {
    /// Creates a column with a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnTitle`] when the title is
    /// empty after trimming.
    pub fn new(id: ColumnId, title: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = title.into();
        if raw.trim().is_empty() {
            return Err(BoardDomainError::EmptyColumnTitle);
        }
        Ok(Self { id, title: raw })
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A horizontal swimlane of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swimlane {
    id: SwimlaneId,
    name: String,
}

impl Swimlane {
    /// Name used for the implicit lane every board carries.
    const DEFAULT_NAME: &'static str = "Default swimlane";

    /// Creates a named swimlane.
    ///
    /// An empty name falls back to the default lane name rather than
    /// being rejected; lanes are display furniture, not identity.
    #[must_use]
    pub fn new(id: SwimlaneId, name: impl Into<String>) -> Self {
        let raw = name.into();
        let resolved = if raw.trim().is_empty() {
            Self::DEFAULT_NAME.to_owned()
        } else {
            raw
        };
        Self { id, name: resolved }
    }

    /// Creates the default lane present on boards without explicit lanes.
    #[must_use]
    pub fn default_lane() -> Self {
        Self {
            id: SwimlaneId::DEFAULT,
            name: Self::DEFAULT_NAME.to_owned(),
        }
    }

    /// Returns the swimlane identifier.
    #[must_use]
    pub const fn id(&self) -> SwimlaneId {
        self.id
    }

    /// Returns the swimlane name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
