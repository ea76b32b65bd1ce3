//! Identifier and rank newtypes for the board domain.
//!
//! The surrounding task-management system keys projects, tasks, columns,
//! and swimlanes by integral database ids, so each identifier is a
//! validated positive integer bounded by the `PostgreSQL` `BIGINT` range.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest identifier representable in the current `PostgreSQL` schema.
const MAX_PERSISTED_ID: u64 = i64::MAX as u64;

/// Unique identifier for a project owning one board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    /// Creates a validated project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidProjectId`] when the value is
    /// zero or exceeds the schema-backed maximum (`i64::MAX`).
    pub const fn new(value: u64) -> Result<Self, BoardDomainError> {
        if value == 0 || value > MAX_PERSISTED_ID {
            return Err(BoardDomainError::InvalidProjectId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a task card on a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTaskId`] when the value is zero
    /// or exceeds the schema-backed maximum (`i64::MAX`).
    pub const fn new(value: u64) -> Result<Self, BoardDomainError> {
        if value == 0 || value > MAX_PERSISTED_ID {
            return Err(BoardDomainError::InvalidTaskId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a board column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ColumnId(u64);

impl ColumnId {
    /// Creates a validated column identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidColumnId`] when the value is
    /// zero or exceeds the schema-backed maximum (`i64::MAX`).
    pub const fn new(value: u64) -> Result<Self, BoardDomainError> {
        if value == 0 || value > MAX_PERSISTED_ID {
            return Err(BoardDomainError::InvalidColumnId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a board swimlane.
///
/// Zero is a valid value and names the default lane every board carries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SwimlaneId(u64);

impl SwimlaneId {
    /// Identifier of the default lane present on every board.
    pub const DEFAULT: Self = Self(0);

    /// Creates a validated swimlane identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidSwimlaneId`] when the value
    /// exceeds the schema-backed maximum (`i64::MAX`).
    pub const fn new(value: u64) -> Result<Self, BoardDomainError> {
        if value > MAX_PERSISTED_ID {
            return Err(BoardDomainError::InvalidSwimlaneId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns whether this identifier names the default lane.
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SwimlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One-based rank of a card within its bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Position(usize);

impl Position {
    /// The first rank in any bucket.
    pub const FIRST: Self = Self(1);

    /// Creates a validated one-based position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidPosition`] when the value is
    /// zero.
    pub const fn new(value: usize) -> Result<Self, BoardDomainError> {
        if value == 0 {
            return Err(BoardDomainError::InvalidPosition(value as u64));
        }
        Ok(Self(value))
    }

    /// Converts a zero-based bucket index into a position.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the one-based rank.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the zero-based bucket index for this position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.saturating_sub(1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
