//! Error types for board domain validation and move rejection.

use super::{ColumnId, ProjectId, SwimlaneId, TaskId};
use thiserror::Error;

/// Errors returned while constructing board domain values or applying
/// moves.
///
/// Every variant is a local, recoverable failure: a rejected move leaves
/// the grid untouched and records no activity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The project identifier is invalid.
    #[error("invalid project id {0}, expected a positive integer")]
    InvalidProjectId(u64),

    /// The task identifier is invalid.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// The column identifier is invalid.
    #[error("invalid column id {0}, expected a positive integer")]
    InvalidColumnId(u64),

    /// The swimlane identifier is invalid.
    #[error("invalid swimlane id {0}")]
    InvalidSwimlaneId(u64),

    /// The position is invalid.
    #[error("invalid position {0}, expected a one-based rank")]
    InvalidPosition(u64),

    /// The card title is empty after trimming.
    #[error("card title must not be empty")]
    EmptyCardTitle,

    /// The column title is empty after trimming.
    #[error("column title must not be empty")]
    EmptyColumnTitle,

    /// A board layout was declared without any column.
    #[error("board layout must contain at least one column")]
    EmptyLayout,

    /// The same column appears twice in a board layout.
    #[error("duplicate column in board layout: {0}")]
    DuplicateColumn(ColumnId),

    /// The same swimlane appears twice in a board layout.
    #[error("duplicate swimlane in board layout: {0}")]
    DuplicateSwimlane(SwimlaneId),

    /// The same card was placed twice on a board.
    #[error("duplicate card on board: {0}")]
    DuplicateCard(TaskId),

    /// No board exists for the referenced project.
    #[error("unknown project: {0}")]
    UnknownProject(ProjectId),

    /// The referenced task does not belong to the project's board.
    #[error("unknown task on this board: {0}")]
    UnknownTask(TaskId),

    /// The referenced column does not belong to the project's board.
    #[error("unknown column on this board: {0}")]
    UnknownColumn(ColumnId),

    /// The referenced swimlane does not belong to the project's board.
    #[error("unknown swimlane on this board: {0}")]
    UnknownSwimlane(SwimlaneId),
}
