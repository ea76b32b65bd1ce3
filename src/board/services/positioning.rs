//! Service layer for drag-and-drop card repositioning.

use crate::activity::ChangeTracker;
use crate::activity::ports::{ActivityRepository, ActivityRepositoryError};
use crate::board::{
    domain::{
        BoardDomainError, BucketKey, ColumnId, MoveOutcome, Position, ProjectId, SwimlaneId,
        TaskId,
    },
    ports::{BoardRepository, BoardRepositoryError},
    services::locks::ProjectLockRegistry,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Validated move request, built at the transport boundary.
///
/// Raw drag-and-drop payloads arrive as loosely typed integers; they
/// are rejected here before any board state is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    project_id: ProjectId,
    task_id: TaskId,
    column_id: ColumnId,
    position: Position,
    swimlane_id: SwimlaneId,
}

impl MoveRequest {
    /// Creates a request from already-validated identifiers.
    #[must_use]
    pub const fn new(
        project_id: ProjectId,
        task_id: TaskId,
        column_id: ColumnId,
        position: Position,
        swimlane_id: SwimlaneId,
    ) -> Self {
        Self {
            project_id,
            task_id,
            column_id,
            position,
            swimlane_id,
        }
    }

    /// Validates a raw drag-and-drop payload.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardDomainError`] validation failure: a zero
    /// or out-of-range identifier, or a zero position.
    pub fn from_raw(
        project_id: u64,
        task_id: u64,
        column_id: u64,
        position: u64,
        swimlane_id: u64,
    ) -> Result<Self, BoardDomainError> {
        let rank = usize::try_from(position)
            .map_err(|_| BoardDomainError::InvalidPosition(position))
            .and_then(Position::new)?;
        Ok(Self {
            project_id: ProjectId::new(project_id)?,
            task_id: TaskId::new(task_id)?,
            column_id: ColumnId::new(column_id)?,
            position: rank,
            swimlane_id: SwimlaneId::new(swimlane_id)?,
        })
    }

    /// Returns the project whose board is being mutated.
    #[must_use]
    pub const fn project_id(self) -> ProjectId {
        self.project_id
    }

    /// Returns the card being moved.
    #[must_use]
    pub const fn task_id(self) -> TaskId {
        self.task_id
    }

    /// Returns the destination bucket.
    #[must_use]
    pub const fn destination(self) -> BucketKey {
        BucketKey::new(self.column_id, self.swimlane_id)
    }

    /// Returns the requested destination rank.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }
}

/// Whether a drop onto the card's current slot refreshes the activity
/// marker.
///
/// The reference behaviour treats any confirmed drop as activity, which
/// makes other pollers re-render a visually identical board; `Ignore`
/// spares them at the cost of diverging from that behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SameSlotPolicy {
    /// A same-slot drop still counts as board activity.
    #[default]
    Touch,
    /// A same-slot drop leaves the activity marker alone.
    Ignore,
}

/// Service-level errors for card repositioning.
#[derive(Debug, Error)]
pub enum PositioningError {
    /// Request validation or move rejection.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Board storage failure.
    #[error(transparent)]
    Board(#[from] BoardRepositoryError),
    /// Activity marker storage failure.
    #[error(transparent)]
    Activity(#[from] ActivityRepositoryError),
}

/// Result type for positioning service operations.
pub type PositioningResult<T> = Result<T, PositioningError>;

/// Orchestrates the atomic move: load, reposition, persist, touch.
///
/// Moves on one project are serialised through a per-project lock so
/// the remove-then-insert renumbering and the marker bump form one
/// atomic unit; moves on different projects run concurrently.
pub struct PositioningService<B, A, C>
where
    B: BoardRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    boards: Arc<B>,
    tracker: ChangeTracker<A, C>,
    policy: SameSlotPolicy,
    locks: ProjectLockRegistry,
}

impl<B, A, C> PositioningService<B, A, C>
where
    B: BoardRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a positioning service with the default same-slot policy.
    #[must_use]
    pub fn new(boards: Arc<B>, tracker: ChangeTracker<A, C>) -> Self {
        Self {
            boards,
            tracker,
            policy: SameSlotPolicy::default(),
            locks: ProjectLockRegistry::new(),
        }
    }

    /// Overrides how same-slot drops affect the activity marker.
    #[must_use]
    pub fn with_same_slot_policy(mut self, policy: SameSlotPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Moves a card to the requested column, swimlane, and rank.
    ///
    /// The requested rank is clamped to the destination bucket, so a
    /// rank past the end appends. A successful move persists the new
    /// placement and bumps the project's activity marker exactly once;
    /// a failed move changes nothing and bumps nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PositioningError::Domain`] when the project has no
    /// board or the referenced task, column, or swimlane is not part of
    /// it, and a storage error when persistence fails.
    pub async fn move_card(&self, request: MoveRequest) -> PositioningResult<MoveOutcome> {
        let _guard = self.locks.acquire(request.project_id()).await;

        let mut grid = self
            .boards
            .load(request.project_id())
            .await?
            .ok_or(BoardDomainError::UnknownProject(request.project_id()))?;

        let outcome =
            grid.move_card(request.task_id(), request.destination(), request.position())?;

        if outcome.changed() {
            self.boards.save(&grid).await?;
        }
        if outcome.changed() || self.policy == SameSlotPolicy::Touch {
            self.tracker.touch(request.project_id()).await?;
        }
        Ok(outcome)
    }
}
