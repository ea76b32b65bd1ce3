//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

use mondrian::activity::ChangeTracker;
use mondrian::activity::adapters::memory::InMemoryActivityLog;
use mondrian::board::adapters::memory::InMemoryBoardRepository;
use mondrian::board::domain::{MoveOutcome, ProjectId};
use mondrian::board::services::{PositioningResult, PositioningService};

/// Instant every scenario's drop lands on.
pub const DROP_INSTANT_SECS: i64 = 1100;

/// Clock pinned to one instant, so activity assertions are exact.
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    #[must_use]
    pub fn at(secs: i64) -> Self {
        Self(Utc.timestamp_opt(secs, 0).single().expect("valid instant"))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Service type used by the BDD world.
pub type TestPositioningService =
    PositioningService<InMemoryBoardRepository, InMemoryActivityLog, FixedClock>;

/// Scenario world for drag-and-drop behaviour tests.
pub struct BoardMoveWorld {
    pub boards: Arc<InMemoryBoardRepository>,
    pub activity: Arc<InMemoryActivityLog>,
    pub service: TestPositioningService,
    pub project_id: ProjectId,
    pub last_move: Option<PositioningResult<MoveOutcome>>,
}

impl BoardMoveWorld {
    /// Creates a world with empty board storage.
    #[must_use]
    pub fn new() -> Self {
        let boards = Arc::new(InMemoryBoardRepository::new());
        let activity = Arc::new(InMemoryActivityLog::new());
        let service = PositioningService::new(
            Arc::clone(&boards),
            ChangeTracker::new(
                Arc::clone(&activity),
                Arc::new(FixedClock::at(DROP_INSTANT_SECS)),
            ),
        );

        Self {
            boards,
            activity,
            service,
            project_id: ProjectId::new(7).expect("valid project id"),
            last_move: None,
        }
    }
}

impl Default for BoardMoveWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardMoveWorld {
    BoardMoveWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
