//! Positioning service tests: orchestration, activity bumps, locking.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use mockall::mock;
use rstest::rstest;

use crate::activity::ChangeTracker;
use crate::activity::adapters::memory::InMemoryActivityLog;
use crate::activity::ports::{ActivityRepository, ActivityRepositoryResult};
use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{
        BoardDomainError, BoardGrid, BucketKey, Column, ColumnId, Position, ProjectId, Swimlane,
        SwimlaneId, TaskCard, TaskId,
    },
    ports::BoardRepository,
    services::{MoveRequest, PositioningError, PositioningService, SameSlotPolicy},
};

mock! {
    pub ActivityLog {}

    #[async_trait]
    impl ActivityRepository for ActivityLog {
        async fn record(
            &self,
            project_id: ProjectId,
            moment: DateTime<Utc>,
        ) -> ActivityRepositoryResult<()>;

        async fn last_modified(
            &self,
            project_id: ProjectId,
        ) -> ActivityRepositoryResult<Option<DateTime<Utc>>>;
    }
}

fn project() -> ProjectId {
    ProjectId::new(1).expect("valid project id")
}

fn bucket(column_id: u64, swimlane_id: u64) -> BucketKey {
    BucketKey::new(
        ColumnId::new(column_id).expect("valid column id"),
        SwimlaneId::new(swimlane_id).expect("valid swimlane id"),
    )
}

/// Seeds the repository with two columns, one lane, and tasks 1..=3 in
/// column 1.
async fn seeded_boards() -> Arc<InMemoryBoardRepository> {
    let mut grid = BoardGrid::new(
        project(),
        vec![
            Column::new(ColumnId::new(1).expect("valid column id"), "Backlog")
                .expect("valid column"),
            Column::new(ColumnId::new(2).expect("valid column id"), "Done")
                .expect("valid column"),
        ],
        vec![Swimlane::new(
            SwimlaneId::new(1).expect("valid swimlane id"),
            "Frontend",
        )],
    )
    .expect("valid layout");

    for id in 1..=3u64 {
        let card = TaskCard::new(TaskId::new(id).expect("valid task id"), format!("Task {id}"))
            .expect("valid card");
        grid.place_card(bucket(1, 1), card).expect("placed");
    }

    let boards = Arc::new(InMemoryBoardRepository::new());
    boards.save(&grid).await.expect("seeded");
    boards
}

fn service_with_mock(
    boards: Arc<InMemoryBoardRepository>,
    log: MockActivityLog,
) -> PositioningService<InMemoryBoardRepository, MockActivityLog, DefaultClock> {
    PositioningService::new(
        boards,
        ChangeTracker::new(Arc::new(log), Arc::new(DefaultClock)),
    )
}

fn request(task_id: u64, column_id: u64, rank: usize) -> MoveRequest {
    MoveRequest::new(
        project(),
        TaskId::new(task_id).expect("valid task id"),
        ColumnId::new(column_id).expect("valid column id"),
        Position::new(rank).expect("valid position"),
        SwimlaneId::new(1).expect("valid swimlane id"),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successful_move_persists_and_bumps_exactly_once() {
    let boards = seeded_boards().await;
    let mut log = MockActivityLog::new();
    log.expect_record().times(1).returning(|_, _| Ok(()));
    let service = service_with_mock(Arc::clone(&boards), log);

    let outcome = service
        .move_card(request(3, 2, 1))
        .await
        .expect("move should succeed");

    assert!(outcome.changed());
    let grid = boards
        .load(project())
        .await
        .expect("load should succeed")
        .expect("board exists");
    let moved: Vec<u64> = grid
        .cards_in(bucket(2, 1))
        .iter()
        .map(|card| card.id().value())
        .collect();
    assert_eq!(moved, [3]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_move_leaves_board_and_marker_alone() {
    let boards = seeded_boards().await;
    let before = boards
        .load(project())
        .await
        .expect("load should succeed")
        .expect("board exists");

    let mut log = MockActivityLog::new();
    log.expect_record().times(0);
    let service = service_with_mock(Arc::clone(&boards), log);

    let result = service.move_card(request(42, 2, 1)).await;
    assert!(matches!(
        result,
        Err(PositioningError::Domain(BoardDomainError::UnknownTask(_)))
    ));

    let after = boards
        .load(project())
        .await
        .expect("load should succeed")
        .expect("board exists");
    assert_eq!(after, before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_on_unknown_project_fails_without_activity() {
    let boards = Arc::new(InMemoryBoardRepository::new());
    let mut log = MockActivityLog::new();
    log.expect_record().times(0);
    let service = service_with_mock(boards, log);

    let result = service.move_card(request(1, 1, 1)).await;
    assert!(matches!(
        result,
        Err(PositioningError::Domain(BoardDomainError::UnknownProject(
            _
        )))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_slot_drop_bumps_under_the_default_policy() {
    let boards = seeded_boards().await;
    let mut log = MockActivityLog::new();
    log.expect_record().times(1).returning(|_, _| Ok(()));
    let service = service_with_mock(boards, log);

    let outcome = service
        .move_card(request(2, 1, 2))
        .await
        .expect("move should succeed");
    assert!(!outcome.changed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_slot_drop_is_silent_under_the_ignore_policy() {
    let boards = seeded_boards().await;
    let mut log = MockActivityLog::new();
    log.expect_record().times(0);
    let service =
        service_with_mock(boards, log).with_same_slot_policy(SameSlotPolicy::Ignore);

    let outcome = service
        .move_card(request(2, 1, 2))
        .await
        .expect("move should succeed");
    assert!(!outcome.changed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_moves_on_one_project_serialise_cleanly() {
    let boards = seeded_boards().await;
    let tracker = ChangeTracker::new(Arc::new(InMemoryActivityLog::new()), Arc::new(DefaultClock));
    let service = Arc::new(PositioningService::new(Arc::clone(&boards), tracker));

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.move_card(request(1, 2, 1)).await })
    };
    let second = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.move_card(request(2, 2, 1)).await })
    };

    first
        .await
        .expect("join should succeed")
        .expect("move should succeed");
    second
        .await
        .expect("join should succeed")
        .expect("move should succeed");

    let grid = boards
        .load(project())
        .await
        .expect("load should succeed")
        .expect("board exists");
    assert_eq!(grid.card_count(), 3, "moves must conserve cards");

    let destination = grid.cards_in(bucket(2, 1));
    assert_eq!(destination.len(), 2);
    let ranks: Vec<usize> = destination.iter().map(|card| card.position().get()).collect();
    assert_eq!(ranks, [1, 2]);
}

#[rstest]
fn raw_request_rejects_a_zero_task_id() {
    let result = MoveRequest::from_raw(1, 0, 1, 1, 1);
    assert_eq!(result, Err(BoardDomainError::InvalidTaskId(0)));
}

#[rstest]
fn raw_request_rejects_a_zero_position() {
    let result = MoveRequest::from_raw(1, 2, 1, 0, 1);
    assert_eq!(result, Err(BoardDomainError::InvalidPosition(0)));
}

#[rstest]
fn raw_request_rejects_an_oversized_column_id() {
    let oversized = u64::MAX;
    let result = MoveRequest::from_raw(1, 2, oversized, 1, 1);
    assert_eq!(result, Err(BoardDomainError::InvalidColumnId(oversized)));
}

#[rstest]
fn raw_request_accepts_the_default_swimlane() {
    let request = MoveRequest::from_raw(1, 2, 3, 4, 0).expect("valid request");
    assert!(request.destination().swimlane_id().is_default());
}
