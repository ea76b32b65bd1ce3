//! Service layer composing read-only board snapshots.

use crate::board::{
    domain::{BoardDomainError, BoardGrid, BucketKey, ProjectId, Swimlane},
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::filter::{CellContext, FilterExpression};
use crate::view::snapshot::{BoardSettings, BoardSnapshot, CellView, LaneView};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for snapshot composition.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The referenced project has no board.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Board storage failure.
    #[error(transparent)]
    Board(#[from] BoardRepositoryError),
}

/// Result type for view composition.
pub type ViewResult<T> = Result<T, ViewError>;

/// Composes filtered, ordered snapshots from the canonical grid.
///
/// The builder never mutates board state; it reads one consistent grid
/// snapshot, compiles the viewer's filter, and groups the matching
/// cards cell by cell in stored rank order.
pub struct BoardViewBuilder<B, C>
where
    B: BoardRepository,
    C: Clock + Send + Sync,
{
    boards: Arc<B>,
    clock: Arc<C>,
    settings: BoardSettings,
}

impl<B, C> BoardViewBuilder<B, C>
where
    B: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a view builder with default presentation settings.
    #[must_use]
    pub fn new(boards: Arc<B>, clock: Arc<C>) -> Self {
        Self {
            boards,
            clock,
            settings: BoardSettings::default(),
        }
    }

    /// Overrides the presentation settings carried into snapshots.
    #[must_use]
    pub fn with_settings(mut self, settings: BoardSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Renders a filtered snapshot of the project's board.
    ///
    /// Every (swimlane, column) cell of the layout appears in the
    /// snapshot, including empty ones; the filter only decides which
    /// cards are visible inside each cell.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Domain`] when the project has no board, or
    /// [`ViewError::Board`] when storage fails.
    pub async fn render(
        &self,
        project_id: ProjectId,
        filter_query: &str,
    ) -> ViewResult<BoardSnapshot> {
        let grid = self
            .boards
            .load(project_id)
            .await?
            .ok_or(BoardDomainError::UnknownProject(project_id))?;

        let filter = FilterExpression::compile(filter_query);
        let lanes = grid
            .swimlanes()
            .iter()
            .map(|lane| compose_lane(&grid, lane, &filter))
            .collect();

        Ok(BoardSnapshot::new(
            project_id,
            self.clock.utc(),
            self.settings,
            grid.columns().to_vec(),
            lanes,
        ))
    }
}

fn compose_lane(grid: &BoardGrid, lane: &Swimlane, filter: &FilterExpression) -> LaneView {
    let cells = grid
        .columns()
        .iter()
        .map(|column| {
            let bucket = BucketKey::new(column.id(), lane.id());
            let context = CellContext::new(column, lane);
            let cards = grid
                .cards_in(bucket)
                .iter()
                .filter(|card| filter.is_match(card, context))
                .cloned()
                .collect();
            CellView::new(column.id(), cards)
        })
        .collect();

    LaneView::new(lane.clone(), cells)
}
