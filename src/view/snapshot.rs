//! Read-only board snapshot types handed to presentation layers.

use crate::board::domain::{Column, ColumnId, ProjectId, Swimlane, TaskCard};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Presentation settings carried opaquely into every snapshot.
///
/// The board core does not interpret these; the hosting application
/// reads them back out to schedule polls and fade activity highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    refresh_interval_secs: u64,
    highlight_period_secs: u64,
}

impl BoardSettings {
    /// Creates settings from configured values.
    #[must_use]
    pub const fn new(refresh_interval_secs: u64, highlight_period_secs: u64) -> Self {
        Self {
            refresh_interval_secs,
            highlight_period_secs,
        }
    }

    /// Returns the polling cadence in seconds.
    #[must_use]
    pub const fn refresh_interval_secs(self) -> u64 {
        self.refresh_interval_secs
    }

    /// Returns the recent-activity highlight window in seconds.
    #[must_use]
    pub const fn highlight_period_secs(self) -> u64 {
        self.highlight_period_secs
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self::new(10, 172_700)
    }
}

/// One cell of the snapshot: a column within a lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    column_id: ColumnId,
    cards: Vec<TaskCard>,
}

impl CellView {
    pub(crate) const fn new(column_id: ColumnId, cards: Vec<TaskCard>) -> Self {
        Self { column_id, cards }
    }

    /// Returns the column this cell belongs to.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the visible cards in rank order.
    #[must_use]
    pub fn cards(&self) -> &[TaskCard] {
        &self.cards
    }
}

/// One swimlane row of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneView {
    swimlane: Swimlane,
    cells: Vec<CellView>,
}

impl LaneView {
    pub(crate) const fn new(swimlane: Swimlane, cells: Vec<CellView>) -> Self {
        Self { swimlane, cells }
    }

    /// Returns the swimlane this row renders.
    #[must_use]
    pub const fn swimlane(&self) -> &Swimlane {
        &self.swimlane
    }

    /// Returns the row's cells, one per column, in column order.
    #[must_use]
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    /// Returns the number of visible cards in this lane.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.cards().len()).sum()
    }
}

/// Read-only, point-in-time view of one project's board.
///
/// The snapshot owns copies of everything it shows; moves applied after
/// it was composed do not reach into it. Filtering decided which cards
/// appear, never their relative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    project_id: ProjectId,
    generated_at: DateTime<Utc>,
    settings: BoardSettings,
    columns: Vec<Column>,
    lanes: Vec<LaneView>,
}

impl BoardSnapshot {
    pub(crate) const fn new(
        project_id: ProjectId,
        generated_at: DateTime<Utc>,
        settings: BoardSettings,
        columns: Vec<Column>,
        lanes: Vec<LaneView>,
    ) -> Self {
        Self {
            project_id,
            generated_at,
            settings,
            columns,
            lanes,
        }
    }

    /// Returns the project this snapshot renders.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the instant the snapshot was composed.
    ///
    /// Pollers hand this back as their last-seen timestamp.
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Returns the opaque presentation settings.
    #[must_use]
    pub const fn settings(&self) -> BoardSettings {
        self.settings
    }

    /// Returns the column headers in ordinal order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the lane rows in ordinal order.
    #[must_use]
    pub fn lanes(&self) -> &[LaneView] {
        &self.lanes
    }

    /// Returns the total number of visible cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.lanes.iter().map(LaneView::card_count).sum()
    }

    /// Returns the number of visible cards in one column across all
    /// lanes, as shown in the column header.
    #[must_use]
    pub fn column_card_count(&self, column_id: ColumnId) -> usize {
        self.lanes
            .iter()
            .flat_map(|lane| lane.cells())
            .filter(|cell| cell.column_id() == column_id)
            .map(|cell| cell.cards().len())
            .sum()
    }
}
