//! Board grid aggregate: ordered card sequences per (column, swimlane)
//! bucket and the drag-and-drop move algorithm.
//!
//! The grid upholds the contiguity invariant: within every bucket, card
//! ranks form the exact sequence `1..=len` with no duplicates and no
//! gaps. Moves are remove-then-insert, renumbering both affected
//! buckets, also when source and destination are the same bucket.

use super::{
    BoardDomainError, Column, ColumnId, Position, ProjectId, Swimlane, SwimlaneId, TaskCard,
    TaskId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Address of one bucket: a (column, swimlane) pair.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BucketKey {
    column_id: ColumnId,
    swimlane_id: SwimlaneId,
}

impl BucketKey {
    /// Creates a bucket address.
    #[must_use]
    pub const fn new(column_id: ColumnId, swimlane_id: SwimlaneId) -> Self {
        Self {
            column_id,
            swimlane_id,
        }
    }

    /// Returns the column axis of this bucket.
    #[must_use]
    pub const fn column_id(self) -> ColumnId {
        self.column_id
    }

    /// Returns the swimlane axis of this bucket.
    #[must_use]
    pub const fn swimlane_id(self) -> SwimlaneId {
        self.swimlane_id
    }
}

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    position: Position,
    changed: bool,
}

impl MoveOutcome {
    /// Returns the rank the card holds after the move.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Returns whether the move altered any card placement.
    ///
    /// A drop onto the card's current slot succeeds without changing the
    /// grid; callers decide whether such a drop still counts as activity.
    #[must_use]
    pub const fn changed(self) -> bool {
        self.changed
    }
}

/// Per-project board grid: the aggregate root for card placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    project_id: ProjectId,
    columns: Vec<Column>,
    swimlanes: Vec<Swimlane>,
    buckets: BTreeMap<BucketKey, Vec<TaskCard>>,
}

impl BoardGrid {
    /// Creates an empty grid over the given layout.
    ///
    /// Columns and swimlanes are taken in ordinal order. A board with no
    /// explicit swimlanes gets the default lane.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLayout`] when no column is given,
    /// or a duplicate-layout error when the same column or swimlane
    /// appears twice.
    pub fn new(
        project_id: ProjectId,
        columns: Vec<Column>,
        swimlanes: Vec<Swimlane>,
    ) -> Result<Self, BoardDomainError> {
        if columns.is_empty() {
            return Err(BoardDomainError::EmptyLayout);
        }
        if let Some(id) = first_duplicate(columns.iter().map(Column::id)) {
            return Err(BoardDomainError::DuplicateColumn(id));
        }
        let lanes = if swimlanes.is_empty() {
            vec![Swimlane::default_lane()]
        } else {
            swimlanes
        };
        if let Some(id) = first_duplicate(lanes.iter().map(Swimlane::id)) {
            return Err(BoardDomainError::DuplicateSwimlane(id));
        }

        Ok(Self {
            project_id,
            columns,
            swimlanes: lanes,
            buckets: BTreeMap::new(),
        })
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the columns in ordinal order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the swimlanes in ordinal order.
    #[must_use]
    pub fn swimlanes(&self) -> &[Swimlane] {
        &self.swimlanes
    }

    /// Returns the ordered cards of one bucket.
    ///
    /// Buckets that have never held a card yield an empty slice; every
    /// (column, swimlane) pair of the layout is a valid cell.
    #[must_use]
    pub fn cards_in(&self, bucket: BucketKey) -> &[TaskCard] {
        self.buckets.get(&bucket).map_or(&[], Vec::as_slice)
    }

    /// Returns the total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Iterates over all cards with their bucket address, in bucket
    /// order and ascending rank within each bucket.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (BucketKey, &TaskCard)> {
        self.buckets
            .iter()
            .flat_map(|(key, cards)| cards.iter().map(move |card| (*key, card)))
    }

    /// Finds a card and its bucket address.
    #[must_use]
    pub fn find_card(&self, task_id: TaskId) -> Option<(BucketKey, &TaskCard)> {
        self.iter().find(|(_, card)| card.id() == task_id)
    }

    /// Appends a card to the end of a bucket.
    ///
    /// This is how externally created tasks enter the grid; the card's
    /// rank is assigned here.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownColumn`] or
    /// [`BoardDomainError::UnknownSwimlane`] when the bucket is not part
    /// of the layout, and [`BoardDomainError::DuplicateCard`] when the
    /// card is already on the board.
    pub fn place_card(
        &mut self,
        bucket: BucketKey,
        card: TaskCard,
    ) -> Result<Position, BoardDomainError> {
        self.require_bucket(bucket)?;
        if self.find_card(card.id()).is_some() {
            return Err(BoardDomainError::DuplicateCard(card.id()));
        }

        let cards = self.buckets.entry(bucket).or_default();
        let position = Position::from_index(cards.len());
        let mut placed = card;
        placed.assign_position(position);
        cards.push(placed);
        Ok(position)
    }

    /// Moves a card to a destination bucket and rank.
    ///
    /// The card is removed from its source bucket (closing the gap) and
    /// inserted into the destination bucket (opening a gap); the
    /// requested rank is clamped to `1..=len + 1` as measured after the
    /// removal, so ranks past the end append. Both buckets are
    /// renumbered so the contiguity invariant holds on return.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownTask`] when the card is not on
    /// this board, or [`BoardDomainError::UnknownColumn`] /
    /// [`BoardDomainError::UnknownSwimlane`] when the destination bucket
    /// is not part of the layout. A failed move leaves the grid
    /// untouched.
    pub fn move_card(
        &mut self,
        task_id: TaskId,
        destination: BucketKey,
        requested: Position,
    ) -> Result<MoveOutcome, BoardDomainError> {
        self.require_bucket(destination)?;
        let (source, source_index) = self
            .locate(task_id)
            .ok_or(BoardDomainError::UnknownTask(task_id))?;

        let mut card = self.take_card(source, source_index);
        let destination_len = self.cards_in(destination).len();
        let insert_index = requested.index().min(destination_len);

        let changed = !(source == destination && insert_index == source_index);
        let position = Position::from_index(insert_index);
        card.assign_position(position);

        let cards = self.buckets.entry(destination).or_default();
        cards.insert(insert_index, card);
        renumber(cards);

        Ok(MoveOutcome { position, changed })
    }

    fn locate(&self, task_id: TaskId) -> Option<(BucketKey, usize)> {
        self.buckets.iter().find_map(|(key, cards)| {
            cards
                .iter()
                .position(|card| card.id() == task_id)
                .map(|index| (*key, index))
        })
    }

    /// Removes the card at `index` from `bucket` and renumbers the rest.
    fn take_card(&mut self, bucket: BucketKey, index: usize) -> TaskCard {
        let cards = self.buckets.entry(bucket).or_default();
        let card = cards.remove(index);
        renumber(cards);
        card
    }

    fn require_bucket(&self, bucket: BucketKey) -> Result<(), BoardDomainError> {
        if !self
            .columns
            .iter()
            .any(|column| column.id() == bucket.column_id())
        {
            return Err(BoardDomainError::UnknownColumn(bucket.column_id()));
        }
        if !self
            .swimlanes
            .iter()
            .any(|lane| lane.id() == bucket.swimlane_id())
        {
            return Err(BoardDomainError::UnknownSwimlane(bucket.swimlane_id()));
        }
        Ok(())
    }
}

/// Reassigns ranks `1..=len` over a bucket, restoring contiguity.
fn renumber(cards: &mut [TaskCard]) {
    for (index, card) in cards.iter_mut().enumerate() {
        card.assign_position(Position::from_index(index));
    }
}

/// Returns the first identifier appearing more than once.
fn first_duplicate<I, T>(ids: I) -> Option<T>
where
    I: Iterator<Item = T>,
    T: Copy + Ord,
{
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Some(id);
        }
    }
    None
}
