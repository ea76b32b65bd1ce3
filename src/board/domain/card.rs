//! Task card: the unit of placement on a board.

use super::{BoardDomainError, Position, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task as seen by the board: its identity, the attributes filters
/// consume, and its current rank within its bucket.
///
/// Card lifecycle (creation, editing, deletion) is owned by the
/// surrounding task-management system; the board only repositions cards
/// it is handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCard {
    id: TaskId,
    title: String,
    description: Option<String>,
    assignee: Option<String>,
    tags: Vec<String>,
    color: Option<String>,
    due_date: Option<NaiveDate>,
    position: Position,
}

impl TaskCard {
    /// Creates a card with the required identity and title.
    ///
    /// The card starts at rank 1; its real rank is assigned when it is
    /// placed on a grid.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCardTitle`] when the title is
    /// empty after trimming.
    pub fn new(id: TaskId, title: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = title.into();
        if raw.trim().is_empty() {
            return Err(BoardDomainError::EmptyCardTitle);
        }
        Ok(Self {
            id,
            title: raw,
            description: None,
            assignee: None,
            tags: Vec::new(),
            color: None,
            due_date: None,
            position: Position::FIRST,
        })
    }

    /// Sets the card description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the card assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the card tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the card color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the card due date.
    #[must_use]
    #[expect(
        clippy::missing_const_for_fn,
        reason = "Option::Some with Copy type should be const but isn't stable"
    )]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the card title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the card description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the card assignee, if any.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the card tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the card color, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the card due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the card's one-based rank within its bucket.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Assigns the rank computed by the owning grid.
    pub(crate) const fn assign_position(&mut self, position: Position) {
        self.position = position;
    }
}
