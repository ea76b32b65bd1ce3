//! Diesel row models for board persistence.

use super::schema::{board_cards, board_columns, board_swimlanes};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for board columns.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_columns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ColumnRow {
    /// Column identifier.
    pub id: i64,
    /// Owning project.
    pub project_id: i64,
    /// Column title.
    pub title: String,
    /// Ordinal rank within the board.
    pub ordinal: i32,
}

/// Query result row for board swimlanes.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_swimlanes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SwimlaneRow {
    /// Swimlane identifier.
    pub id: i64,
    /// Owning project.
    pub project_id: i64,
    /// Swimlane name.
    pub name: String,
    /// Ordinal rank within the board.
    pub ordinal: i32,
}

/// Query result row for task cards.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_cards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CardRow {
    /// Task identifier.
    pub id: i64,
    /// Owning project.
    pub project_id: i64,
    /// Column axis of the card's bucket.
    pub column_id: i64,
    /// Swimlane axis of the card's bucket.
    pub swimlane_id: i64,
    /// One-based rank within the bucket.
    pub position: i32,
    /// Card title.
    pub title: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Optional assignee username.
    pub assignee: Option<String>,
    /// Tag names attached to the card.
    pub tags: Vec<String>,
    /// Optional display color.
    pub color: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

/// Update model writing a card's placement back to storage.
#[derive(Debug, Clone, Copy, AsChangeset)]
#[diesel(table_name = board_cards)]
pub struct CardPlacementChangeset {
    /// Column axis of the card's new bucket.
    pub column_id: i64,
    /// Swimlane axis of the card's new bucket.
    pub swimlane_id: i64,
    /// One-based rank within the new bucket.
    pub position: i32,
}
