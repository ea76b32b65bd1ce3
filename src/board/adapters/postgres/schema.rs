//! Diesel schema for board placement persistence.
//!
//! Card, column, and swimlane records are owned by the surrounding
//! task-management schema; the board only reads layout and ordering and
//! writes placements back.

diesel::table! {
    /// Board columns in ordinal order.
    board_columns (id) {
        /// Column identifier.
        id -> BigInt,
        /// Owning project.
        project_id -> BigInt,
        /// Column title shown in the board header.
        #[max_length = 255]
        title -> Varchar,
        /// Ordinal rank of the column within the board.
        ordinal -> Integer,
    }
}

diesel::table! {
    /// Board swimlanes in ordinal order.
    board_swimlanes (id) {
        /// Swimlane identifier.
        id -> BigInt,
        /// Owning project.
        project_id -> BigInt,
        /// Swimlane name shown on the lane header.
        #[max_length = 255]
        name -> Varchar,
        /// Ordinal rank of the swimlane within the board.
        ordinal -> Integer,
    }
}

diesel::table! {
    /// Task cards with their current placement.
    board_cards (id) {
        /// Task identifier.
        id -> BigInt,
        /// Owning project.
        project_id -> BigInt,
        /// Column axis of the card's bucket.
        column_id -> BigInt,
        /// Swimlane axis of the card's bucket.
        swimlane_id -> BigInt,
        /// One-based rank within the bucket.
        position -> Integer,
        /// Card title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional long description.
        description -> Nullable<Text>,
        /// Optional assignee username.
        #[max_length = 255]
        assignee -> Nullable<Varchar>,
        /// Tag names attached to the card.
        tags -> Array<Text>,
        /// Optional display color.
        #[max_length = 50]
        color -> Nullable<Varchar>,
        /// Optional due date.
        due_date -> Nullable<Date>,
    }
}
