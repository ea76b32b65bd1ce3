//! Domain model for board state: the ordered grid and its move
//! algorithm.
//!
//! The grid keeps a globally consistent, gap-free ordering of cards
//! across the two-dimensional column × swimlane layout while all
//! infrastructure concerns stay outside the domain boundary.

mod card;
mod error;
mod grid;
mod ids;
mod layout;

pub use card::TaskCard;
pub use error::BoardDomainError;
pub use grid::{BoardGrid, BucketKey, MoveOutcome};
pub use ids::{ColumnId, Position, ProjectId, SwimlaneId, TaskId};
pub use layout::{Column, Swimlane};
