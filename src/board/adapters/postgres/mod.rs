//! `PostgreSQL` adapter for board placement persistence.

mod models;
mod repository;
mod schema;

pub use repository::{BoardPgPool, PostgresBoardRepository};
