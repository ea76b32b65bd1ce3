//! Board state: the ordered column × swimlane grid and its mutation.
//!
//! This module owns the canonical per-project placement of task cards
//! and the drag-and-drop move operation, keeping every bucket's ranks
//! contiguous under concurrent repositioning requests. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
