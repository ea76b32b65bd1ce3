//! Read-only board views for polling clients.
//!
//! A snapshot is what a viewer actually renders: for every (swimlane,
//! column) cell, the ordered cards that survive the viewer's filter,
//! plus the opaque presentation settings and the instant the snapshot
//! was composed. Snapshots are owned copies; concurrent moves never
//! mutate a snapshot already handed out.

mod builder;
mod snapshot;

pub use builder::{BoardViewBuilder, ViewError, ViewResult};
pub use snapshot::{BoardSettings, BoardSnapshot, CellView, LaneView};

#[cfg(test)]
mod tests;
