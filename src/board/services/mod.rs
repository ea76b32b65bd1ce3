//! Orchestration services for the board context.

mod locks;
mod positioning;

pub use locks::ProjectLockRegistry;
pub use positioning::{
    MoveRequest, PositioningError, PositioningResult, PositioningService, SameSlotPolicy,
};
