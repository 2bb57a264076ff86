//! World state and placement validation for the Blockyard editor engine.
//!
//! This crate owns everything that persists for the life of an editing
//! session:
//! - The static catalog of placeable object types ([`ObjectType`])
//! - Placed object records ([`PlacedObject`])
//! - The cell occupancy index ([`OccupancyIndex`])
//! - The world model with its non-overlap invariant ([`WorldModel`])
//!
//! The single mutation path is [`WorldModel::try_place`]: a proposed
//! two-corner region is validated against the occupancy index and, only
//! if no cell is already claimed, appended to the world and indexed in
//! the same step. Rejection is an expected outcome, not a fault.

pub mod catalog;
pub mod object;
pub mod occupancy;
pub mod placement;
pub mod world;

pub use catalog::{ObjectType, RenderStrategy};
pub use object::{ObjectId, PlacedObject};
pub use occupancy::OccupancyIndex;
pub use placement::propose_region;
pub use world::{PlacementRejected, WorldModel};
