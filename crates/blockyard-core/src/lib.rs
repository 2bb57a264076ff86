//! Core types and math for the Blockyard editor engine.
//!
//! This crate provides the foundational types used throughout the engine:
//! - The integer placement lattice ([`GridPos`]) with snapping and clamping
//! - Easing math for camera transitions
//! - Common error types

pub mod coords;
pub mod error;
pub mod math;

pub use coords::GridPos;
pub use error::{Error, Result};

/// Engine-wide constants
pub mod constants {
    /// Half-extent of the editable ground grid in cells per axis
    pub const GRID_SIZE: i32 = 20;
    /// Lattice height of the ground plane; nothing is placed below it
    pub const GROUND_Y: i32 = 0;
}
