//! The integer placement lattice.

use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::GROUND_Y;
use crate::error::{Error, Result};

/// Position of a unit cell on the integer placement lattice.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub _pad: i32,
}

impl GridPos {
    /// Create a new grid position
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z, _pad: 0 }
    }

    /// Snap a continuous world-space point to the nearest lattice cell.
    ///
    /// Each coordinate rounds to the nearest integer, with ties rounding
    /// half-up (toward positive infinity): `0.5 -> 1`, `-0.5 -> 0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if any coordinate is NaN or infinite.
    pub fn snap(world: Vec3) -> Result<Self> {
        if !world.is_finite() {
            return Err(Error::InvalidInput(world.x, world.y, world.z));
        }
        Ok(Self::new(
            round_half_up(world.x),
            round_half_up(world.y),
            round_half_up(world.z),
        ))
    }

    /// Clamp a below-ground position up to the ground plane.
    ///
    /// Positions at or above the ground are returned unchanged.
    #[inline]
    #[must_use]
    pub const fn clamp_to_surface(self) -> Self {
        if self.y < GROUND_Y {
            Self::new(self.x, GROUND_Y, self.z)
        } else {
            self
        }
    }

    /// Convert to the world-space center of the cell
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Convert to glam IVec3
    #[inline]
    pub const fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl From<IVec3> for GridPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_cell() {
        let pos = GridPos::snap(Vec3::new(1.2, 0.9, -2.4)).unwrap();
        assert_eq!(pos, GridPos::new(1, 1, -2));
    }

    #[test]
    fn snap_ties_round_half_up() {
        let pos = GridPos::snap(Vec3::new(0.5, -0.5, 2.5)).unwrap();
        assert_eq!(pos, GridPos::new(1, 0, 3));
    }

    #[test]
    fn snap_rejects_non_finite_input() {
        assert!(GridPos::snap(Vec3::new(f32::NAN, 0.0, 0.0)).is_err());
        assert!(GridPos::snap(Vec3::new(0.0, f32::INFINITY, 0.0)).is_err());
        assert!(GridPos::snap(Vec3::new(0.0, 0.0, f32::NEG_INFINITY)).is_err());
    }

    #[test]
    fn clamp_floors_below_ground_positions() {
        assert_eq!(
            GridPos::new(3, -5, 2).clamp_to_surface(),
            GridPos::new(3, 0, 2)
        );
        assert_eq!(
            GridPos::new(3, 4, 2).clamp_to_surface(),
            GridPos::new(3, 4, 2)
        );
    }

    #[test]
    fn vec3_roundtrip() {
        let pos = GridPos::new(7, 0, -3);
        let recovered = GridPos::snap(pos.to_vec3()).unwrap();
        assert_eq!(pos, recovered);
    }
}
