//! The world model: ordered placed objects plus their occupancy index.

use blockyard_core::GridPos;
use thiserror::Error;
use tracing::debug;

use crate::catalog::ObjectType;
use crate::object::{ObjectId, PlacedObject};
use crate::occupancy::OccupancyIndex;
use crate::placement::propose_region;

/// A proposed placement overlapped existing objects; the world was left
/// unchanged.
///
/// This is an expected outcome of normal editing, not a fault: callers
/// surface it as "nothing happened" and let the user pick another spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("placement overlaps {occupied_cells} occupied cell(s)")]
pub struct PlacementRejected {
    /// How many cells of the proposed region were already claimed
    pub occupied_cells: usize,
}

/// Insertion-ordered collection of placed objects.
///
/// Invariant: no two objects claim the same lattice cell. The invariant
/// is enforced at insertion time by [`Self::try_place`], the only code
/// path that mutates the collection besides [`Self::clear`]. The
/// occupancy index is owned here and updated in the same step as the
/// object list, so observers never see the two disagree.
#[derive(Debug, Default, Clone)]
pub struct WorldModel {
    objects: Vec<PlacedObject>,
    occupancy: OccupancyIndex,
}

impl WorldModel {
    /// Create an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// The occupancy index derived from the placed objects.
    #[must_use]
    pub const fn occupancy(&self) -> &OccupancyIndex {
        &self.occupancy
    }

    /// Returns `true` if the cell is claimed by a placed object.
    #[must_use]
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.occupancy.is_occupied(pos)
    }

    /// Number of placed objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if nothing has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Validate a two-corner placement and, if no covered cell is already
    /// claimed, append the new object and claim its cells.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementRejected`] when any cell of the proposed region
    /// is occupied. The world and its index are left untouched.
    pub fn try_place(
        &mut self,
        anchor: GridPos,
        far: GridPos,
        ty: &'static ObjectType,
        created_at_ms: u64,
    ) -> Result<&PlacedObject, PlacementRejected> {
        let region = propose_region(anchor, far, ty);

        let occupied_cells = region
            .iter()
            .filter(|pos| self.occupancy.is_occupied(**pos))
            .count();
        if occupied_cells > 0 {
            debug!(
                ty = ty.id,
                cells = region.len(),
                occupied_cells,
                "placement rejected"
            );
            return Err(PlacementRejected { occupied_cells });
        }

        let id = ObjectId::mint(ty.id, created_at_ms);
        debug!(ty = ty.id, id = %id, cells = region.len(), "object placed");

        self.occupancy.insert_region(&region, &id);
        let index = self.objects.len();
        self.objects.push(PlacedObject {
            id,
            positions: region,
            start: anchor,
            end: far,
            ty,
            created_at_ms,
        });
        Ok(&self.objects[index])
    }

    /// Remove every placed object and drop every cell claim.
    pub fn clear(&mut self) {
        debug!(objects = self.objects.len(), "world cleared");
        self.objects.clear();
        self.occupancy.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(
        world: &mut WorldModel,
        anchor: (i32, i32, i32),
        far: (i32, i32, i32),
        ty: &'static ObjectType,
    ) -> Result<ObjectId, PlacementRejected> {
        world
            .try_place(
                GridPos::new(anchor.0, anchor.1, anchor.2),
                GridPos::new(far.0, far.1, far.2),
                ty,
                0,
            )
            .map(|obj| obj.id.clone())
    }

    #[test]
    fn placement_appends_and_claims_cells() {
        let mut world = WorldModel::new();

        let id = place(&mut world, (0, 0, 0), (1, 0, 1), &ObjectType::BLOCK).unwrap();

        assert_eq!(world.len(), 1);
        assert_eq!(world.occupancy().len(), 4);
        assert_eq!(world.occupancy().owner(GridPos::new(1, 0, 1)), Some(&id));
        assert_eq!(world.objects()[0].positions.len(), 4);
    }

    #[test]
    fn overlap_is_rejected_and_world_untouched() {
        let mut world = WorldModel::new();
        place(&mut world, (0, 0, 0), (0, 0, 0), &ObjectType::BLOCK).unwrap();
        let before = world.objects()[0].id.clone();

        let rejected = place(&mut world, (0, 0, 0), (0, 0, 0), &ObjectType::FENCE);

        assert_eq!(rejected, Err(PlacementRejected { occupied_cells: 1 }));
        assert_eq!(world.len(), 1);
        assert_eq!(world.occupancy().len(), 1);
        assert_eq!(world.objects()[0].id, before);
    }

    #[test]
    fn partial_overlap_rejects_the_whole_region() {
        let mut world = WorldModel::new();
        place(&mut world, (2, 0, 2), (3, 0, 3), &ObjectType::PATH).unwrap();

        // Region (0..=2)^2 overlaps only at (2, 0, 2).
        let rejected = place(&mut world, (0, 0, 0), (2, 0, 2), &ObjectType::PATH);

        assert_eq!(rejected, Err(PlacementRejected { occupied_cells: 1 }));
        assert_eq!(world.len(), 1);
        assert_eq!(world.occupancy().len(), 4);
    }

    #[test]
    fn occupancy_is_global_across_types() {
        let mut world = WorldModel::new();
        place(&mut world, (0, 0, 0), (0, 0, 0), &ObjectType::POOL).unwrap();

        // A fence may not share a cell with a pool.
        let rejected = place(&mut world, (0, 0, 0), (0, 0, 0), &ObjectType::FENCE);
        assert!(rejected.is_err());
    }

    #[test]
    fn no_two_objects_share_a_cell() {
        let mut world = WorldModel::new();
        let _ = place(&mut world, (0, 0, 0), (3, 0, 3), &ObjectType::TERRAIN);
        let _ = place(&mut world, (2, 0, 2), (5, 0, 5), &ObjectType::TERRAIN);
        let _ = place(&mut world, (4, 0, 4), (7, 0, 7), &ObjectType::PATH);
        let _ = place(&mut world, (10, 0, 10), (10, 0, 10), &ObjectType::TREE);

        let mut seen = hashbrown::HashSet::new();
        for obj in world.objects() {
            for pos in &obj.positions {
                assert!(seen.insert(*pos), "cell {pos:?} owned twice");
            }
        }
        assert_eq!(seen.len(), world.occupancy().len());
    }

    #[test]
    fn unique_placement_ignores_the_anchor() {
        let mut world = WorldModel::new();

        let id = place(&mut world, (9, 0, 9), (1, 0, 1), &ObjectType::TREE).unwrap();

        assert_eq!(world.occupancy().len(), 1);
        assert_eq!(world.occupancy().owner(GridPos::new(1, 0, 1)), Some(&id));
        assert!(!world.is_occupied(GridPos::new(9, 0, 9)));
    }

    #[test]
    fn clear_empties_objects_and_index_together() {
        let mut world = WorldModel::new();
        place(&mut world, (0, 0, 0), (2, 0, 2), &ObjectType::BLOCK).unwrap();

        world.clear();

        assert!(world.is_empty());
        assert!(world.occupancy().is_empty());

        // Cleared cells can be reused.
        assert!(place(&mut world, (0, 0, 0), (0, 0, 0), &ObjectType::BLOCK).is_ok());
    }
}
