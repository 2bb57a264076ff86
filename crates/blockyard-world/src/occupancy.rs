//! Cell occupancy index.

use blockyard_core::GridPos;
use hashbrown::HashMap;

use crate::object::ObjectId;

/// Maps each claimed lattice cell to the id of the object that owns it.
///
/// The index is derived state: only [`crate::WorldModel`] mutates it, in
/// the same step that appends or clears the owning objects, so the two
/// can never be observed disagreeing. Lookups are O(1) amortized, which
/// matters because a single placement region can contain thousands of
/// cells.
#[derive(Debug, Default, Clone)]
pub struct OccupancyIndex {
    cells: HashMap<GridPos, ObjectId>,
}

impl OccupancyIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the cell is already claimed by a placed object.
    #[must_use]
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Get the id of the object claiming a cell, if any.
    #[must_use]
    pub fn owner(&self, pos: GridPos) -> Option<&ObjectId> {
        self.cells.get(&pos)
    }

    /// Returns `true` if any cell in the region is already claimed.
    pub fn any_occupied<'a>(&self, region: impl IntoIterator<Item = &'a GridPos>) -> bool {
        region.into_iter().any(|pos| self.is_occupied(*pos))
    }

    /// Number of claimed cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cells are claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Claim every cell in the region for the given owner.
    ///
    /// Callers must have validated the region first; claiming an already
    /// occupied cell would break the non-overlap invariant.
    pub(crate) fn insert_region(&mut self, region: &[GridPos], owner: &ObjectId) {
        self.cells.reserve(region.len());
        for pos in region {
            debug_assert!(!self.is_occupied(*pos), "cell {pos:?} claimed twice");
            self.cells.insert(*pos, owner.clone());
        }
    }

    /// Drop every claim.
    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_query() {
        let mut index = OccupancyIndex::new();
        let owner = ObjectId::mint("block", 0);
        let region = [GridPos::new(0, 0, 0), GridPos::new(1, 0, 0)];

        index.insert_region(&region, &owner);

        assert!(index.is_occupied(GridPos::new(0, 0, 0)));
        assert!(index.is_occupied(GridPos::new(1, 0, 0)));
        assert!(!index.is_occupied(GridPos::new(2, 0, 0)));
        assert_eq!(index.owner(GridPos::new(1, 0, 0)), Some(&owner));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn any_occupied_over_region() {
        let mut index = OccupancyIndex::new();
        let owner = ObjectId::mint("block", 0);
        index.insert_region(&[GridPos::new(5, 0, 5)], &owner);

        let disjoint = [GridPos::new(0, 0, 0), GridPos::new(1, 0, 0)];
        assert!(!index.any_occupied(&disjoint));

        let touching = [GridPos::new(4, 0, 5), GridPos::new(5, 0, 5)];
        assert!(index.any_occupied(&touching));
    }

    #[test]
    fn clear_drops_all_claims() {
        let mut index = OccupancyIndex::new();
        let owner = ObjectId::mint("block", 0);
        index.insert_region(&[GridPos::new(0, 0, 0)], &owner);

        index.clear();

        assert!(index.is_empty());
        assert!(!index.is_occupied(GridPos::new(0, 0, 0)));
    }
}
