//! Static catalog of placeable object types.
//!
//! The catalog is process-wide and read-only: descriptors are `'static`
//! and looked up by id string. Unknown ids resolve to the plain block
//! type so a stale or mistyped selection can never leave the editor
//! without a current type.

use serde::Serialize;

/// How the renderer should draw objects of a given type.
///
/// The engine never draws anything itself; this is the dispatch hint the
/// renderer resolves to a drawing routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RenderStrategy {
    /// One unit cube per occupied cell
    Cube,
    /// Reflective water surface
    Water,
    /// Instanced tree model
    TreeModel,
}

/// Static descriptor for a placeable object type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObjectType {
    /// Catalog identifier
    pub id: &'static str,
    /// Base display color (RGB, 0-255)
    pub color: [u8; 3],
    /// Render height hint in cells (0.5 for water surfaces, 2 for trees)
    pub height: f32,
    /// Single-click placement: the region always collapses to one cell
    pub unique: bool,
    /// Drawing routine the renderer should resolve for this type
    pub render: RenderStrategy,
}

impl ObjectType {
    /// Swimming pool with reflective water surface
    pub const POOL: Self = Self {
        id: "pool",
        color: [0, 206, 209],
        height: 0.5,
        unique: false,
        render: RenderStrategy::Water,
    };

    /// Tree placed as a single cell with a tall model
    pub const TREE: Self = Self {
        id: "tree",
        color: [34, 139, 34],
        height: 2.0,
        unique: true,
        render: RenderStrategy::TreeModel,
    };

    /// Fence or barrier
    pub const FENCE: Self = Self {
        id: "fence",
        color: [139, 69, 19],
        height: 1.0,
        unique: false,
        render: RenderStrategy::Cube,
    };

    /// Ground movement or earthwork
    pub const TERRAIN: Self = Self {
        id: "terrain",
        color: [222, 184, 135],
        height: 1.0,
        unique: false,
        render: RenderStrategy::Cube,
    };

    /// Pathway or walkway
    pub const PATH: Self = Self {
        id: "path",
        color: [105, 105, 105],
        height: 1.0,
        unique: false,
        render: RenderStrategy::Cube,
    };

    /// Generic block unit; also the fallback for unknown ids
    pub const BLOCK: Self = Self {
        id: "block",
        color: [74, 144, 226],
        height: 1.0,
        unique: false,
        render: RenderStrategy::Cube,
    };

    /// Every registered object type, in panel order.
    pub const ALL: [&'static Self; 6] = [
        &Self::POOL,
        &Self::TREE,
        &Self::FENCE,
        &Self::TERRAIN,
        &Self::PATH,
        &Self::BLOCK,
    ];

    /// Resolve an id to its descriptor, falling back to [`Self::BLOCK`]
    /// for ids not present in the catalog.
    #[must_use]
    pub fn lookup(id: &str) -> &'static Self {
        Self::ALL
            .iter()
            .find(|ty| ty.id == id)
            .copied()
            .unwrap_or(&Self::BLOCK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_registered_types() {
        assert_eq!(ObjectType::lookup("pool"), &ObjectType::POOL);
        assert_eq!(ObjectType::lookup("tree"), &ObjectType::TREE);
        assert_eq!(ObjectType::lookup("block"), &ObjectType::BLOCK);
    }

    #[test]
    fn lookup_falls_back_to_block() {
        assert_eq!(ObjectType::lookup("gazebo"), &ObjectType::BLOCK);
        assert_eq!(ObjectType::lookup(""), &ObjectType::BLOCK);
    }

    #[test]
    fn only_trees_are_unique() {
        for ty in ObjectType::ALL {
            assert_eq!(ty.unique, ty.id == "tree");
        }
    }

    #[test]
    fn catalog_ids_are_distinct() {
        for (i, a) in ObjectType::ALL.iter().enumerate() {
            for b in &ObjectType::ALL[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
