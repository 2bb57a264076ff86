//! Placed object records.

use std::fmt;

use blockyard_core::GridPos;
use serde::Serialize;

use crate::catalog::ObjectType;

const ID_SUFFIX_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Unique identifier for a placed object.
///
/// Formatted as `{type_id}_{created_at_ms}_{random base36 suffix}` so ids
/// sort roughly by creation time and stay readable in logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Mint a fresh id for an object of the given type.
    #[must_use]
    pub fn mint(type_id: &str, created_at_ms: u64) -> Self {
        let mut suffix = String::with_capacity(ID_SUFFIX_LEN);
        for _ in 0..ID_SUFFIX_LEN {
            let i = fastrand::usize(..ID_ALPHABET.len());
            suffix.push(ID_ALPHABET[i] as char);
        }
        Self(format!("{type_id}_{created_at_ms}_{suffix}"))
    }

    /// View the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An object placed on the lattice.
///
/// Immutable once created: the world model only ever appends these or
/// clears them all. The covered cells are derived from the two corner
/// clicks at creation time and never change.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedObject {
    /// Unique id, minted at creation
    pub id: ObjectId,
    /// Every lattice cell the object covers (never empty)
    pub positions: Vec<GridPos>,
    /// First corner clicked
    pub start: GridPos,
    /// Second corner clicked
    pub end: GridPos,
    /// Catalog descriptor for this object's type
    pub ty: &'static ObjectType,
    /// Creation timestamp in milliseconds
    pub created_at_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_carry_type_and_timestamp() {
        let id = ObjectId::mint("fence", 1_724_400_000_000);
        assert!(id.as_str().starts_with("fence_1724400000000_"));
        assert_eq!(
            id.as_str().len(),
            "fence_1724400000000_".len() + ID_SUFFIX_LEN
        );
    }

    #[test]
    fn minted_ids_are_distinct() {
        let a = ObjectId::mint("block", 42);
        let b = ObjectId::mint("block", 42);
        assert_ne!(a, b);
    }
}
