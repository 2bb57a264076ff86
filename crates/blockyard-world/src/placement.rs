//! Region derivation for two-corner placement.

use blockyard_core::GridPos;

use crate::catalog::ObjectType;

/// Compute the cells a placement between two corners would cover.
///
/// For unique object types the region always collapses to `far` alone,
/// regardless of the anchor; the second click is what places the object.
/// For everything else the region is every lattice cell in the closed
/// axis-aligned box spanned by the corners, inclusive on all three axes,
/// so corners `(0,0,0)` and `(1,0,1)` yield a four-cell 2x1x2 footprint.
#[must_use]
pub fn propose_region(anchor: GridPos, far: GridPos, ty: &ObjectType) -> Vec<GridPos> {
    if ty.unique {
        return vec![far];
    }

    let (min_x, max_x) = min_max(anchor.x, far.x);
    let (min_y, max_y) = min_max(anchor.y, far.y);
    let (min_z, max_z) = min_max(anchor.z, far.z);

    let mut region = Vec::with_capacity(
        ((max_x - min_x + 1) * (max_y - min_y + 1) * (max_z - min_z + 1)) as usize,
    );
    for x in min_x..=max_x {
        for y in min_y..=max_y {
            for z in min_z..=max_z {
                region.push(GridPos::new(x, y, z));
            }
        }
    }
    region
}

const fn min_max(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
