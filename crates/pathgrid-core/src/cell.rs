//! The [`GridCell`] type — one slot of the dense cell array.

use crate::geom::Point;
use crate::role::Role;

/// Unit traversal cost shared by every cell.
pub const DEFAULT_COST: i32 = 1;

/// A single grid cell.
///
/// `pos` is the discrete coordinate in `[0, N)` on both axes; `screen` is the
/// derived pixel-space centre of the drawn square, owned by the map and
/// consumed by rendering only. A fixed number of cells are created when the
/// map is initialised and they persist for the map's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub pos: Point,
    pub screen: Point,
    pub role: Role,
    pub cost: i32,
}

impl GridCell {
    /// Create a cell at a discrete coordinate with its derived screen centre.
    pub const fn new(pos: Point, screen: Point, role: Role) -> Self {
        Self {
            pos,
            screen,
            role,
            cost: DEFAULT_COST,
        }
    }
}
