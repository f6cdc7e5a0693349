//! The traversal-strategy seam: [`TraversalStrategy`] and [`Traversal`].

use pathgrid_core::{GridMap, Point};

/// The result of one traversal over a map snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traversal {
    /// Start→goal ordered cell positions, excluding the start cell and
    /// including the goal cell. `None` when the frontier was exhausted.
    pub path: Option<Vec<Point>>,
    /// Positions finalised during the search, in expansion order. Rendering
    /// may mark these `Discovered`; they carry no ordering guarantee beyond
    /// the strategy's own determinism.
    pub expanded: Vec<Point>,
}

/// A pluggable traversal algorithm.
///
/// Implementations read the map snapshot only through cell roles; they never
/// mutate the map. Callers guarantee that `start` and `goal` are the map's
/// current endpoint cells.
pub trait TraversalStrategy {
    /// Search for a path from `start` to `goal`.
    fn traverse(&self, map: &GridMap, start: Point, goal: Point) -> Traversal;
}
