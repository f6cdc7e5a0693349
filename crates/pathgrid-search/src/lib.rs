//! **pathgrid-search** — single-pair shortest-path search over a
//! [`GridMap`](pathgrid_core::GridMap).
//!
//! The primary strategy is **A\*** with 8-directional movement and a true
//! Euclidean metric for both step cost and heuristic ([`AStar`]). A
//! 4-directional depth-first strategy from an earlier iteration of the
//! system is retained as a documented alternative ([`DepthFirst`]); it finds
//! *a* path, not the shortest one.
//!
//! Strategies plug into [`PathEngine`] through the [`TraversalStrategy`]
//! trait. A search runs synchronously to completion and allocates its node
//! set fresh per call; nothing outlives the call.

mod astar;
mod dfs;
mod distance;
mod engine;
mod frontier;
mod traits;

pub use astar::AStar;
pub use dfs::DepthFirst;
pub use distance::{chebyshev, euclidean};
pub use engine::{PathEngine, SearchOutcome};
pub use traits::{Traversal, TraversalStrategy};
