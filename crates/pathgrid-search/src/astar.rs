//! The primary strategy: A* with 8-directional movement and a Euclidean
//! metric.

use pathgrid_core::{GridMap, Point, Role};

use crate::distance::euclidean;
use crate::frontier::{Frontier, NO_PARENT, SearchNode};
use crate::traits::{Traversal, TraversalStrategy};

/// A* shortest-path search.
///
/// Euclidean distance serves as both the incremental step cost and the
/// heuristic; the heuristic never overestimates the true remaining cost
/// under this movement model, so the first time the goal is selected its
/// path is optimal.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl TraversalStrategy for AStar {
    fn traverse(&self, map: &GridMap, start: Point, goal: Point) -> Traversal {
        let mut frontier = Frontier::new();
        frontier.insert(start, 0.0, euclidean(start, goal), NO_PARENT, false);
        let mut expanded = Vec::new();

        loop {
            let Some(current) = frontier.select() else {
                // Frontier exhausted: no path exists.
                return Traversal {
                    path: None,
                    expanded,
                };
            };

            let pos = frontier.nodes[current].pos;
            if map.role(pos) == Role::Goal {
                return Traversal {
                    path: Some(reconstruct(&frontier.nodes, current, map)),
                    expanded,
                };
            }

            frontier.close(current);
            if map.role(pos) != Role::Start {
                expanded.push(pos);
            }
            let g = frontier.nodes[current].g;

            for np in pos.neighbors_8() {
                if !map.role(np).is_traversable() {
                    continue;
                }
                let tentative_g = g + euclidean(pos, np);
                match frontier.lookup(np) {
                    None => {
                        frontier.insert(
                            np,
                            tentative_g,
                            euclidean(np, goal),
                            current,
                            map.role(np) == Role::Goal,
                        );
                    }
                    Some(ni) => {
                        if !frontier.nodes[ni].open {
                            continue; // already finalised
                        }
                        if tentative_g < frontier.nodes[ni].g {
                            frontier.improve(ni, tentative_g, current);
                        }
                    }
                }
            }
        }
    }
}

/// Walk parent references from the goal node back to the node whose cell is
/// `Start`, then reverse into start→goal order. The start cell is excluded,
/// the goal cell included.
pub(crate) fn reconstruct(nodes: &[SearchNode], goal_idx: usize, map: &GridMap) -> Vec<Point> {
    let mut path = Vec::new();
    let mut idx = goal_idx;
    while map.role(nodes[idx].pos) != Role::Start {
        path.push(nodes[idx].pos);
        idx = nodes[idx].parent;
    }
    path.reverse();
    path
}
