//! The 4-directional depth-first alternative.
//!
//! An earlier iteration of this system shipped a depth-first traversal
//! guarded behind a build-time switch. It is kept as a selectable strategy:
//! useful for comparing frontier behaviour, but it returns the first path
//! found, with no optimality claim. Prefer [`crate::AStar`].

use std::collections::HashSet;

use pathgrid_core::{GridMap, Point, Role};

use crate::astar::reconstruct;
use crate::frontier::{NO_PARENT, SearchNode};
use crate::traits::{Traversal, TraversalStrategy};

/// Depth-first traversal over the four orthogonal neighbours.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl TraversalStrategy for DepthFirst {
    // The goal parameter is unused: depth-first needs no estimate and the
    // goal cell is recognised by role.
    fn traverse(&self, map: &GridMap, start: Point, _goal: Point) -> Traversal {
        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut stack: Vec<usize> = Vec::new();
        let mut seen: HashSet<Point> = HashSet::new();

        nodes.push(plain_node(start, NO_PARENT));
        stack.push(0);
        seen.insert(start);

        let mut expanded = Vec::new();

        while let Some(current) = stack.pop() {
            let pos = nodes[current].pos;
            if map.role(pos) == Role::Goal {
                return Traversal {
                    path: Some(reconstruct(&nodes, current, map)),
                    expanded,
                };
            }
            if map.role(pos) != Role::Start {
                expanded.push(pos);
            }

            for np in pos.neighbors_4() {
                if !map.role(np).is_traversable() || seen.contains(&np) {
                    continue;
                }
                seen.insert(np);
                nodes.push(plain_node(np, current));
                stack.push(nodes.len() - 1);
            }
        }

        Traversal {
            path: None,
            expanded,
        }
    }
}

/// A node without cost accounting; depth-first only needs the parent chain.
fn plain_node(pos: Point, parent: usize) -> SearchNode {
    SearchNode {
        pos,
        g: 0.0,
        h: 0.0,
        f: 0.0,
        parent,
        open: false,
    }
}
