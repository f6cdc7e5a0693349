//! Per-frame input snapshots and edge-triggered signals.
//!
//! The window collaborator reports *raw* held state once per frame as an
//! [`InputSnapshot`]. Diffing a snapshot against the previous frame's yields
//! [`InputEdges`]: each signal is true exactly on the false→true transition
//! of the underlying raw state and never while the key or button stays held.

use crate::geom::Point;

/// Raw input state for one frame, as reported by the window collaborator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Pointer position in window pixels.
    pub mouse: Point,
    /// Primary mouse button held.
    pub left: bool,
    /// Secondary mouse button held.
    pub right: bool,
    /// Place/remove-start key held.
    pub start_key: bool,
    /// Place/remove-goal key held.
    pub goal_key: bool,
    /// Run-search key held.
    pub path_key: bool,
    /// Scatter-obstacles key held.
    pub scatter_key: bool,
    /// Clear-obstacles key held.
    pub clear_key: bool,
    /// Quit requested (close button or quit key).
    pub quit: bool,
}

/// Edge-triggered signals derived from two consecutive snapshots.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputEdges {
    pub mouse: Point,
    pub left: bool,
    pub right: bool,
    pub start_key: bool,
    pub goal_key: bool,
    pub path_key: bool,
    pub scatter_key: bool,
    pub clear_key: bool,
    pub quit: bool,
}

#[inline]
fn rising(now: bool, before: bool) -> bool {
    now && !before
}

impl InputSnapshot {
    /// Derive the edge-triggered signals for this frame, given the previous
    /// frame's snapshot.
    pub fn edges(&self, prev: &InputSnapshot) -> InputEdges {
        InputEdges {
            mouse: self.mouse,
            left: rising(self.left, prev.left),
            right: rising(self.right, prev.right),
            start_key: rising(self.start_key, prev.start_key),
            goal_key: rising(self.goal_key, prev.goal_key),
            path_key: rising(self.path_key, prev.path_key),
            scatter_key: rising(self.scatter_key, prev.scatter_key),
            clear_key: rising(self.clear_key, prev.clear_key),
            quit: self.quit,
        }
    }
}
