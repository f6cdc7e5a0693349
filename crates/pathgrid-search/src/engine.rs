//! The [`PathEngine`]: runs a strategy over a map snapshot and writes the
//! result back as transient cell marks.

use pathgrid_core::{GridMap, Point};

use crate::astar::AStar;
use crate::traits::{Traversal, TraversalStrategy};

/// What a search call produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A path exists; start→goal ordered positions, start excluded, goal
    /// included.
    Found(Vec<Point>),
    /// The frontier was exhausted without reaching the goal.
    NoPath,
    /// Start or goal is not placed; the call was a no-op, not an error.
    MissingEndpoint,
}

/// Synchronous single-pair search over a [`GridMap`].
///
/// The engine holds a traversal strategy (A* by default) and runs it to
/// completion on each request. Node storage is created per call inside the
/// strategy and dropped when it returns.
pub struct PathEngine {
    strategy: Box<dyn TraversalStrategy>,
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PathEngine {
    /// An engine using the primary A* strategy.
    pub fn new() -> Self {
        Self {
            strategy: Box::new(AStar),
        }
    }

    /// An engine using a caller-chosen strategy.
    pub fn with_strategy(strategy: Box<dyn TraversalStrategy>) -> Self {
        Self { strategy }
    }

    /// Search without touching the map: returns the ordered path positions.
    ///
    /// Missing endpoints make this a silent no-op outcome.
    pub fn find_path(&self, map: &GridMap) -> SearchOutcome {
        match self.search(map) {
            None => SearchOutcome::MissingEndpoint,
            Some(t) => outcome(t.path),
        }
    }

    /// Search and write the result back into the map.
    ///
    /// Transient marks are reset first so stale markings never linger. When
    /// `show_discovered` is set, finalised cells are marked `Discovered`
    /// before the path overwrites its own cells with `Path`. On no-path the
    /// grid keeps no `Path` markings.
    pub fn run(&self, map: &mut GridMap, show_discovered: bool) -> SearchOutcome {
        map.reset_transient_marks();
        let Some(t) = self.search(map) else {
            return SearchOutcome::MissingEndpoint;
        };
        if show_discovered {
            map.mark_discovered(&t.expanded);
        }
        let out = outcome(t.path);
        if let SearchOutcome::Found(path) = &out {
            map.mark_path(path);
        }
        out
    }

    fn search(&self, map: &GridMap) -> Option<Traversal> {
        let (Some(start), Some(goal)) = (map.start(), map.goal()) else {
            log::debug!("search skipped: start or goal not placed");
            return None;
        };
        Some(self.strategy.traverse(map, start, goal))
    }
}

fn outcome(path: Option<Vec<Point>>) -> SearchOutcome {
    match path {
        Some(path) => {
            log::info!("goal found: {} step path", path.len());
            SearchOutcome::Found(path)
        }
        None => {
            log::info!("no path between start and goal");
            SearchOutcome::NoPath
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chebyshev;
    use crate::dfs::DepthFirst;
    use pathgrid_core::Role;

    /// 9×9 interior (11×11 total), 40px pitch.
    fn map9() -> GridMap {
        GridMap::new(9, 360)
    }

    fn with_endpoints(s: Point, g: Point) -> GridMap {
        let mut map = map9();
        map.set_start(s);
        map.set_goal(g);
        map
    }

    fn found(outcome: SearchOutcome) -> Vec<Point> {
        match outcome {
            SearchOutcome::Found(path) => path,
            other => panic!("expected a path, got {other:?}"),
        }
    }

    /// Every consecutive pair of path cells must be 8-adjacent, starting
    /// next to `start` and ending on `goal`.
    fn assert_contiguous(path: &[Point], start: Point, goal: Point) {
        assert!(!path.is_empty());
        assert_eq!(chebyshev(start, path[0]), 1);
        for w in path.windows(2) {
            assert_eq!(chebyshev(w[0], w[1]), 1);
        }
        assert_eq!(*path.last().unwrap(), goal);
    }

    #[test]
    fn open_grid_path_length_is_chebyshev_distance() {
        let start = Point::new(1, 1);
        let goal = Point::new(9, 9);
        let map = with_endpoints(start, goal);
        let path = found(PathEngine::new().find_path(&map));
        assert_eq!(path.len(), chebyshev(start, goal) as usize); // 8 steps
        assert_contiguous(&path, start, goal);
        // Purely diagonal.
        for (i, p) in path.iter().enumerate() {
            assert_eq!(*p, Point::new(2 + i as i32, 2 + i as i32));
        }
    }

    #[test]
    fn off_axis_path_length_is_chebyshev_distance() {
        let start = Point::new(2, 7);
        let goal = Point::new(8, 3);
        let map = with_endpoints(start, goal);
        let path = found(PathEngine::new().find_path(&map));
        assert_eq!(path.len(), chebyshev(start, goal) as usize);
        assert_contiguous(&path, start, goal);
    }

    #[test]
    fn wall_with_gap_routes_through_the_gap() {
        let start = Point::new(1, 1);
        let goal = Point::new(9, 9);
        let mut map = with_endpoints(start, goal);
        for y in 1..=9 {
            if y != 5 {
                map.toggle_obstacle(Point::new(5, y));
            }
        }
        let path = found(PathEngine::new().find_path(&map));
        assert!(path.contains(&Point::new(5, 5)));
        assert_eq!(path.len(), 8); // the gap lies on the diagonal
        assert_contiguous(&path, start, goal);
    }

    #[test]
    fn repeated_searches_yield_identical_paths() {
        let mut map = with_endpoints(Point::new(1, 5), Point::new(9, 4));
        map.toggle_obstacle(Point::new(4, 4));
        map.toggle_obstacle(Point::new(4, 5));
        map.toggle_obstacle(Point::new(6, 3));
        let engine = PathEngine::new();
        let first = engine.find_path(&map);
        let second = engine.find_path(&map);
        assert_eq!(first, second);
    }

    #[test]
    fn find_path_does_not_mark_the_grid() {
        let map = with_endpoints(Point::new(1, 1), Point::new(9, 9));
        let _ = PathEngine::new().find_path(&map);
        for cell in map.interior_cells() {
            assert!(!cell.role.is_transient());
        }
    }

    #[test]
    fn enclosed_goal_yields_no_path_and_no_markings() {
        let goal = Point::new(5, 5);
        let mut map = with_endpoints(Point::new(1, 1), goal);
        for np in goal.neighbors_8() {
            map.toggle_obstacle(np);
        }
        let engine = PathEngine::new();
        assert_eq!(engine.run(&mut map, false), SearchOutcome::NoPath);
        for cell in map.interior_cells() {
            assert_ne!(cell.role, Role::Path);
        }
        assert_eq!(map.role(goal), Role::Goal);
    }

    #[test]
    fn missing_endpoint_is_a_silent_noop() {
        let mut map = map9();
        map.set_start(Point::new(1, 1));
        let engine = PathEngine::new();
        assert_eq!(engine.find_path(&map), SearchOutcome::MissingEndpoint);
        assert_eq!(engine.run(&mut map, false), SearchOutcome::MissingEndpoint);
        for cell in map.interior_cells() {
            assert!(!cell.role.is_transient());
        }
    }

    #[test]
    fn run_marks_the_path_and_keeps_endpoints() {
        let start = Point::new(1, 1);
        let goal = Point::new(4, 1);
        let mut map = with_endpoints(start, goal);
        let path = found(PathEngine::new().run(&mut map, false));
        assert_eq!(path, vec![Point::new(2, 1), Point::new(3, 1), goal]);
        assert_eq!(map.role(Point::new(2, 1)), Role::Path);
        assert_eq!(map.role(Point::new(3, 1)), Role::Path);
        assert_eq!(map.role(start), Role::Start);
        assert_eq!(map.role(goal), Role::Goal);
    }

    #[test]
    fn run_can_mark_discovered_cells_and_reset_clears_them() {
        // A wall across the direct route makes the search close cells that
        // do not end up on the final path.
        let mut map = with_endpoints(Point::new(1, 1), Point::new(9, 1));
        for y in 1..=9 {
            if y != 8 {
                map.toggle_obstacle(Point::new(5, y));
            }
        }
        let engine = PathEngine::new();
        let _ = engine.run(&mut map, true);
        let discovered = map
            .interior_cells()
            .filter(|c| c.role == Role::Discovered)
            .count();
        assert!(discovered > 0);

        map.reset_transient_marks();
        for cell in map.interior_cells() {
            assert!(!cell.role.is_transient());
        }
    }

    #[test]
    fn consecutive_runs_never_accumulate_marks() {
        let mut map = with_endpoints(Point::new(1, 1), Point::new(9, 9));
        let engine = PathEngine::new();
        let first = found(engine.run(&mut map, true));
        let second = found(engine.run(&mut map, true));
        assert_eq!(first, second);
        let path_cells = map
            .interior_cells()
            .filter(|c| c.role == Role::Path)
            .count();
        // Goal carries its own role, so marked cells are path length − 1.
        assert_eq!(path_cells, first.len() - 1);
    }

    #[test]
    fn depth_first_strategy_is_selectable() {
        let start = Point::new(1, 1);
        let goal = Point::new(6, 6);
        let map = with_endpoints(start, goal);
        let engine = PathEngine::with_strategy(Box::new(DepthFirst));
        let path = found(engine.find_path(&map));
        // First-found, orthogonal-only: contiguous but not necessarily short.
        assert_eq!(chebyshev(start, path[0]), 1);
        for w in path.windows(2) {
            let d = w[1] - w[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
        assert_eq!(*path.last().unwrap(), goal);
    }

    #[test]
    fn depth_first_respects_walls() {
        let goal = Point::new(5, 5);
        let mut map = with_endpoints(Point::new(1, 1), goal);
        for np in goal.neighbors_8() {
            map.toggle_obstacle(np);
        }
        let engine = PathEngine::with_strategy(Box::new(DepthFirst));
        assert_eq!(engine.find_path(&map), SearchOutcome::NoPath);
    }
}
