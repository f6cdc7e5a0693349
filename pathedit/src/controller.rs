//! The edit controller: applies user actions to the map under its
//! invariants and triggers path invalidation.

use pathgrid_core::{GridMap, Point, Role};
use pathgrid_search::{PathEngine, SearchOutcome};
use rand::RngExt;

use crate::status::StatusKind;

/// A single user-initiated edit or command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Place or remove a wall.
    ToggleObstacle(Point),
    PlaceStart(Point),
    PlaceGoal(Point),
    /// Run the search and mark the result.
    RunSearch,
    /// Report a cell's values.
    Inspect(Point),
    /// Scatter random walls over empty interior cells.
    ScatterObstacles,
    /// Remove every user-placed wall.
    ClearObstacles,
}

/// Applies [`EditAction`]s to a [`GridMap`].
///
/// Every mutating action clears transient marks first, so a stale path never
/// survives an edit. Actions the map's invariants reject degrade to silent
/// no-ops inside the map itself.
pub struct EditController {
    engine: PathEngine,
    show_discovered: bool,
}

impl EditController {
    pub fn new(engine: PathEngine, show_discovered: bool) -> Self {
        Self {
            engine,
            show_discovered,
        }
    }

    /// Apply one action, returning a status message when the action has a
    /// user-visible outcome.
    pub fn apply(&self, map: &mut GridMap, action: EditAction) -> Option<(String, StatusKind)> {
        match action {
            EditAction::ToggleObstacle(p) => {
                map.reset_transient_marks();
                map.toggle_obstacle(p);
                None
            }
            EditAction::PlaceStart(p) => {
                map.reset_transient_marks();
                map.set_start(p);
                None
            }
            EditAction::PlaceGoal(p) => {
                map.reset_transient_marks();
                map.set_goal(p);
                None
            }
            EditAction::RunSearch => Some(self.run_search(map)),
            EditAction::Inspect(p) => map.cell(p).map(|cell| {
                (
                    format!(
                        "cell {}: {}, cost {}, centre {}px",
                        cell.pos, cell.role, cell.cost, cell.screen
                    ),
                    StatusKind::Info,
                )
            }),
            EditAction::ScatterObstacles => {
                map.reset_transient_marks();
                let placed = scatter_obstacles(map);
                Some((format!("scattered {placed} walls"), StatusKind::Info))
            }
            EditAction::ClearObstacles => {
                map.reset_transient_marks();
                let removed = clear_obstacles(map);
                Some((format!("cleared {removed} walls"), StatusKind::Info))
            }
        }
    }

    fn run_search(&self, map: &mut GridMap) -> (String, StatusKind) {
        match self.engine.run(map, self.show_discovered) {
            SearchOutcome::Found(path) => (
                format!("goal found: {} step path", path.len()),
                StatusKind::Success,
            ),
            SearchOutcome::NoPath => (
                "no path between start and goal".into(),
                StatusKind::Error,
            ),
            SearchOutcome::MissingEndpoint => (
                "place a start and a goal first".into(),
                StatusKind::Info,
            ),
        }
    }
}

/// Turn roughly a quarter of the empty interior cells into walls.
fn scatter_obstacles(map: &mut GridMap) -> usize {
    let mut rng = rand::rng();
    let mut placed = 0;
    for y in 1..=map.interior() {
        for x in 1..=map.interior() {
            let p = Point::new(x, y);
            if map.role(p) == Role::Empty && rng.random_range(0..4) == 0 {
                map.toggle_obstacle(p);
                placed += 1;
            }
        }
    }
    placed
}

/// Remove every interior wall; the outer ring is not interior and stays.
fn clear_obstacles(map: &mut GridMap) -> usize {
    let mut removed = 0;
    for y in 1..=map.interior() {
        for x in 1..=map.interior() {
            let p = Point::new(x, y);
            if map.role(p) == Role::Boundary {
                map.toggle_obstacle(p);
                removed += 1;
            }
        }
    }
    removed
}
