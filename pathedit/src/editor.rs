//! The per-frame editor model: snapshot in, actions applied, scene out.

use pathgrid_core::{GridMap, InputEdges, InputSnapshot, Point};
use pathgrid_search::PathEngine;

use crate::colors::role_color;
use crate::controller::{EditAction, EditController};
use crate::frontend::{CellQuad, Scene};
use crate::status::StatusLog;

/// Editor configuration. There is no other command-line surface.
pub struct EditorConfig {
    pub title: String,
    /// Side of the square window in pixels.
    pub window_px: i32,
    /// Editable cells on one axis.
    pub interior: i32,
    /// Mark cells the search expanded as `Discovered`.
    pub show_discovered: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: "2D Pathfinding".into(),
            window_px: 400,
            interior: 10,
            show_discovered: false,
        }
    }
}

/// The editor model.
///
/// Each frame: diff the raw snapshot into edge-triggered signals, translate
/// them to edit actions (pointer actions are dropped while the pointer is
/// outside the window), apply them through the controller, then hand the
/// frontend a scene to draw.
pub struct Editor {
    map: GridMap,
    controller: EditController,
    status: StatusLog,
    prev: InputSnapshot,
    window_px: i32,
    title: String,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            map: GridMap::new(config.interior, config.window_px),
            controller: EditController::new(PathEngine::new(), config.show_discovered),
            status: StatusLog::new(),
            prev: InputSnapshot::default(),
            window_px: config.window_px,
            title: config.title,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// Advance one frame. Returns `false` when the editor should quit.
    pub fn frame(&mut self, snap: InputSnapshot) -> bool {
        let edges = snap.edges(&self.prev);
        self.prev = snap;
        if edges.quit {
            return false;
        }
        for action in self.actions(&edges) {
            if let Some((text, kind)) = self.controller.apply(&mut self.map, action) {
                self.status.push(text, kind);
            }
        }
        true
    }

    /// Translate this frame's edges into edit actions.
    fn actions(&self, edges: &InputEdges) -> Vec<EditAction> {
        let mut out = Vec::new();
        let pointer = self.pointer_cell(edges.mouse);

        if edges.left {
            if let Some(p) = pointer {
                log::debug!("click at {} -> cell {p}", edges.mouse);
                out.push(EditAction::ToggleObstacle(p));
            }
        }
        if edges.right {
            if let Some(p) = pointer {
                out.push(EditAction::Inspect(p));
            }
        }
        if edges.start_key {
            if let Some(p) = pointer {
                out.push(EditAction::PlaceStart(p));
            }
        }
        if edges.goal_key {
            if let Some(p) = pointer {
                out.push(EditAction::PlaceGoal(p));
            }
        }
        if edges.path_key {
            out.push(EditAction::RunSearch);
        }
        if edges.scatter_key {
            out.push(EditAction::ScatterObstacles);
        }
        if edges.clear_key {
            out.push(EditAction::ClearObstacles);
        }
        out
    }

    /// The cell under a pointer position, or `None` when the pointer is
    /// outside the window (the event then never reaches the map).
    fn pointer_cell(&self, mouse: Point) -> Option<Point> {
        if mouse.x < 0 || mouse.y < 0 || mouse.x >= self.window_px || mouse.y >= self.window_px {
            return None;
        }
        Some(self.map.cell_from_screen(mouse.x, mouse.y))
    }

    /// Build the frame's scene: one quad per interior cell plus the most
    /// recent status message.
    pub fn scene(&self) -> Scene {
        let half = self.map.half_extent();
        let quads = self
            .map
            .interior_cells()
            .map(|cell| CellQuad {
                center: cell.screen,
                half,
                color: role_color(cell.role),
            })
            .collect();
        Scene {
            window_px: self.window_px,
            quads,
            status: self.status.last_line(),
        }
    }
}
