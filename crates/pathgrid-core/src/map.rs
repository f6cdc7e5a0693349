//! The [`GridMap`] — the dense cell array, its boundary ring, and the edit
//! rules that keep it consistent.
//!
//! The map is a fixed `N×N` array with `N = interior + 2`: the outermost ring
//! is a permanent `Boundary` frame, so every interior cell has eight
//! neighbours that exist, and no coordinate arithmetic can escape the array.
//! Edit operations that would violate an invariant degrade to silent no-ops;
//! nothing here returns an error.

use crate::cell::GridCell;
use crate::geom::Point;
use crate::role::Role;

/// The discretised world space: a square grid of [`GridCell`]s with a
/// permanent boundary ring, at most one `Start`, and at most one `Goal`.
pub struct GridMap {
    cells: Vec<GridCell>,
    size: i32,
    pitch: i32,
    window_px: i32,
    start: Option<Point>,
    goal: Option<Point>,
}

impl GridMap {
    /// Create a map with `interior × interior` editable cells, drawn into a
    /// square window of `window_px` pixels on each side.
    ///
    /// Every ring cell starts as `Boundary`, every interior cell as `Empty`.
    /// Screen centres are derived here once; ring cells sit half a pitch
    /// outside the window, which is what keeps screen-space lookups in range.
    pub fn new(interior: i32, window_px: i32) -> Self {
        let size = interior + 2;
        let pitch = window_px / interior;
        let mut cells = Vec::with_capacity((size * size) as usize);
        for y in 0..size {
            for x in 0..size {
                let on_ring = x == 0 || y == 0 || x == size - 1 || y == size - 1;
                let role = if on_ring { Role::Boundary } else { Role::Empty };
                let screen = Point::new(x * pitch - pitch / 2, y * pitch - pitch / 2);
                cells.push(GridCell::new(Point::new(x, y), screen, role));
            }
        }
        Self {
            cells,
            size,
            pitch,
            window_px,
            start: None,
            goal: None,
        }
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Total cells on one axis (`interior + 2`).
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Editable cells on one axis.
    #[inline]
    pub fn interior(&self) -> i32 {
        self.size - 2
    }

    /// Pixel distance between adjacent cell centres.
    #[inline]
    pub fn pitch(&self) -> i32 {
        self.pitch
    }

    /// Side of the square pixel window the interior maps onto.
    #[inline]
    pub fn window_px(&self) -> i32 {
        self.window_px
    }

    /// Half-extent of a drawn cell square: half the pitch minus a small
    /// visual buffer so adjacent cells read as distinct.
    #[inline]
    pub fn half_extent(&self) -> i32 {
        self.pitch / 2 - self.pitch / 10
    }

    /// Whether `p` is inside the array (ring included).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.size && p.y < self.size
    }

    /// Whether `p` lies on the permanent outer ring.
    #[inline]
    pub fn on_ring(&self, p: Point) -> bool {
        p.x == 0 || p.y == 0 || p.x == self.size - 1 || p.y == self.size - 1
    }

    #[inline]
    fn idx(&self, p: Point) -> usize {
        (p.x + p.y * self.size) as usize
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// The cell at a discrete coordinate, or `None` if out of the array.
    pub fn cell(&self, p: Point) -> Option<&GridCell> {
        if self.contains(p) {
            Some(&self.cells[self.idx(p)])
        } else {
            None
        }
    }

    /// The role at `p`. Coordinates outside the array read as `Boundary`,
    /// which makes the outside non-traversable without a bounds check at
    /// every call site.
    #[inline]
    pub fn role(&self, p: Point) -> Role {
        if self.contains(p) {
            self.cells[self.idx(p)].role
        } else {
            Role::Boundary
        }
    }

    /// The discrete coordinate under a window pixel position.
    ///
    /// Divides by the cell pitch and adds the +1 boundary offset. For any
    /// pixel inside the window the derived index is an interior cell, so no
    /// bounds failure is possible.
    pub fn cell_from_screen(&self, px: i32, py: i32) -> Point {
        debug_assert!(px >= 0 && px < self.window_px && py >= 0 && py < self.window_px);
        Point::new(px / self.pitch + 1, py / self.pitch + 1)
    }

    /// Current `Start` position, if placed.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Current `Goal` position, if placed.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Iterate over the interior (visible, editable) cells in row-major order.
    pub fn interior_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|c| !self.on_ring(c.pos))
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Flip an interior cell between `Empty` and `Boundary` (obstacle).
    ///
    /// Cells holding any other role are left untouched, and the outer ring is
    /// never reassigned.
    pub fn toggle_obstacle(&mut self, p: Point) {
        if !self.contains(p) || self.on_ring(p) {
            return;
        }
        let i = self.idx(p);
        self.cells[i].role = match self.cells[i].role {
            Role::Empty => Role::Boundary,
            Role::Boundary => Role::Empty,
            other => other,
        };
    }

    /// Place the single `Start` marker at `p`.
    ///
    /// Clears any previous `Start`. Re-invoking on the current `Start`
    /// toggles it off. Rejected (no-op) when `p` holds the `Goal` or lies on
    /// the ring.
    pub fn set_start(&mut self, p: Point) {
        if !self.contains(p) || self.on_ring(p) {
            return;
        }
        let i = self.idx(p);
        match self.cells[i].role {
            Role::Goal => {}
            Role::Start => {
                self.cells[i].role = Role::Empty;
                self.start = None;
            }
            _ => {
                if let Some(prev) = self.start.take() {
                    let pi = self.idx(prev);
                    self.cells[pi].role = Role::Empty;
                }
                self.cells[i].role = Role::Start;
                self.start = Some(p);
            }
        }
    }

    /// Remove the `Start` marker, if placed.
    pub fn clear_start(&mut self) {
        if let Some(p) = self.start.take() {
            let i = self.idx(p);
            self.cells[i].role = Role::Empty;
        }
    }

    /// Place the single `Goal` marker at `p`.
    ///
    /// Same rules as [`set_start`](Self::set_start), with the roles swapped.
    pub fn set_goal(&mut self, p: Point) {
        if !self.contains(p) || self.on_ring(p) {
            return;
        }
        let i = self.idx(p);
        match self.cells[i].role {
            Role::Start => {}
            Role::Goal => {
                self.cells[i].role = Role::Empty;
                self.goal = None;
            }
            _ => {
                if let Some(prev) = self.goal.take() {
                    let pi = self.idx(prev);
                    self.cells[pi].role = Role::Empty;
                }
                self.cells[i].role = Role::Goal;
                self.goal = Some(p);
            }
        }
    }

    /// Remove the `Goal` marker, if placed.
    pub fn clear_goal(&mut self) {
        if let Some(p) = self.goal.take() {
            let i = self.idx(p);
            self.cells[i].role = Role::Empty;
        }
    }

    /// Reset every transient (`Path` / `Discovered`) cell back to `Empty`.
    ///
    /// `Boundary`, `Start`, and `Goal` are untouched. Callers run this before
    /// any edit and before any new search so stale markings never linger.
    pub fn reset_transient_marks(&mut self) {
        for cell in &mut self.cells {
            if cell.role.is_transient() {
                cell.role = Role::Empty;
            }
        }
    }

    /// Mark a reconstructed path on the grid.
    ///
    /// Endpoint cells keep their `Start`/`Goal` roles so they stay visually
    /// distinct, and `Boundary` is never overwritten; everything else on the
    /// path becomes `Path`.
    pub fn mark_path(&mut self, path: &[Point]) {
        for &p in path {
            if !self.contains(p) {
                continue;
            }
            let i = self.idx(p);
            if matches!(self.cells[i].role, Role::Empty | Role::Discovered) {
                self.cells[i].role = Role::Path;
            }
        }
    }

    /// Mark cells expanded during a search as `Discovered`.
    ///
    /// Only `Empty` cells are claimed; endpoints, obstacles, and path cells
    /// keep their roles.
    pub fn mark_discovered(&mut self, expanded: &[Point]) {
        for &p in expanded {
            if !self.contains(p) {
                continue;
            }
            let i = self.idx(p);
            if self.cells[i].role == Role::Empty {
                self.cells[i].role = Role::Discovered;
            }
        }
    }
}
