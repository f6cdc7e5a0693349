//! The rendering/window collaborator seam.
//!
//! A frontend owns the window (or terminal), reports raw input once per
//! frame, and draws the [`Scene`] the editor hands it. The editor never
//! talks to a concrete backend directly.

use std::error::Error;

use pathgrid_core::{Color, InputSnapshot, Point};

use crate::status::StatusKind;

/// One cell to draw: screen-space centre, half-extent of the square (half
/// the cell pitch minus the visual buffer), and fill colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellQuad {
    pub center: Point,
    pub half: i32,
    pub color: Color,
}

/// Everything a frontend needs to draw one frame.
pub struct Scene {
    /// Side of the square window in pixels.
    pub window_px: i32,
    /// Interior cells in row-major order.
    pub quads: Vec<CellQuad>,
    /// Most recent status message, if any.
    pub status: Option<(String, StatusKind)>,
}

/// A window/rendering backend.
pub trait Frontend {
    /// Open the window / take over the terminal.
    fn init(&mut self, title: &str) -> Result<(), Box<dyn Error>>;

    /// Report this frame's raw input state. Blocking briefly to pace the
    /// frame loop is the frontend's choice.
    fn poll(&mut self) -> Result<InputSnapshot, Box<dyn Error>>;

    /// Draw a frame.
    fn present(&mut self, scene: &Scene) -> Result<(), Box<dyn Error>>;

    /// Restore the window / terminal. Must be safe to call after an error.
    fn close(&mut self);
}
