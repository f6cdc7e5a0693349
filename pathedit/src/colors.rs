//! The fixed six-role palette exposed to the rendering collaborator.

use pathgrid_core::{Color, Role};

/// Walls and the outer ring — light grey.
pub const BOUNDARY: Color = Color::from_rgb(200, 200, 200);
/// Cells on the found path — blue.
pub const PATH: Color = Color::from_rgb(100, 100, 255);
/// Cells expanded during the search — muted green.
pub const DISCOVERED: Color = Color::from_rgb(150, 200, 150);
/// The start marker — pale green.
pub const START: Color = Color::from_rgb(180, 255, 180);
/// The goal marker — red.
pub const GOAL: Color = Color::from_rgb(200, 100, 100);
/// Untouched cells — dark grey.
pub const EMPTY: Color = Color::from_rgb(100, 100, 100);

/// The colour a cell is drawn with, by role.
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Boundary => BOUNDARY,
        Role::Path => PATH,
        Role::Discovered => DISCOVERED,
        Role::Start => START,
        Role::Goal => GOAL,
        Role::Empty => EMPTY,
    }
}
