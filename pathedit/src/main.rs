//! 2D pathfinding editor — terminal binary.
//!
//! Run: cargo run --bin pathedit

use pathedit::app;
use pathedit::editor::{Editor, EditorConfig};
use pathedit::term::TermFrontend;

fn main() {
    let config = EditorConfig::default();
    let mut frontend = TermFrontend::new(config.window_px, config.interior);
    let mut editor = Editor::new(config);

    if let Err(e) = app::run(&mut editor, &mut frontend) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
