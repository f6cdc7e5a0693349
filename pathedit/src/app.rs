//! The frame loop: poll → update → present.

use std::error::Error;

use crate::editor::Editor;
use crate::frontend::Frontend;

/// Run the editor against a frontend until quit or a frontend error.
///
/// The per-frame ordering is fixed: input edges are handled first, grid
/// mutation and search happen inside the update, and rendering sees the
/// resulting state. The frontend is always closed, error or not.
pub fn run(editor: &mut Editor, frontend: &mut dyn Frontend) -> Result<(), Box<dyn Error>> {
    frontend.init(editor.title())?;

    let result = loop {
        let snap = match frontend.poll() {
            Ok(snap) => snap,
            Err(e) => break Err(e),
        };
        if !editor.frame(snap) {
            break Ok(());
        }
        if let Err(e) = frontend.present(&editor.scene()) {
            break Err(e);
        }
    };

    frontend.close();
    result
}
