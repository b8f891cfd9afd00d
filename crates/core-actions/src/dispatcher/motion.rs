//! Motion sub-dispatch (cursor movement).

use super::DispatchResult;
use crate::{MotionKind, TextEditor};

pub(crate) fn handle_motion(
    editor: &mut TextEditor,
    kind: MotionKind,
    extend: bool,
) -> DispatchResult {
    let before = editor.cursor();
    let was_selecting = editor.is_selecting();
    let moved = match kind {
        MotionKind::Left => editor.move_left(extend),
        MotionKind::Right => editor.move_right(extend),
        MotionKind::Up => editor.move_up(extend),
        MotionKind::Down => editor.move_down(extend),
        MotionKind::LineStart => editor.move_line_start(extend),
        MotionKind::LineEnd => editor.move_line_end(extend),
        MotionKind::BufferStart => editor.move_buffer_start(extend),
        MotionKind::BufferEnd => editor.move_buffer_end(extend),
        MotionKind::WordForward => editor.move_word_forward(extend),
        MotionKind::WordBackward => editor.move_word_backward(extend),
    };
    let after = editor.cursor();
    tracing::trace!(target: "actions.dispatch", ?kind, extend, moved, from_row = before.row, from_col = before.col, to_row = after.row, to_col = after.col, "motion");
    if moved {
        DispatchResult::dirty()
    } else if was_selecting && !extend {
        // the motion did not move but dropped the selection
        let mut res = DispatchResult::at_edge();
        res.dirty = true;
        res
    } else {
        DispatchResult::at_edge()
    }
}
