//! Text edit action handling (insert/delete/newline/kill).
//!
//! Deletions and kills that hit the edge of the buffer report `at_edge`;
//! insertions that change nothing (read-only, empty text) are simply clean.

use super::DispatchResult;
use crate::{EditKind, TextEditor};

pub(crate) fn handle_edit(editor: &mut TextEditor, kind: EditKind) -> DispatchResult {
    let lines_before = editor.line_count();
    let (changed, may_hit_edge) = match &kind {
        EditKind::InsertChar(c) => (editor.insert_char(*c), false),
        EditKind::InsertText(text) => (editor.insert_text(text), false),
        EditKind::Newline => (editor.newline(), false),
        EditKind::DeleteLeft => (editor.delete_left(), true),
        EditKind::DeleteRight => (editor.delete_right(), true),
        EditKind::DeleteWordForward => (editor.delete_word_forward(), true),
        EditKind::DeleteWordBackward => (editor.delete_word_backward(), true),
        EditKind::KillToLineEnd => (editor.kill_to_end(), true),
        EditKind::KillToLineStart => (editor.kill_to_start(), true),
    };
    let after = editor.cursor();
    tracing::trace!(target: "actions.dispatch", ?kind, changed, to_row = after.row, to_col = after.col, "edit");
    if !changed && may_hit_edge && !editor.read_only() {
        return DispatchResult::at_edge();
    }
    DispatchResult::from_edit(changed, lines_before, editor.line_count())
}
