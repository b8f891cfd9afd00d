//! Undo / Redo dispatch.

use super::DispatchResult;
use crate::TextEditor;

pub(crate) fn handle_undo(editor: &mut TextEditor) -> DispatchResult {
    let before = editor.line_count();
    let undone = editor.undo();
    let after = editor.line_count();
    tracing::trace!(target: "actions.dispatch", op = "undo", undone, buffer_changed = (before != after), "undo");
    DispatchResult::from_edit(undone, before, after)
}

pub(crate) fn handle_redo(editor: &mut TextEditor) -> DispatchResult {
    let before = editor.line_count();
    let redone = editor.redo();
    let after = editor.line_count();
    tracing::trace!(target: "actions.dispatch", op = "redo", redone, buffer_changed = (before != after), "redo");
    DispatchResult::from_edit(redone, before, after)
}
