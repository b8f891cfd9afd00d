//! Dispatcher applying `Action` to a `TextEditor`.
//!
//! Sub-modules:
//! * `motion` - cursor movement
//! * `edit`   - text mutation and kills
//! * `undo`   - undo / redo
//!
//! Region, find and mode actions are small enough to live here.

use crate::{Action, TextEditor};

mod edit;
mod motion;
mod undo;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Something visible changed (text, cursor, selection or mode).
    pub dirty: bool,
    /// The line count changed; per-row render caches must be dropped.
    pub buffer_changed: bool,
    /// The action ran into the edge of the buffer and did nothing (delete at
    /// the start/end, motion past the first/last unit). Hosts may use this to
    /// fall back to e.g. focus navigation.
    pub at_edge: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            buffer_changed: false,
            at_edge: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            buffer_changed: false,
            at_edge: false,
        }
    }
    pub fn buffer_changed() -> Self {
        Self {
            dirty: true,
            buffer_changed: true,
            at_edge: false,
        }
    }
    pub fn at_edge() -> Self {
        Self {
            dirty: false,
            buffer_changed: false,
            at_edge: true,
        }
    }

    /// Classify a mutation by whether it touched the line count.
    pub(crate) fn from_edit(changed: bool, lines_before: usize, lines_after: usize) -> Self {
        match (changed, lines_before != lines_after) {
            (false, _) => Self::clean(),
            (true, true) => Self::buffer_changed(),
            (true, false) => Self::dirty(),
        }
    }
}

/// Apply an action to the editor.
pub fn dispatch(editor: &mut TextEditor, action: Action) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", ?action, "dispatch");
    match action {
        Action::Motion { kind, extend } => motion::handle_motion(editor, kind, extend),
        Action::Edit(kind) => edit::handle_edit(editor, kind),
        Action::Undo => undo::handle_undo(editor),
        Action::Redo => undo::handle_redo(editor),
        Action::SelectAll => {
            editor.select_all();
            DispatchResult::dirty()
        }
        Action::ClearSelection => {
            if editor.is_selecting() {
                editor.clear_selection();
                DispatchResult::dirty()
            } else {
                DispatchResult::clean()
            }
        }
        Action::Copy => {
            editor.copy();
            DispatchResult::clean()
        }
        Action::Cut => {
            let before = editor.line_count();
            let cut = editor.cut();
            DispatchResult::from_edit(cut, before, editor.line_count())
        }
        Action::Paste => {
            let before = editor.line_count();
            let pasted = editor.paste();
            DispatchResult::from_edit(pasted, before, editor.line_count())
        }
        Action::FindNext(text) => {
            let result = editor.find_next(&text);
            tracing::trace!(target: "actions.dispatch", op = "find_next", found = result.found, wrapped = result.wrapped, "find");
            if result.found {
                DispatchResult::dirty()
            } else {
                DispatchResult::clean()
            }
        }
        Action::FindPrevious(text) => {
            let result = editor.find_previous(&text);
            tracing::trace!(target: "actions.dispatch", op = "find_previous", found = result.found, wrapped = result.wrapped, "find");
            if result.found {
                DispatchResult::dirty()
            } else {
                DispatchResult::clean()
            }
        }
        Action::ReplaceNext { find, replacement } => {
            let before = editor.line_count();
            let result = editor.replace_next(&find, &replacement);
            DispatchResult::from_edit(result.found, before, editor.line_count())
        }
        Action::ReplaceAll { find, replacement } => {
            let replaced = editor.replace_all(&find, &replacement);
            DispatchResult::from_edit(replaced, 0, 0)
        }
        Action::ToggleOverwrite => {
            editor.set_overwrite(!editor.overwrite());
            tracing::trace!(target: "actions.dispatch", overwrite = editor.overwrite(), "toggle_overwrite");
            DispatchResult::dirty()
        }
        Action::SetViewport { width, height } => {
            editor.set_viewport(width, height);
            DispatchResult::dirty()
        }
    }
}
