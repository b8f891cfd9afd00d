//! Undo / redo: apply the replays handed back by the history log.

use super::TextEditor;
use core_events::EditorEvent;
use core_state::{HistoryReplay, LineStatus};
use tracing::trace;

impl TextEditor {
    /// Step back one logical edit. Returns false when there is nothing to
    /// undo or the editor is read-only.
    pub fn undo(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        match self.history.undo() {
            Some(replay) => {
                self.replay(replay);
                true
            }
            None => false,
        }
    }

    /// Re-apply the next logical edit.
    pub fn redo(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        match self.history.redo() {
            Some(replay) => {
                self.replay(replay);
                true
            }
            None => false,
        }
    }

    fn replay(&mut self, replay: HistoryReplay) {
        if let Some(paired) = &replay.removed_on_added {
            let row = paired.cursor.row;
            for _ in 0..replay.rows_to_drop() {
                if self.store.line_count() <= row + 1 {
                    break;
                }
                self.store.remove_line(row + 1);
            }
        }

        let start = replay.cursor.row;
        let grows = matches!(
            (replay.undoing, replay.status),
            (true, LineStatus::Removed) | (false, LineStatus::Added)
        );
        for (i, line) in replay.lines.iter().enumerate() {
            if i == 0 {
                self.store.replace_line(start, line.clone());
            } else if grows {
                self.store.insert_line(start + i, line.clone());
            } else if self.store.line_count() > start + 1 {
                self.store.remove_line(start + 1);
            }
        }

        self.history.finish_replay();
        trace!(target: "actions.edit", op = if replay.undoing { "undo" } else { "redo" }, status = ?replay.status, lines = replay.lines.len(), row = replay.final_cursor.row, col = replay.final_cursor.col, "replay");
        self.anchor = None;
        self.sticky_x = None;
        self.last_was_kill = false;
        self.place_cursor(replay.final_cursor);
        self.observers.notify(&EditorEvent::HistoryReplayed(replay));
    }
}
