//! Kill to start / end of line with kill coalescing.
//!
//! A kill moves the removed text to the clipboard: appended when the previous
//! operation was also a kill, overwriting otherwise. Killing at a line edge
//! kills the line break itself and the clipboard receives `"\n"`; an empty
//! line killed forward is therefore removed outright.

use super::TextEditor;
use core_text::{Position, line_to_string};
use tracing::trace;

impl TextEditor {
    /// Kill from the cursor to the end of the line. Returns false when there
    /// is nothing to kill (end of the last line).
    pub fn kill_to_end(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        let at = self.cursor;
        let len = self.store.line_len(at.row);
        let killed = if at.col < len {
            let text = line_to_string(&self.store.line(at.row)[at.col..]);
            self.delete_span(at, Position::new(at.row, len), at);
            text
        } else if at.row + 1 < self.store.line_count() {
            self.delete_span(at, Position::new(at.row + 1, 0), at);
            "\n".to_string()
        } else {
            return false;
        };
        self.push_kill(&killed);
        true
    }

    /// Kill from the start of the line to the cursor. Returns false at the
    /// start of the buffer.
    pub fn kill_to_start(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        let at = self.cursor;
        let killed = if at.col > 0 {
            let line = self.store.line(at.row);
            let text = line_to_string(&line[..at.col.min(line.len())]);
            self.delete_span(Position::new(at.row, 0), at, at);
            text
        } else if at.row > 0 {
            let prev = at.row - 1;
            let start = Position::new(prev, self.store.line_len(prev));
            self.delete_span(start, at, at);
            "\n".to_string()
        } else {
            return false;
        };
        self.push_kill(&killed);
        true
    }

    fn push_kill(&mut self, text: &str) {
        if self.last_was_kill {
            self.clipboard.append(text);
        } else {
            self.clipboard.set(text);
        }
        trace!(target: "actions.edit", op = "kill", appended = self.last_was_kill, len = text.len(), "kill");
        self.last_was_kill = true;
    }
}
