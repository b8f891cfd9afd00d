//! Text mutation: unit and text insertion, deletion, line split and merge.
//!
//! History shapes recorded per edit (O = Original, R = Replaced,
//! Rm = Removed, A = Added):
//! * in-line insert / delete: `O R`
//! * insert spanning lines (Enter, multi-line paste): `O A R`
//! * delete spanning lines (merge, multi-row region): `O Rm R`
//! * selection replaced by text: `O Rm A R`
//!
//! `R` always snapshots the row the cursor ends on, with that cursor.

use super::TextEditor;
use core_state::LineStatus;
use core_text::motion::{word_backward, word_forward};
use core_text::{Line, Position, split_lines};
use tracing::trace;

impl TextEditor {
    /// Type one unit. In overwrite mode the unit under the cursor is replaced
    /// (at end of line it is appended). A selection is replaced; LF splits the
    /// line.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.read_only || ch == '\r' {
            return false;
        }
        if ch == '\n' || self.selection().is_some() {
            let mut buf = [0u8; 4];
            return self.insert_text(ch.encode_utf8(&mut buf));
        }
        self.last_was_kill = false;
        let at = self.cursor;
        self.record(self.row_snapshot(at.row), at, LineStatus::Original);
        let line = self.store.line_mut(at.row);
        let col = at.col.min(line.len());
        if self.overwrite && col < line.len() {
            line[col] = ch;
        } else {
            line.insert(col, ch);
        }
        let after = Position::new(at.row, col + 1);
        self.record(self.row_snapshot(at.row), after, LineStatus::Replaced);
        trace!(target: "actions.edit", op = "insert_char", row = at.row, col = at.col, overwrite = self.overwrite, "edit");
        self.finish_edit(after);
        true
    }

    /// Insert `text` at the cursor, replacing the selection if there is one.
    /// The first fragment joins the current line at the cursor, the last one
    /// takes the rest of that line, and the cursor lands after the last
    /// fragment. CR is dropped.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if self.read_only {
            return false;
        }
        let fragments = split_lines(text);
        if fragments.len() == 1 && fragments[0].is_empty() {
            return false;
        }
        self.last_was_kill = false;
        match self.selection() {
            Some(sel) => {
                let (start, end) = sel.bounds();
                self.replace_span(start, end, fragments);
            }
            None => self.splice_at_cursor(fragments),
        }
        true
    }

    /// Split the line at the cursor.
    pub fn newline(&mut self) -> bool {
        self.insert_text("\n")
    }

    /// Delete the unit right of the cursor, or merge the next line into this
    /// one at end of line. Returns false at the end of the buffer.
    pub fn delete_right(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        self.last_was_kill = false;
        if self.delete_selection() {
            return true;
        }
        let at = self.cursor;
        let end = if at.col < self.store.line_len(at.row) {
            Position::new(at.row, at.col + 1)
        } else if at.row + 1 < self.store.line_count() {
            Position::new(at.row + 1, 0)
        } else {
            return false;
        };
        self.delete_span(at, end, at);
        true
    }

    /// Delete the unit left of the cursor, or merge this line into the
    /// previous one at column 0 (the cursor lands at the old end of the
    /// previous line). Returns false at the start of the buffer.
    pub fn delete_left(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        self.last_was_kill = false;
        if self.delete_selection() {
            return true;
        }
        let at = self.cursor;
        let start = if at.col > 0 {
            Position::new(at.row, at.col - 1)
        } else if at.row > 0 {
            Position::new(at.row - 1, self.store.line_len(at.row - 1))
        } else {
            return false;
        };
        self.delete_span(start, at, at);
        true
    }

    /// Delete from the cursor to the next word start.
    pub fn delete_word_forward(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        self.last_was_kill = false;
        if self.delete_selection() {
            return true;
        }
        let at = self.cursor;
        match word_forward(&self.store, at) {
            Some(end) => {
                self.delete_span(at, end, at);
                true
            }
            None => false,
        }
    }

    /// Delete from the previous word start to the cursor.
    pub fn delete_word_backward(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        self.last_was_kill = false;
        if self.delete_selection() {
            return true;
        }
        let at = self.cursor;
        match word_backward(&self.store, at) {
            Some(start) => {
                self.delete_span(start, at, at);
                true
            }
            None => false,
        }
    }

    fn delete_selection(&mut self) -> bool {
        match self.selection() {
            Some(sel) => {
                let (start, end) = sel.bounds();
                self.delete_span(start, end, start);
                true
            }
            None => false,
        }
    }

    /// Delete `[start, end)` as one undoable edit. `restore` is where undo
    /// puts the cursor back; for a single-row span it must be on that row.
    pub(super) fn delete_span(&mut self, start: Position, end: Position, restore: Position) {
        if start.row == end.row {
            self.record(self.row_snapshot(start.row), restore, LineStatus::Original);
            self.remove_span(start, end);
        } else {
            self.record(self.row_snapshot(restore.row), restore, LineStatus::Original);
            self.record(
                self.rows_snapshot(start.row, end.row),
                start,
                LineStatus::Removed,
            );
            self.remove_span(start, end);
        }
        self.record(self.row_snapshot(start.row), start, LineStatus::Replaced);
        trace!(target: "actions.edit", op = "delete_span", from_row = start.row, from_col = start.col, to_row = end.row, to_col = end.col, "edit");
        self.finish_edit(start);
    }

    fn splice_at_cursor(&mut self, fragments: Vec<Line>) {
        let at = self.cursor;
        let multi = fragments.len() > 1;
        self.record(self.row_snapshot(at.row), at, LineStatus::Original);
        let end = self.splice(at, fragments);
        if multi {
            self.record(self.rows_snapshot(at.row, end.row), at, LineStatus::Added);
        }
        self.record(self.row_snapshot(end.row), end, LineStatus::Replaced);
        trace!(target: "actions.edit", op = "insert_text", row = at.row, col = at.col, to_row = end.row, to_col = end.col, "edit");
        self.finish_edit(end);
    }

    fn replace_span(&mut self, start: Position, end: Position, fragments: Vec<Line>) {
        self.record(self.row_snapshot(start.row), start, LineStatus::Original);
        self.record(
            self.rows_snapshot(start.row, end.row),
            start,
            LineStatus::Removed,
        );
        self.remove_span(start, end);
        let finish = self.splice(start, fragments);
        self.record(
            self.rows_snapshot(start.row, finish.row),
            start,
            LineStatus::Added,
        );
        self.record(self.row_snapshot(finish.row), finish, LineStatus::Replaced);
        trace!(target: "actions.edit", op = "replace_selection", from_row = start.row, from_col = start.col, to_row = finish.row, to_col = finish.col, "edit");
        self.finish_edit(finish);
    }

    /// Remove `[start, end)` from the store. No history.
    fn remove_span(&mut self, start: Position, end: Position) {
        if start.row == end.row {
            let line = self.store.line_mut(start.row);
            let to = end.col.min(line.len());
            let from = start.col.min(to);
            line.drain(from..to);
            return;
        }
        let last = self.store.line(end.row);
        let tail: Line = last[end.col.min(last.len())..].to_vec();
        let first = self.store.line_mut(start.row);
        first.truncate(start.col);
        first.extend(tail);
        for _ in start.row..end.row {
            self.store.remove_line(start.row + 1);
        }
    }

    /// Splice `fragments` in at `at`. Returns the position after the last
    /// fragment. No history.
    fn splice(&mut self, at: Position, fragments: Vec<Line>) -> Position {
        let mut fragments = fragments.into_iter();
        let line = self.store.line_mut(at.row);
        let rest = line.split_off(at.col.min(line.len()));
        if let Some(first) = fragments.next() {
            line.extend(first);
        }
        let mut row = at.row;
        for fragment in fragments {
            row += 1;
            self.store.insert_line(row, fragment);
        }
        let last = self.store.line_mut(row);
        let col = last.len();
        last.extend(rest);
        Position::new(row, col)
    }
}
