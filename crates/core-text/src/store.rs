//! Line store: the ordered line sequence backing one editor.
//!
//! Invariants:
//! - `line_count() >= 1` at all times; an empty buffer is exactly one empty line.
//! - Row lookups clamp to the last row instead of failing.

use crate::search::FindState;
use crate::width::display_size;
use crate::{Line, Position, join_lines, split_lines};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct LineStore {
    lines: Vec<Line>,
    pub(crate) find: FindState,
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LineStore {
    /// A store holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
            find: FindState::default(),
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut store = Self::new();
        store.load_from_text(text);
        store
    }

    /// Replace the whole content with `text`. CR characters are dropped.
    pub fn load_from_text(&mut self, text: &str) {
        self.lines = split_lines(text);
        self.find = FindState::default();
        debug!(target: "text.store", lines = self.lines.len(), "load_from_text");
    }

    /// Replace the whole content with `bytes`, decoding UTF-8 lossily.
    pub fn load_from_bytes(&mut self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        self.load_from_text(&text);
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Line at `row`, clamped to the last row.
    pub fn line(&self, row: usize) -> &Line {
        let row = self.clamp_row(row);
        &self.lines[row]
    }

    /// Mutable line at `row`, clamped to the last row.
    pub fn line_mut(&mut self, row: usize) -> &mut Line {
        let row = self.clamp_row(row);
        &mut self.lines[row]
    }

    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).len()
    }

    fn clamp_row(&self, row: usize) -> usize {
        row.min(self.lines.len() - 1)
    }

    /// Pull `pos` back inside the buffer: the row onto the last line, the
    /// column onto that line's end.
    pub fn clamp(&self, pos: Position) -> Position {
        let row = self.clamp_row(pos.row);
        Position::new(row, pos.col.min(self.lines[row].len()))
    }

    /// Insert `line` before `pos`; positions past the end append.
    pub fn insert_line(&mut self, pos: usize, line: Line) {
        let pos = pos.min(self.lines.len());
        self.lines.insert(pos, line);
        trace!(target: "text.store", pos, lines = self.lines.len(), "insert_line");
    }

    /// Remove the line at `pos`. Never removes the last remaining line and
    /// ignores out-of-range positions.
    pub fn remove_line(&mut self, pos: usize) {
        if pos >= self.lines.len() {
            return;
        }
        if self.lines.len() == 1 {
            // keep the single-line invariant: removing the only line empties it
            self.lines[0].clear();
            return;
        }
        self.lines.remove(pos);
        trace!(target: "text.store", pos, lines = self.lines.len(), "remove_line");
    }

    /// Overwrite the line at `pos`, appending when `pos >= line_count()`.
    pub fn replace_line(&mut self, pos: usize, line: Line) {
        if pos >= self.lines.len() {
            self.lines.push(line);
        } else {
            self.lines[pos] = line;
        }
    }

    /// Widest rendered line in `[first, last)`; `last` is clamped to the count.
    pub fn max_visible_width(&self, first: usize, last: usize, tab_width: usize) -> usize {
        let last = last.min(self.lines.len());
        if first >= last {
            return 0;
        }
        self.lines[first..last]
            .iter()
            .map(|line| display_size(line, 0, None, false, tab_width).0)
            .max()
            .unwrap_or(0)
    }

    /// Position just after the last unit of the buffer.
    pub fn end_position(&self) -> Position {
        let row = self.lines.len() - 1;
        Position::new(row, self.lines[row].len())
    }

    /// Whole content joined with LF.
    pub fn text(&self) -> String {
        join_lines(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{line_from_str, line_to_string};
    use pretty_assertions::assert_eq;

    fn strings(store: &LineStore) -> Vec<String> {
        store.lines().iter().map(|l| line_to_string(l)).collect()
    }

    #[test]
    fn clamp_pulls_positions_inside() {
        let store = LineStore::from_text("abc\nd");
        assert_eq!(store.clamp(Position::new(0, 2)), Position::new(0, 2));
        assert_eq!(store.clamp(Position::new(0, 9)), Position::new(0, 3));
        assert_eq!(store.clamp(Position::new(7, 9)), Position::new(1, 1));
        assert_eq!(LineStore::new().clamp(Position::new(3, 3)), Position::origin());
    }

    #[test]
    fn new_store_is_one_empty_line() {
        let store = LineStore::new();
        assert_eq!(store.line_count(), 1);
        assert!(store.line(0).is_empty());
    }

    #[test]
    fn load_round_trips_lf_only() {
        let store = LineStore::from_text("a\r\nb\nc");
        assert_eq!(strings(&store), vec!["a", "b", "c"]);
        assert_eq!(store.text(), "a\nb\nc");
    }

    #[test]
    fn load_trailing_newline_keeps_empty_tail() {
        let store = LineStore::from_text("x\n");
        assert_eq!(strings(&store), vec!["x", ""]);
        assert_eq!(store.text(), "x\n");
    }

    #[test]
    fn load_bytes_is_lossy() {
        let mut store = LineStore::new();
        store.load_from_bytes(b"ok\n\xffz");
        assert_eq!(store.line_count(), 2);
        assert_eq!(line_to_string(store.line(1)), "\u{FFFD}z");
    }

    #[test]
    fn line_lookup_clamps() {
        let store = LineStore::from_text("one\ntwo");
        assert_eq!(line_to_string(store.line(99)), "two");
    }

    #[test]
    fn remove_never_empties_store() {
        let mut store = LineStore::from_text("only");
        store.remove_line(0);
        assert_eq!(store.line_count(), 1);
        assert!(store.line(0).is_empty());
        store.remove_line(0);
        assert_eq!(store.line_count(), 1);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut store = LineStore::from_text("a\nb");
        store.remove_line(5);
        assert_eq!(strings(&store), vec!["a", "b"]);
    }

    #[test]
    fn replace_appends_past_end() {
        let mut store = LineStore::from_text("a");
        store.replace_line(0, line_from_str("A"));
        store.replace_line(4, line_from_str("B"));
        assert_eq!(strings(&store), vec!["A", "B"]);
    }

    #[test]
    fn insert_clamps_position() {
        let mut store = LineStore::from_text("a");
        store.insert_line(0, line_from_str("first"));
        store.insert_line(10, line_from_str("last"));
        assert_eq!(strings(&store), vec!["first", "a", "last"]);
    }

    #[test]
    fn max_visible_width_uses_tabs_and_wide_units() {
        let store = LineStore::from_text("ab\n\tx\n界界界");
        assert_eq!(store.max_visible_width(0, 2, 4), 5);
        assert_eq!(store.max_visible_width(0, 100, 4), 6);
        assert_eq!(store.max_visible_width(2, 1, 4), 0);
    }

    #[test]
    fn end_position_points_after_last_unit() {
        let store = LineStore::from_text("ab\ncde");
        assert_eq!(store.end_position(), Position::new(1, 3));
    }
}
