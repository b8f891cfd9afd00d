//! Region operations: select all, copy, cut, paste.

use super::TextEditor;
use core_text::{Position, line_to_string};
use tracing::debug;

impl TextEditor {
    /// Anchor at the origin, cursor at the end of the buffer.
    pub fn select_all(&mut self) {
        self.anchor = Some(Position::origin());
        self.sticky_x = None;
        self.last_was_kill = false;
        self.place_cursor(self.store.end_position());
    }

    /// Text of the active selection, LF-joined.
    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection()?.bounds();
        Some(self.span_text(start, end))
    }

    pub(super) fn span_text(&self, start: Position, end: Position) -> String {
        if start.row == end.row {
            let line = self.store.line(start.row);
            let to = end.col.min(line.len());
            return line_to_string(&line[start.col.min(to)..to]);
        }
        let mut out = String::new();
        for row in start.row..=end.row {
            let line = self.store.line(row);
            let from = if row == start.row { start.col.min(line.len()) } else { 0 };
            let to = if row == end.row { end.col.min(line.len()) } else { line.len() };
            out.push_str(&line_to_string(&line[from..to]));
            if row != end.row {
                out.push('\n');
            }
        }
        out
    }

    /// Delete the selection as one undoable edit and return its text.
    pub fn clear_region(&mut self) -> Option<String> {
        if self.read_only {
            return None;
        }
        let (start, end) = self.selection()?.bounds();
        let text = self.span_text(start, end);
        self.last_was_kill = false;
        self.delete_span(start, end, start);
        Some(text)
    }

    /// Copy the selection, or the current line when nothing is selected.
    pub fn copy(&mut self) {
        let text = self
            .selected_text()
            .unwrap_or_else(|| line_to_string(self.store.line(self.cursor.row)));
        debug!(target: "actions.clipboard", len = text.len(), "copy");
        self.clipboard.set(&text);
        self.last_was_kill = false;
    }

    /// Move the selection to the clipboard. Returns false without a selection.
    pub fn cut(&mut self) -> bool {
        match self.clear_region() {
            Some(text) => {
                debug!(target: "actions.clipboard", len = text.len(), "cut");
                self.clipboard.set(&text);
                true
            }
            None => false,
        }
    }

    /// Insert the clipboard text at the cursor (replacing any selection).
    pub fn paste(&mut self) -> bool {
        let text = self.clipboard.get();
        debug!(target: "actions.clipboard", len = text.len(), "paste");
        self.insert_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use crate::TextEditor;
    use core_text::{Position, line_to_string};
    use pretty_assertions::assert_eq;

    fn lines(ed: &TextEditor) -> Vec<String> {
        ed.store().lines().iter().map(|l| line_to_string(l)).collect()
    }

    #[test]
    fn select_all_spans_buffer() {
        let mut ed = TextEditor::with_text("ab\ncd");
        ed.select_all();
        assert_eq!(ed.selected_text().as_deref(), Some("ab\ncd"));
        assert_eq!(ed.cursor(), Position::new(1, 2));
    }

    #[test]
    fn copy_without_selection_takes_current_line() {
        let mut ed = TextEditor::with_text("first\nsecond");
        ed.set_cursor(Position::new(1, 3));
        ed.copy();
        assert_eq!(ed.clipboard_text(), "second");
        assert_eq!(lines(&ed), vec!["first", "second"]);
    }

    #[test]
    fn cut_then_paste_moves_text() {
        let mut ed = TextEditor::with_text("hello world");
        ed.set_cursor(Position::new(0, 5));
        ed.move_line_end(true);
        assert!(ed.cut());
        assert_eq!(lines(&ed), vec!["hello"]);
        assert_eq!(ed.clipboard_text(), " world");
        ed.set_cursor(Position::origin());
        assert!(ed.paste());
        assert_eq!(lines(&ed), vec![" worldhello"]);
        assert_eq!(ed.cursor(), Position::new(0, 6));
    }

    #[test]
    fn cut_without_selection_does_nothing() {
        let mut ed = TextEditor::with_text("abc");
        assert!(!ed.cut());
        assert!(ed.history().is_empty());
    }

    #[test]
    fn multi_row_region_text_and_clear() {
        let mut ed = TextEditor::with_text("abc\ndef\nghi");
        ed.set_cursor(Position::new(0, 1));
        ed.start_selection();
        ed.place_cursor(Position::new(2, 2));
        assert_eq!(ed.selected_text().as_deref(), Some("bc\ndef\ngh"));
        assert_eq!(ed.clear_region().as_deref(), Some("bc\ndef\ngh"));
        assert_eq!(lines(&ed), vec!["ai"]);
        assert_eq!(ed.cursor(), Position::new(0, 1));
    }

    #[test]
    fn paste_of_empty_clipboard_is_a_no_op() {
        let mut ed = TextEditor::with_text("abc");
        assert!(!ed.paste());
        assert!(ed.history().is_empty());
    }
}
