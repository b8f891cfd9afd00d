//! Find / replace driven through the store's continuous find state.
//!
//! A match is shown by selecting it. Repeated calls keep walking from the
//! last match until the cursor is moved by anything else, which restarts the
//! walk from the cursor (or the start of the selection).

use super::TextEditor;
use core_state::LineStatus;
use core_text::{FindResult, Position};
use tracing::debug;

impl TextEditor {
    fn prepare_find(&mut self) {
        if self.continuous_find {
            return;
        }
        let from = self
            .selection()
            .map_or(self.cursor, |sel| sel.bounds().0);
        self.store.reset_find_state(from);
    }

    fn select_match(&mut self, pos: Position, len: usize) {
        self.anchor = Some(pos);
        self.sticky_x = None;
        self.last_was_kill = false;
        self.place_cursor(Position::new(pos.row, pos.col + len));
        self.continuous_find = true;
    }

    /// Select the next match of `text`, wrapping past the end of the buffer.
    pub fn find_next(&mut self, text: &str) -> FindResult {
        self.prepare_find();
        let result = self
            .store
            .find_next(text, self.search.match_case, self.search.match_whole_word);
        if result.found {
            self.select_match(result.pos, text.chars().count());
        }
        result
    }

    /// Select the previous match of `text`, wrapping past the start.
    pub fn find_previous(&mut self, text: &str) -> FindResult {
        self.prepare_find();
        let result = self.store.find_previous(
            text,
            self.search.match_case,
            self.search.match_whole_word,
        );
        if result.found {
            self.select_match(result.pos, text.chars().count());
        }
        result
    }

    /// Replace the next match of `find` and select the inserted text. The
    /// walk resumes after the replacement.
    pub fn replace_next(&mut self, find: &str, replacement: &str) -> FindResult {
        if self.read_only {
            return FindResult::not_found();
        }
        let result = self.find_next(find);
        if !result.found {
            return result;
        }
        if replacement.is_empty() {
            self.clear_region();
        } else {
            self.insert_text(replacement);
            self.anchor = Some(result.pos);
        }
        self.store.reset_find_state(self.cursor);
        self.continuous_find = true;
        debug!(target: "actions.edit", op = "replace_next", row = result.pos.row, col = result.pos.col, "edit");
        result
    }

    /// Replace every match of `find` as one undoable edit and select the
    /// last replacement. Replacements spanning lines are refused.
    pub fn replace_all(&mut self, find: &str, replacement: &str) -> bool {
        if self.read_only || find.is_empty() {
            return false;
        }
        if replacement.contains(['\n', '\r']) {
            debug!(target: "actions.edit", "replace_all_multiline_refused");
            return false;
        }
        let before = self.store.lines().to_vec();
        let (last, found) = self.store.replace_all(
            find,
            self.search.match_case,
            self.search.match_whole_word,
            replacement,
        );
        if !found {
            return false;
        }
        let end = Position::new(last.row, last.col + replacement.chars().count());
        let after = self.store.lines();
        let changed = |row: &usize| before[*row] != after[*row];
        let first = (0..before.len()).find(changed);
        let last_changed = (0..before.len()).rev().find(changed);
        if let (Some(first), Some(last_changed)) = (first, last_changed) {
            let cursor = self.cursor;
            let at = Position::new(first, 0);
            self.record(vec![before[cursor.row].clone()], cursor, LineStatus::Original);
            self.record(
                before[first..=last_changed].to_vec(),
                at,
                LineStatus::Removed,
            );
            self.record(self.rows_snapshot(first, last_changed), at, LineStatus::Added);
            self.record(self.row_snapshot(end.row), end, LineStatus::Replaced);
            self.last_was_kill = false;
            self.finish_edit(end);
        } else {
            self.place_cursor(end);
        }
        self.anchor = Some(last);
        self.store.reset_find_state(self.cursor);
        self.continuous_find = true;
        debug!(target: "actions.edit", op = "replace_all", row = last.row, col = last.col, "edit");
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{SearchOptions, TextEditor};
    use core_text::{Position, line_to_string};
    use pretty_assertions::assert_eq;

    fn lines(ed: &TextEditor) -> Vec<String> {
        ed.store().lines().iter().map(|l| line_to_string(l)).collect()
    }

    #[test]
    fn whole_word_find_skips_embedded_matches() {
        let mut ed = TextEditor::with_text("concatenate cat scatter");
        ed.set_search_options(SearchOptions {
            match_case: false,
            match_whole_word: true,
        });
        let result = ed.find_next("cat");
        assert!(result.found);
        assert_eq!(result.pos, Position::new(0, 12));
        assert_eq!(ed.selected_text().as_deref(), Some("cat"));
        let again = ed.find_next("cat");
        assert_eq!(again.pos, Position::new(0, 12));
        assert!(again.wrapped);
    }

    #[test]
    fn find_walks_forward_and_back() {
        let mut ed = TextEditor::with_text("ab ab\nab");
        assert_eq!(ed.find_next("ab").pos, Position::new(0, 0));
        assert_eq!(ed.find_next("ab").pos, Position::new(0, 3));
        assert_eq!(ed.find_next("ab").pos, Position::new(1, 0));
        assert_eq!(ed.find_previous("ab").pos, Position::new(0, 3));
        assert_eq!(ed.cursor(), Position::new(0, 5));
    }

    #[test]
    fn moving_the_cursor_restarts_the_walk() {
        let mut ed = TextEditor::with_text("x x x");
        ed.find_next("x");
        ed.find_next("x");
        ed.set_cursor(Position::origin());
        assert_eq!(ed.find_next("x").pos, Position::origin());
    }

    #[test]
    fn missing_needle_leaves_cursor() {
        let mut ed = TextEditor::with_text("abc");
        ed.set_cursor(Position::new(0, 1));
        assert!(!ed.find_next("zz").found);
        assert!(!ed.find_next("").found);
        assert_eq!(ed.cursor(), Position::new(0, 1));
        assert!(ed.selection().is_none());
    }

    #[test]
    fn replace_all_rewrites_every_match_as_one_edit() {
        let mut ed = TextEditor::with_text("foo bar foo");
        assert!(ed.replace_all("foo", "baz"));
        assert_eq!(lines(&ed), vec!["baz bar baz"]);
        assert_eq!(ed.selected_text().as_deref(), Some("baz"));
        assert!(ed.undo());
        assert_eq!(lines(&ed), vec!["foo bar foo"]);
        assert!(ed.redo());
        assert_eq!(lines(&ed), vec!["baz bar baz"]);
    }

    #[test]
    fn replace_all_across_rows_undoes_in_one_step() {
        let mut ed = TextEditor::with_text("a1\nb\na2");
        assert!(ed.replace_all("a", "zz"));
        assert_eq!(lines(&ed), vec!["zz1", "b", "zz2"]);
        assert_eq!(ed.cursor(), Position::new(2, 2));
        assert!(ed.undo());
        assert_eq!(lines(&ed), vec!["a1", "b", "a2"]);
        assert_eq!(ed.cursor(), Position::origin());
    }

    #[test]
    fn replace_all_undo_then_edit_keeps_other_rows_intact() {
        let mut ed = TextEditor::with_text("top\nfoo");
        assert!(ed.replace_all("foo", "bar"));
        assert!(ed.undo());
        ed.set_cursor(Position::new(0, 3));
        assert!(ed.insert_char('!'));
        while ed.undo() {}
        assert_eq!(lines(&ed), vec!["top", "foo"]);
        assert!(ed.redo());
        assert_eq!(lines(&ed), vec!["top!", "foo"]);
        assert_eq!(ed.cursor(), Position::new(0, 4));

        let mut ed = TextEditor::with_text("\nb");
        assert!(ed.replace_all("b", ""));
        assert!(ed.undo());
        assert!(ed.delete_right());
        assert_eq!(lines(&ed), vec!["b"]);
        while ed.undo() {}
        assert_eq!(ed.text(), "\nb");
    }

    #[test]
    fn replace_all_refuses_multiline_replacement_and_misses() {
        let mut ed = TextEditor::with_text("foo");
        assert!(!ed.replace_all("foo", "a\nb"));
        assert!(!ed.replace_all("nope", "x"));
        assert_eq!(lines(&ed), vec!["foo"]);
        assert!(ed.history().is_empty());
    }

    #[test]
    fn replace_next_substitutes_one_match_at_a_time() {
        let mut ed = TextEditor::with_text("cat cat");
        assert!(ed.replace_next("cat", "dog").found);
        assert_eq!(lines(&ed), vec!["dog cat"]);
        assert_eq!(ed.selected_text().as_deref(), Some("dog"));
        assert!(ed.replace_next("cat", "dog").found);
        assert_eq!(lines(&ed), vec!["dog dog"]);
        assert!(!ed.replace_next("cat", "dog").found);
    }

    #[test]
    fn replace_next_with_replacement_containing_needle() {
        let mut ed = TextEditor::with_text("a a");
        ed.replace_next("a", "aa");
        ed.replace_next("a", "aa");
        assert_eq!(lines(&ed), vec!["aa aa"]);
    }
}
