//! Cursor movement.
//!
//! Every motion takes `extend`: true grows the selection from wherever it was
//! anchored (anchoring at the pre-motion cursor if needed), false drops it.
//! Motions return false when the cursor could not move.

use super::TextEditor;
use core_text::Position;
use core_text::motion::{word_backward, word_forward};
use core_text::width::{col_from_x, display_size};

impl TextEditor {
    fn begin_motion(&mut self, extend: bool) {
        if extend {
            self.start_selection();
        } else {
            self.anchor = None;
        }
        self.last_was_kill = false;
    }

    fn move_to(&mut self, target: Position) -> bool {
        self.sticky_x = None;
        let before = self.cursor;
        self.place_cursor(target);
        self.cursor != before
    }

    /// Left one unit, wrapping to the end of the previous line.
    pub fn move_left(&mut self, extend: bool) -> bool {
        self.begin_motion(extend);
        let at = self.cursor;
        if at.col > 0 {
            self.move_to(Position::new(at.row, at.col - 1))
        } else if at.row > 0 {
            self.move_to(Position::new(at.row - 1, self.store.line_len(at.row - 1)))
        } else {
            false
        }
    }

    /// Right one unit, wrapping to the start of the next line.
    pub fn move_right(&mut self, extend: bool) -> bool {
        self.begin_motion(extend);
        let at = self.cursor;
        if at.col < self.store.line_len(at.row) {
            self.move_to(Position::new(at.row, at.col + 1))
        } else if at.row + 1 < self.store.line_count() {
            self.move_to(Position::new(at.row + 1, 0))
        } else {
            false
        }
    }

    pub fn move_up(&mut self, extend: bool) -> bool {
        self.begin_motion(extend);
        if self.cursor.row == 0 {
            return false;
        }
        self.move_vertical(self.cursor.row - 1)
    }

    pub fn move_down(&mut self, extend: bool) -> bool {
        self.begin_motion(extend);
        if self.cursor.row + 1 >= self.store.line_count() {
            return false;
        }
        self.move_vertical(self.cursor.row + 1)
    }

    // Keep the rendered column across rows of different widths.
    fn move_vertical(&mut self, row: usize) -> bool {
        let x = self.sticky_x.unwrap_or_else(|| {
            display_size(
                self.store.line(self.cursor.row),
                0,
                Some(self.cursor.col),
                false,
                self.tab_width,
            )
            .0
        });
        let col = col_from_x(self.store.line(row), 0, x, self.tab_width);
        self.place_cursor(Position::new(row, col));
        self.sticky_x = Some(x);
        true
    }

    pub fn move_line_start(&mut self, extend: bool) -> bool {
        self.begin_motion(extend);
        self.move_to(Position::new(self.cursor.row, 0))
    }

    pub fn move_line_end(&mut self, extend: bool) -> bool {
        self.begin_motion(extend);
        let row = self.cursor.row;
        self.move_to(Position::new(row, self.store.line_len(row)))
    }

    pub fn move_buffer_start(&mut self, extend: bool) -> bool {
        self.begin_motion(extend);
        self.move_to(Position::origin())
    }

    pub fn move_buffer_end(&mut self, extend: bool) -> bool {
        self.begin_motion(extend);
        self.move_to(self.store.end_position())
    }

    pub fn move_word_forward(&mut self, extend: bool) -> bool {
        self.begin_motion(extend);
        match word_forward(&self.store, self.cursor) {
            Some(target) => self.move_to(target),
            None => false,
        }
    }

    pub fn move_word_backward(&mut self, extend: bool) -> bool {
        self.begin_motion(extend);
        match word_backward(&self.store, self.cursor) {
            Some(target) => self.move_to(target),
            None => false,
        }
    }
}
