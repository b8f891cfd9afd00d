//! Scroll state kept in step with the cursor.
//!
//! The renderer reports its size through `set_viewport`; after every cursor
//! change the controller calls [`Viewport::follow`] so the cursor stays on
//! screen. A zero-sized viewport (no renderer attached yet) never scrolls.

use core_text::width::calculate_left_column;
use core_text::{LineStore, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
    pub top_row: usize,
    pub left_column: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            top_row: 0,
            left_column: 0,
        }
    }

    /// Rows `[top_row, top_row + height)` clamped to the store.
    pub fn visible_rows(&self, store: &LineStore) -> std::ops::Range<usize> {
        let end = (self.top_row + self.height).min(store.line_count());
        self.top_row.min(end)..end
    }

    /// Scroll so `cursor` is visible. Returns true when the origin moved.
    pub fn follow(&mut self, store: &LineStore, cursor: Position, tab_width: usize) -> bool {
        let before = (self.top_row, self.left_column);
        if self.height > 0 {
            if cursor.row < self.top_row {
                self.top_row = cursor.row;
            } else if cursor.row >= self.top_row + self.height {
                self.top_row = cursor.row + 1 - self.height;
            }
        }
        if self.width > 0 {
            if cursor.col < self.left_column {
                self.left_column = cursor.col;
            } else {
                self.left_column = calculate_left_column(
                    store.line(cursor.row),
                    self.left_column,
                    cursor.col,
                    self.width,
                    tab_width,
                );
            }
        }
        let moved = before != (self.top_row, self.left_column);
        if moved {
            tracing::trace!(target: "actions.viewport", top_row = self.top_row, left_column = self.left_column, "scrolled");
        }
        moved
    }
}
