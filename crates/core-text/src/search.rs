//! Find / replace over a [`LineStore`].
//!
//! All positions are unit columns. Find is "continuous": the store remembers
//! where the current walk started and where the last match was, so repeated
//! `find_next` / `find_previous` calls resume from the last match and report
//! when the walk has come back around to its first match.
//!
//! An empty needle never matches and never touches the find state.

use crate::store::LineStore;
use crate::{Line, Position};
use tracing::debug;

/// Progress of a continuous find walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindState {
    /// First match of the walk (or the reset point before any match).
    pub start: Position,
    /// Last match returned (or the reset point before any match).
    pub current: Position,
    /// Whether the walk has produced a match yet.
    pub found: bool,
}

/// Outcome of a single find call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindResult {
    pub pos: Position,
    pub found: bool,
    /// The match is the walk's first match again: the search went fully around.
    pub wrapped: bool,
}

impl FindResult {
    pub fn not_found() -> Self {
        Self {
            pos: Position::origin(),
            found: false,
            wrapped: false,
        }
    }
}

/// Whole-word rule: whitespace (or the line edge) on both sides of the match.
pub fn match_whole_word(line: &[char], at: usize, len: usize) -> bool {
    let end = at + len;
    if end > line.len() {
        return false;
    }
    let left_ok = at == 0 || line[at - 1].is_whitespace();
    let right_ok = end == line.len() || line[end].is_whitespace();
    left_ok && right_ok
}

#[inline]
fn units_eq(a: char, b: char, match_case: bool) -> bool {
    a == b || (!match_case && a.to_lowercase().eq(b.to_lowercase()))
}

fn matches_at(line: &[char], at: usize, needle: &[char], match_case: bool) -> bool {
    line[at..at + needle.len()]
        .iter()
        .zip(needle)
        .all(|(&a, &b)| units_eq(a, b, match_case))
}

fn qualifies(line: &[char], at: usize, needle: &[char], match_case: bool, whole_word: bool) -> bool {
    matches_at(line, at, needle, match_case)
        && (!whole_word || match_whole_word(line, at, needle.len()))
}

/// First qualifying match starting at or after `from`.
pub fn find_in_line(
    line: &[char],
    needle: &[char],
    from: usize,
    match_case: bool,
    whole_word: bool,
) -> Option<usize> {
    if needle.is_empty() || needle.len() > line.len() {
        return None;
    }
    let last = line.len() - needle.len();
    (from..=last).find(|&c| qualifies(line, c, needle, match_case, whole_word))
}

/// Last qualifying match starting at or before `upto` (`None` = anywhere).
pub fn rfind_in_line(
    line: &[char],
    needle: &[char],
    upto: Option<usize>,
    match_case: bool,
    whole_word: bool,
) -> Option<usize> {
    if needle.is_empty() || needle.len() > line.len() {
        return None;
    }
    let last = line.len() - needle.len();
    let top = upto.map_or(last, |u| u.min(last));
    (0..=top)
        .rev()
        .find(|&c| qualifies(line, c, needle, match_case, whole_word))
}

impl LineStore {
    pub fn find_state(&self) -> FindState {
        self.find
    }

    /// Restart continuous find from `pos`.
    pub fn reset_find_state(&mut self, pos: Position) {
        self.find = FindState {
            start: pos,
            current: pos,
            found: false,
        };
    }

    /// Next match after the last one (or at/after the reset point), wrapping
    /// to the top of the buffer when nothing follows.
    pub fn find_next(&mut self, text: &str, match_case: bool, whole_word: bool) -> FindResult {
        let needle: Line = text.chars().collect();
        if needle.is_empty() {
            return FindResult::not_found();
        }
        let mut from = self.find.current;
        if self.find.found {
            from.col += 1;
        }
        let hit = self
            .scan_forward(&needle, from, match_case, whole_word)
            .or_else(|| self.scan_forward(&needle, Position::origin(), match_case, whole_word));
        let result = self.apply_find(hit);
        debug!(target: "text.search", found = result.found, row = result.pos.row, col = result.pos.col, wrapped = result.wrapped, "find_next");
        result
    }

    /// Previous match before the last one (or at/before the reset point),
    /// wrapping to the bottom of the buffer when nothing precedes.
    pub fn find_previous(&mut self, text: &str, match_case: bool, whole_word: bool) -> FindResult {
        let needle: Line = text.chars().collect();
        if needle.is_empty() {
            return FindResult::not_found();
        }
        let current = self.find.current;
        let bound = if self.find.found {
            current.col.checked_sub(1).map(|c| Position::new(current.row, c))
        } else {
            Some(current)
        };
        let hit = bound
            .and_then(|b| self.scan_backward(&needle, b, match_case, whole_word))
            .or_else(|| {
                // nothing left on the current row before column 0: continue on the rows above
                if bound.is_none() && current.row > 0 {
                    let above = Position::new(current.row - 1, usize::MAX);
                    self.scan_backward(&needle, above, match_case, whole_word)
                } else {
                    None
                }
            })
            .or_else(|| {
                let end = Position::new(self.line_count() - 1, usize::MAX);
                self.scan_backward(&needle, end, match_case, whole_word)
            });
        let result = self.apply_find(hit);
        debug!(target: "text.search", found = result.found, row = result.pos.row, col = result.pos.col, wrapped = result.wrapped, "find_previous");
        result
    }

    /// Replace every qualifying occurrence of `text` with `replacement`.
    ///
    /// Returns the position of the last replacement and whether anything was
    /// replaced. Scanning resumes after each inserted replacement, so a
    /// replacement containing the needle is never re-matched.
    pub fn replace_all(
        &mut self,
        text: &str,
        match_case: bool,
        whole_word: bool,
        replacement: &str,
    ) -> (Position, bool) {
        let needle: Line = text.chars().collect();
        if needle.is_empty() {
            return (Position::origin(), false);
        }
        let replacement: Line = replacement.chars().collect();
        let mut last = Position::origin();
        let mut found = false;
        let mut count = 0usize;
        for row in 0..self.line_count() {
            let mut col = 0;
            loop {
                let line = self.line_mut(row);
                let Some(at) = find_in_line(line, &needle, col, match_case, whole_word) else {
                    break;
                };
                line.splice(at..at + needle.len(), replacement.iter().copied());
                last = Position::new(row, at);
                found = true;
                count += 1;
                col = at + replacement.len();
            }
        }
        debug!(target: "text.search", count, found, "replace_all");
        (last, found)
    }

    fn scan_forward(
        &self,
        needle: &[char],
        from: Position,
        match_case: bool,
        whole_word: bool,
    ) -> Option<Position> {
        let lines = self.lines();
        for (row, line) in lines.iter().enumerate().skip(from.row) {
            let start_col = if row == from.row { from.col } else { 0 };
            if let Some(col) = find_in_line(line, needle, start_col, match_case, whole_word) {
                return Some(Position::new(row, col));
            }
        }
        None
    }

    /// Last match starting at or before `upto` (row-major).
    fn scan_backward(
        &self,
        needle: &[char],
        upto: Position,
        match_case: bool,
        whole_word: bool,
    ) -> Option<Position> {
        let lines = self.lines();
        let first_row = upto.row.min(lines.len() - 1);
        for row in (0..=first_row).rev() {
            let limit = if row == upto.row { Some(upto.col) } else { None };
            if let Some(col) = rfind_in_line(&lines[row], needle, limit, match_case, whole_word) {
                return Some(Position::new(row, col));
            }
        }
        None
    }

    fn apply_find(&mut self, hit: Option<Position>) -> FindResult {
        let Some(pos) = hit else {
            return FindResult::not_found();
        };
        let wrapped = self.find.found && pos == self.find.start;
        self.find.current = pos;
        if !self.find.found {
            self.find.start = pos;
            self.find.found = true;
        }
        FindResult {
            pos,
            found: true,
            wrapped,
        }
    }
}
