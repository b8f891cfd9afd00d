//! Display-unit width engine.
//!
//! All rendered-width decisions for a line flow through this module. A line is
//! addressed by display-unit index (one `char` per unit); the helpers here map
//! unit ranges to terminal columns and back.
//!
//! Width Precedence Order:
//! 1. Tab: `tab_width` columns (only via [`cell_width`] / the range helpers;
//!    [`column_width`] reports 0 so callers decide tab policy).
//! 2. Control characters: 0.
//! 3. Classifier (`UnitKind`) backed by `unicode_width`.
//! 4. Conservative widen for pictographic units measured narrow.
//!
//! Invariants:
//! - `column_width` never returns more than 2.
//! - Every range helper clamps its indices to the line; none of them panic on
//!   out-of-range input.

use unicode_width::UnicodeWidthChar;

/// Semantic classification of a single display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitKind {
    Ascii,
    Control,
    ZeroWidth,
    Narrow,
    Wide,
}

// Rough Extended Pictographic heuristic (main emoji blocks). Some terminals
// draw these wide even when the width tables say narrow.
fn is_extended_pictographic(c: char) -> bool {
    ('\u{1F300}'..='\u{1FAFF}').contains(&c)
}

fn classify(c: char) -> UnitKind {
    if c.is_control() {
        return UnitKind::Control;
    }
    if c.is_ascii() {
        return UnitKind::Ascii;
    }
    match UnicodeWidthChar::width(c) {
        Some(0) => UnitKind::ZeroWidth,
        Some(2) => UnitKind::Wide,
        _ if is_extended_pictographic(c) => UnitKind::Wide,
        _ => UnitKind::Narrow,
    }
}

/// Terminal column width of one display unit: 0, 1 or 2.
///
/// Tabs and other control characters report 0; use [`cell_width`] when tab
/// expansion is wanted.
#[inline]
pub fn column_width(c: char) -> usize {
    match classify(c) {
        UnitKind::Control | UnitKind::ZeroWidth => 0,
        UnitKind::Ascii | UnitKind::Narrow => 1,
        UnitKind::Wide => 2,
    }
}

/// Column width with tab expansion applied.
#[inline]
pub fn cell_width(c: char, tab_width: usize) -> usize {
    if c == '\t' {
        tab_width
    } else {
        column_width(c)
    }
}

/// UTF-8 byte length of a display unit.
#[inline]
pub fn unit_len(c: char) -> usize {
    c.len_utf8()
}

/// Rendered width and unit count of `line[start..end]`.
///
/// `end = None` measures to the end of the line. With `check_next_unit`, a wide
/// unit sitting right after `end` is counted as well so a render boundary never
/// splits a wide glyph. Returns `(size, length)`.
pub fn display_size(
    line: &[char],
    start: usize,
    end: Option<usize>,
    check_next_unit: bool,
    tab_width: usize,
) -> (usize, usize) {
    let end = end.map_or(line.len(), |e| e.min(line.len()));
    if line.is_empty() || start >= end {
        return (0, 0);
    }
    let mut size = 0;
    let mut length = 0;
    for &c in &line[start..end] {
        size += cell_width(c, tab_width);
        length += 1;
    }
    if check_next_unit
        && let Some(&next) = line.get(end)
    {
        let w = cell_width(next, tab_width);
        if w > 1 {
            size += w;
            length += 1;
        }
    }
    (size, length)
}

/// Leftmost visible column that keeps the cursor at unit `end` on screen.
///
/// `start` is the current left column; it is kept when the cursor is already
/// visible from it. Otherwise the walk goes backward from the cursor,
/// accumulating widths until the viewport `width` would overflow. A cursor
/// past the last unit occupies one cell.
pub fn calculate_left_column(
    line: &[char],
    start: usize,
    end: usize,
    width: usize,
    tab_width: usize,
) -> usize {
    if line.is_empty() || width == 0 {
        return 0;
    }
    let end = end.min(line.len());
    let cursor_cell = line
        .get(end)
        .map_or(1, |&c| cell_width(c, tab_width).max(1));
    if start <= end {
        let (span, _) = display_size(line, start, Some(end), false, tab_width);
        if span + cursor_cell <= width {
            return start;
        }
    }
    let mut size = cursor_cell;
    let mut col = end;
    while col > 0 {
        let w = cell_width(line[col - 1], tab_width);
        if size + w > width {
            break;
        }
        size += w;
        col -= 1;
    }
    col
}

/// Unit index (relative to `start`) under rendered offset `x`.
///
/// Returns `line.len() - start` when `x` lies beyond the end of the line.
pub fn col_from_x(line: &[char], start: usize, x: usize, tab_width: usize) -> usize {
    let start = start.min(line.len());
    let mut size = 0;
    for (i, &c) in line.iter().enumerate().skip(start) {
        let w = cell_width(c, tab_width);
        if size + w > x {
            return i - start;
        }
        size += w;
    }
    line.len() - start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_from_str;

    #[test]
    fn ascii() {
        assert_eq!(column_width('a'), 1);
    }

    #[test]
    fn wide_cjk() {
        assert_eq!(column_width('界'), 2);
    }

    #[test]
    fn emoji_basic() {
        assert_eq!(column_width('😀'), 2);
    }

    #[test]
    fn combining_acute_is_zero() {
        assert_eq!(column_width('\u{0301}'), 0);
    }

    #[test]
    fn tab_reports_zero_but_cell_expands() {
        assert_eq!(column_width('\t'), 0);
        assert_eq!(cell_width('\t', 4), 4);
    }

    #[test]
    fn unit_len_is_utf8_len() {
        assert_eq!(unit_len('a'), 1);
        assert_eq!(unit_len('界'), 3);
        assert_eq!(unit_len('😀'), 4);
    }

    #[test]
    fn display_size_empty_line() {
        assert_eq!(display_size(&[], 0, None, true, 4), (0, 0));
    }

    #[test]
    fn display_size_whole_line_with_tab() {
        let line = line_from_str("a\tb");
        assert_eq!(display_size(&line, 0, None, false, 4), (6, 3));
    }

    #[test]
    fn display_size_peeks_wide_unit() {
        let line = line_from_str("ab界c");
        assert_eq!(display_size(&line, 0, Some(2), false, 4), (2, 2));
        assert_eq!(display_size(&line, 0, Some(2), true, 4), (4, 3));
        // narrow next unit is never included
        assert_eq!(display_size(&line, 0, Some(1), true, 4), (1, 1));
    }

    #[test]
    fn display_size_clamps_end() {
        let line = line_from_str("abc");
        assert_eq!(display_size(&line, 1, Some(99), true, 4), (2, 2));
    }

    #[test]
    fn left_column_kept_when_cursor_visible() {
        let line = line_from_str("0123456789abcdefghij");
        assert_eq!(calculate_left_column(&line, 3, 6, 5, 4), 3);
    }

    #[test]
    fn left_column_scrolls_right() {
        let line = line_from_str("0123456789abcdefghij");
        // viewport of 5 cells, cursor on unit 10: units 6..=10 visible
        assert_eq!(calculate_left_column(&line, 0, 10, 5, 4), 6);
        // cursor at end of line needs its own cell
        assert_eq!(calculate_left_column(&line, 0, 20, 5, 4), 16);
    }

    #[test]
    fn left_column_accounts_for_wide_units() {
        let line = line_from_str("界界界界");
        // cursor at end (cell 1) + two wide units = 5 cells
        assert_eq!(calculate_left_column(&line, 0, 4, 5, 4), 2);
    }

    #[test]
    fn left_column_empty_line() {
        assert_eq!(calculate_left_column(&[], 5, 5, 10, 4), 0);
    }

    #[test]
    fn col_from_x_ascii_and_past_end() {
        let line = line_from_str("hello");
        assert_eq!(col_from_x(&line, 0, 0, 4), 0);
        assert_eq!(col_from_x(&line, 0, 3, 4), 3);
        assert_eq!(col_from_x(&line, 0, 50, 4), 5);
        assert_eq!(col_from_x(&line, 2, 1, 4), 1);
    }

    #[test]
    fn col_from_x_inside_wide_and_tab() {
        let line = line_from_str("界\tx");
        assert_eq!(col_from_x(&line, 0, 1, 4), 0);
        assert_eq!(col_from_x(&line, 0, 2, 4), 1);
        assert_eq!(col_from_x(&line, 0, 5, 4), 1);
        assert_eq!(col_from_x(&line, 0, 6, 4), 2);
    }
}
