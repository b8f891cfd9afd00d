//! Line-oriented text model.
//!
//! A buffer is an ordered list of lines, each line an ordered list of display
//! units (`char`). Columns everywhere in this crate count display units, never
//! bytes or rendered cells; the `width` module converts between unit indices
//! and terminal columns.

pub mod motion;
pub mod search;
pub mod store;
pub mod width;

pub use search::{FindResult, FindState};
pub use store::LineStore;
pub use width::column_width;

/// One line of text as a sequence of display units.
pub type Line = Vec<char>;

/// A position inside a buffer expressed as (row, column in display units).
///
/// Ordering is row-major: rows compare first, then columns. Selection bounds
/// rely on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Build a line from a string slice. Line separators are not interpreted.
pub fn line_from_str(s: &str) -> Line {
    s.chars().collect()
}

/// Render a line back into an owned `String`.
pub fn line_to_string(line: &[char]) -> String {
    line.iter().collect()
}

/// Split text into lines on LF, dropping every CR.
///
/// A trailing LF yields a trailing empty line and empty input yields a single
/// empty line, so the result is never empty.
pub fn split_lines(text: &str) -> Vec<Line> {
    text.split('\n')
        .map(|segment| segment.chars().filter(|&c| c != '\r').collect())
        .collect()
}

/// Join lines with LF.
pub fn join_lines(lines: &[Line]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(line.iter());
    }
    out
}
