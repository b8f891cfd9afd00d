//! Word motion over a [`LineStore`].
//!
//! Units fall into three classes. Letters/digits and punctuation form words;
//! symbols and whitespace separate them. Motions cross line boundaries and
//! return `None` when the position would not change (start/end of buffer), so
//! callers can fall back to other behavior.

use crate::{LineStore, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    LetterOrDigit,
    Punctuation,
    SymbolOrWhitespace,
}

// ASCII math/currency/modifier symbols; every other ASCII punctuation char is
// connector/dash/open/close/other punctuation.
const ASCII_SYMBOLS: &str = "$+<=>^`|~";

fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation() && !ASCII_SYMBOLS.contains(c);
    }
    ('\u{2010}'..='\u{2027}').contains(&c)
        || ('\u{2030}'..='\u{205E}').contains(&c)
        || ('\u{3001}'..='\u{3003}').contains(&c)
        || ('\u{3008}'..='\u{3011}').contains(&c)
        || "¡§«¶·»¿".contains(c)
}

pub fn word_class(c: char) -> WordClass {
    if c.is_alphanumeric() {
        WordClass::LetterOrDigit
    } else if is_punctuation(c) {
        WordClass::Punctuation
    } else {
        WordClass::SymbolOrWhitespace
    }
}

#[inline]
fn is_word(c: char) -> bool {
    !matches!(word_class(c), WordClass::SymbolOrWhitespace)
}

/// Start of the next word: skip the rest of the current word on this line,
/// then every separator (crossing lines). Stops at end of buffer.
pub fn word_forward(store: &LineStore, pos: Position) -> Option<Position> {
    let last_row = store.line_count() - 1;
    let mut row = pos.row.min(last_row);
    let mut col = pos.col.min(store.line_len(row));
    let start = Position::new(row, col);

    let line = store.line(row);
    while col < line.len() && is_word(line[col]) {
        col += 1;
    }
    loop {
        let line = store.line(row);
        if col >= line.len() {
            if row == last_row {
                break;
            }
            row += 1;
            col = 0;
            continue;
        }
        if is_word(line[col]) {
            break;
        }
        col += 1;
    }
    let target = Position::new(row, col);
    (target != start).then_some(target)
}

/// Start of the previous word: skip separators backward (crossing lines), then
/// the word itself. Stops at start of buffer.
pub fn word_backward(store: &LineStore, pos: Position) -> Option<Position> {
    let last_row = store.line_count() - 1;
    let mut row = pos.row.min(last_row);
    let mut col = pos.col.min(store.line_len(row));
    let start = Position::new(row, col);

    loop {
        if col == 0 {
            if row == 0 {
                break;
            }
            row -= 1;
            col = store.line_len(row);
            continue;
        }
        if is_word(store.line(row)[col - 1]) {
            break;
        }
        col -= 1;
    }
    let line = store.line(row);
    while col > 0 && is_word(line[col - 1]) {
        col -= 1;
    }
    let target = Position::new(row, col);
    (target != start).then_some(target)
}
