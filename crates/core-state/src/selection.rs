//! Selection bounds and the packed position codec.
//!
//! A selection is an `anchor` (where selecting started) plus the live `cursor`.
//! The covered region is half-open: `[min(anchor, cursor), max(anchor, cursor))`
//! in row-major order. Containment uses plain `Position` ordering; the packed
//! `u64` codec below preserves that ordering and exists for callers that want
//! a single sortable key.

use core_text::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: Position,
    pub cursor: Position,
}

impl Selection {
    pub fn new(anchor: Position, cursor: Position) -> Self {
        Self { anchor, cursor }
    }

    /// Empty selection resting at `pos`.
    pub fn collapsed(pos: Position) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    /// Normalized `(start, end)` regardless of which side the cursor is on.
    pub fn bounds(&self) -> (Position, Position) {
        if self.anchor <= self.cursor {
            (self.anchor, self.cursor)
        } else {
            (self.cursor, self.anchor)
        }
    }

    /// True when `pos` lies inside the half-open region.
    pub fn contains(&self, pos: Position) -> bool {
        let (start, end) = self.bounds();
        start <= pos && pos < end
    }

    /// Number of rows the region touches (1 for a single-line selection).
    pub fn row_span(&self) -> usize {
        let (start, end) = self.bounds();
        end.row - start.row + 1
    }
}

/// Pack a position as `(row << 32) | col`. Both halves are truncated to 32 bits.
pub fn encode(pos: Position) -> u64 {
    ((pos.row as u64 & 0xFFFF_FFFF) << 32) | (pos.col as u64 & 0xFFFF_FFFF)
}

pub fn decode(packed: u64) -> Position {
    Position::new((packed >> 32) as usize, (packed & 0xFFFF_FFFF) as usize)
}
