//! Line-delta history log with coalescing undo/redo.
//!
//! Every controller edit records an `Original` snapshot of the affected line
//! before mutating, then `Replaced` / `Removed` / `Added` snapshots after it.
//! Undo and redo walk this log and hand back a [`HistoryReplay`] describing
//! which lines to write and where the cursor lands; applying it to the buffer
//! is the caller's job.
//!
//! Invariants:
//! - The first entry of a non-empty log is `Original`.
//! - Adding while `idx` is not at the tail truncates the redo tail first.
//! - An `Original` directly after an `Original` is dropped; same for `Replaced`.
//! - After a replay `idx` never rests on an `Added`/`Removed` entry (unless the
//!   log itself ends in one).
//! - Entries own their lines; callers pass copies.

use core_text::{Line, Position};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// Line content before an edit.
    Original,
    /// Line content after an in-place edit.
    Replaced,
    /// Lines that an edit deleted.
    Removed,
    /// Lines that an edit inserted.
    Added,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub lines: Vec<Line>,
    pub cursor: Position,
    pub status: LineStatus,
}

/// Outcome of one undo/redo step: the change notification payload.
///
/// Apply by writing `lines[0]` over row `cursor.row`, then inserting or
/// removing the remaining rows depending on `status` and `undoing`, and
/// finally moving the cursor to `final_cursor`. When `removed_on_added` is
/// present its extra rows must be dropped first (see the controller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryReplay {
    pub lines: Vec<Line>,
    pub cursor: Position,
    pub status: LineStatus,
    pub undoing: bool,
    pub final_cursor: Position,
    pub removed_on_added: Option<HistoryEntry>,
}

impl HistoryReplay {
    fn from_entry(entry: &HistoryEntry, undoing: bool) -> Self {
        Self {
            lines: entry.lines.clone(),
            cursor: entry.cursor,
            status: entry.status,
            undoing,
            final_cursor: entry.cursor,
            removed_on_added: None,
        }
    }

    /// Rows of the paired entry to drop before writing `lines`.
    pub fn rows_to_drop(&self) -> usize {
        self.removed_on_added
            .as_ref()
            .map_or(0, |entry| entry.lines.len().saturating_sub(1))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("first history entry must be Original, got {0:?}")]
    FirstEntryNotOriginal(LineStatus),
}

#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    idx: Option<usize>,
    baseline: String,
    replaying: bool,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry the log currently rests on; `None` when empty.
    pub fn index(&self) -> Option<usize> {
        self.idx
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// True while a replay returned by `undo`/`redo` is being applied.
    /// `add` is ignored during that window.
    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Close the replay window opened by `undo`/`redo`.
    pub fn finish_replay(&mut self) {
        self.replaying = false;
    }

    pub fn has_history_changes(&self) -> bool {
        self.idx.is_some()
    }

    /// Compare `current` text against the baseline recorded by `clear`.
    pub fn is_dirty(&self, current: &str) -> bool {
        current != self.baseline
    }

    /// Empty the log and remember `baseline` as the clean text.
    pub fn clear(&mut self, baseline: impl Into<String>) {
        self.entries.clear();
        self.idx = None;
        self.baseline = baseline.into();
        self.replaying = false;
        trace!(target: "state.history", "clear");
    }

    pub fn add(
        &mut self,
        lines: Vec<Line>,
        cursor: Position,
        status: LineStatus,
    ) -> Result<(), HistoryError> {
        if self.replaying {
            trace!(target: "state.history", ?status, "add_ignored_during_replay");
            return Ok(());
        }
        if let Some(last) = self.entries.last()
            && last.status == status
            && matches!(status, LineStatus::Original | LineStatus::Replaced)
        {
            trace!(target: "state.history", ?status, "add_collapsed");
            return Ok(());
        }
        if self.entries.is_empty() && status != LineStatus::Original {
            return Err(HistoryError::FirstEntryNotOriginal(status));
        }
        let keep = self.idx.map_or(0, |i| i + 1);
        if self.entries.len() > keep {
            trace!(target: "state.history", dropped = self.entries.len() - keep, "redo_tail_truncated");
            self.entries.truncate(keep);
        }
        self.entries.push(HistoryEntry {
            lines,
            cursor,
            status,
        });
        self.idx = Some(self.entries.len() - 1);
        trace!(target: "state.history", ?status, row = cursor.row, col = cursor.col, len = self.entries.len(), "add");
        Ok(())
    }

    /// Overwrite the newest entry carrying `status`. No-op when none exists.
    pub fn replace_last(&mut self, lines: Vec<Line>, cursor: Position, status: LineStatus) {
        if let Some(entry) = self.entries.iter_mut().rev().find(|e| e.status == status) {
            entry.lines = lines;
            entry.cursor = cursor;
            trace!(target: "state.history", ?status, "replace_last");
        }
    }

    fn status(&self, i: usize) -> Option<LineStatus> {
        self.entries.get(i).map(|e| e.status)
    }

    fn prev_status(&self, i: usize) -> Option<LineStatus> {
        i.checked_sub(1).and_then(|p| self.status(p))
    }

    pub fn undo(&mut self) -> Option<HistoryReplay> {
        let mut idx = match self.idx {
            Some(i) if i > 0 => i - 1,
            _ => return None,
        };
        let landed = self.entries[idx].status;
        let prev = self.prev_status(idx);
        if matches!(prev, Some(LineStatus::Added | LineStatus::Removed))
            || (landed == LineStatus::Replaced && prev == Some(LineStatus::Original))
        {
            idx -= 1;
            while idx > 0
                && self.entries[idx].status == LineStatus::Added
                && self.entries[idx - 1].status == LineStatus::Removed
            {
                idx -= 1;
            }
        }
        let mut replay = HistoryReplay::from_entry(&self.entries[idx], true);

        if replay.status == LineStatus::Removed
            && let Some(next) = self.entries.get(idx + 1)
            && next.status == LineStatus::Added
        {
            replay.removed_on_added = Some(next.clone());
        }

        let prev = self.prev_status(idx);
        let pairs_with_prev = matches!(
            (replay.status, prev),
            (LineStatus::Added | LineStatus::Removed, Some(LineStatus::Original))
                | (LineStatus::Added, Some(LineStatus::Removed))
        );
        if pairs_with_prev {
            let before = &self.entries[idx - 1];
            if replay.cursor == before.cursor
                && let (Some(first), Some(restored)) =
                    (replay.lines.first_mut(), before.lines.first())
                && first != restored
            {
                *first = restored.clone();
            }
            replay.final_cursor = if prev == Some(LineStatus::Removed) {
                idx.checked_sub(2)
                    .map_or(before.cursor, |i| self.entries[i].cursor)
            } else {
                before.cursor
            };
        }

        trace!(target: "state.history", idx, status = ?replay.status, row = replay.final_cursor.row, col = replay.final_cursor.col, "undo");
        while idx > 0
            && matches!(
                self.entries[idx].status,
                LineStatus::Added | LineStatus::Removed
            )
        {
            idx -= 1;
        }
        self.idx = Some(idx);
        self.replaying = true;
        Some(replay)
    }

    pub fn redo(&mut self) -> Option<HistoryReplay> {
        let len = self.entries.len();
        let mut idx = match self.idx {
            Some(i) if i + 1 < len => i + 1,
            _ => return None,
        };
        if idx + 1 < len && self.entries[idx].status == LineStatus::Original {
            idx += 1;
        }
        if idx + 1 < len
            && self.entries[idx].status == LineStatus::Removed
            && self.status(idx + 1) == Some(LineStatus::Added)
        {
            idx += 1;
        }
        let mut replay = HistoryReplay::from_entry(&self.entries[idx], false);

        if replay.status == LineStatus::Added && self.prev_status(idx) == Some(LineStatus::Removed) {
            replay.removed_on_added = Some(self.entries[idx - 1].clone());
        }

        let next = self.status(idx + 1);
        let pairs_with_next = matches!(
            (replay.status, next),
            (
                LineStatus::Removed,
                Some(LineStatus::Replaced | LineStatus::Original)
            ) | (LineStatus::Added, Some(LineStatus::Replaced))
        );
        if pairs_with_next {
            let after = &self.entries[idx + 1];
            if replay.status == LineStatus::Removed
                && let (Some(first), Some(result)) = (replay.lines.first_mut(), after.lines.first())
                && first != result
            {
                *first = result.clone();
            }
            replay.final_cursor = after.cursor;
        }

        trace!(target: "state.history", idx, status = ?replay.status, row = replay.final_cursor.row, col = replay.final_cursor.col, "redo");
        while idx + 1 < len
            && matches!(
                self.entries[idx].status,
                LineStatus::Added | LineStatus::Removed
            )
        {
            idx += 1;
        }
        self.idx = Some(idx);
        self.replaying = true;
        Some(replay)
    }
}
