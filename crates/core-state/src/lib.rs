//! Editing state owned by one editor: selection bounds and the line-delta
//! history log.
//!
//! Nothing here touches the buffer directly. The controller (`core-actions`)
//! records snapshots into [`HistoryLog`] around each edit and applies the
//! [`HistoryReplay`] values that undo/redo hand back.

pub mod history;
pub mod selection;

pub use history::{HistoryEntry, HistoryError, HistoryLog, HistoryReplay, LineStatus};
pub use selection::Selection;
