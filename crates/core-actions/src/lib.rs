//! Editor controller and action dispatch.
//!
//! [`TextEditor`] owns one line store, history log and observer list and
//! implements every editing operation on top of them. [`dispatch`] maps a
//! decoded [`Action`] onto those operations for hosts that drive the editor
//! from an input layer.

mod clipboard;
mod dispatcher;
mod editor;
mod viewport;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use dispatcher::{DispatchResult, dispatch};
pub use editor::{SearchOptions, TextEditor};
pub use viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    BufferStart,
    BufferEnd,
    WordForward,
    WordBackward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    InsertText(String),
    Newline,
    DeleteLeft,
    DeleteRight,
    DeleteWordForward,
    DeleteWordBackward,
    KillToLineEnd,
    KillToLineStart,
}

/// A decoded user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Cursor motion; `extend` grows the selection instead of dropping it.
    Motion { kind: MotionKind, extend: bool },
    Edit(EditKind),
    SelectAll,
    ClearSelection,
    Copy,
    Cut,
    Paste,
    FindNext(String),
    FindPrevious(String),
    ReplaceNext { find: String, replacement: String },
    ReplaceAll { find: String, replacement: String },
    Undo,
    Redo,
    ToggleOverwrite,
    SetViewport { width: usize, height: usize },
}
