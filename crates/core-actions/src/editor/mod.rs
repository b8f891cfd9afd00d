//! `TextEditor`: the controller tying the line store, history log, selection,
//! clipboard and observers together.
//!
//! Every mutating operation follows one protocol:
//! 1. snapshot the affected line as `Original`;
//! 2. mutate the store;
//! 3. snapshot the result as `Replaced` / `Removed` / `Added`;
//! 4. move the cursor and drop the selection;
//! 5. notify observers.
//!
//! Read-only editors turn every mutation (undo/redo included) into a no-op.
//! Edge-of-buffer conditions are reported through `bool`/`Option` returns,
//! never as errors.

mod edit;
mod find;
mod history;
mod kill;
mod motion;
mod selection;

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::viewport::Viewport;
use core_config::Config;
use core_events::{EditorEvent, EditorObserver, ObserverId, ObserverList};
use core_state::{HistoryLog, LineStatus, Selection};
use core_text::{Line, LineStore, Position};
use tracing::{debug, warn};

/// Search flags applied by find/replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub match_case: bool,
    pub match_whole_word: bool,
}

pub struct TextEditor {
    store: LineStore,
    history: HistoryLog,
    cursor: Position,
    /// Selection anchor while selecting; the cursor is the other end.
    anchor: Option<Position>,
    /// Display column remembered across vertical motion.
    sticky_x: Option<usize>,
    overwrite: bool,
    read_only: bool,
    last_was_kill: bool,
    continuous_find: bool,
    tab_width: usize,
    search: SearchOptions,
    viewport: Viewport,
    clipboard: Box<dyn Clipboard>,
    observers: ObserverList,
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor {
    /// Empty editor (one empty line) with an in-memory clipboard.
    pub fn new() -> Self {
        Self {
            store: LineStore::new(),
            history: HistoryLog::new(),
            cursor: Position::origin(),
            anchor: None,
            sticky_x: None,
            overwrite: false,
            read_only: false,
            last_was_kill: false,
            continuous_find: false,
            tab_width: 4,
            search: SearchOptions::default(),
            viewport: Viewport::default(),
            clipboard: Box::new(MemoryClipboard::new()),
            observers: ObserverList::new(),
        }
    }

    pub fn with_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.load_text(text);
        editor
    }

    pub fn with_config(config: &Config) -> Self {
        let mut editor = Self::new();
        editor.tab_width = config.tab_width();
        editor.read_only = config.read_only();
        editor.overwrite = config.overwrite();
        editor.search = SearchOptions {
            match_case: config.search().match_case,
            match_whole_word: config.search().match_whole_word,
        };
        debug!(target: "actions.edit", tab_width = editor.tab_width, read_only = editor.read_only, overwrite = editor.overwrite, "editor_configured");
        editor
    }

    pub fn set_clipboard<C: Clipboard + 'static>(&mut self, clipboard: C) {
        self.clipboard = Box::new(clipboard);
    }

    pub fn clipboard_text(&self) -> String {
        self.clipboard.get()
    }

    pub fn register_observer<O: EditorObserver + 'static>(&mut self, observer: O) -> ObserverId {
        self.observers.register(observer)
    }

    pub fn unregister_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    // ---------------------------------------------------------------------
    // Content
    // ---------------------------------------------------------------------

    /// Replace the buffer, reset history (the loaded text becomes the clean
    /// baseline) and move the cursor to the origin.
    pub fn load_text(&mut self, text: &str) {
        self.store.load_from_text(text);
        self.reset_after_load();
    }

    pub fn load_bytes(&mut self, bytes: &[u8]) {
        self.store.load_from_bytes(bytes);
        self.reset_after_load();
    }

    fn reset_after_load(&mut self) {
        self.history.clear(self.store.text());
        self.cursor = Position::origin();
        self.anchor = None;
        self.sticky_x = None;
        self.last_was_kill = false;
        self.continuous_find = false;
        self.viewport.top_row = 0;
        self.viewport.left_column = 0;
        debug!(target: "actions.edit", lines = self.store.line_count(), "content_loaded");
        self.observers.notify(&EditorEvent::ContentLoaded);
    }

    pub fn text(&self) -> String {
        self.store.text()
    }

    pub fn store(&self) -> &LineStore {
        &self.store
    }

    pub fn line(&self, row: usize) -> &Line {
        self.store.line(row)
    }

    pub fn line_count(&self) -> usize {
        self.store.line_count()
    }

    /// Widest line among the rows currently in the viewport.
    pub fn max_visible_width(&self) -> usize {
        let rows = self.viewport.visible_rows(&self.store);
        self.store
            .max_visible_width(rows.start, rows.end, self.tab_width)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn is_dirty(&self) -> bool {
        self.history.is_dirty(&self.store.text())
    }

    // ---------------------------------------------------------------------
    // Modes and settings
    // ---------------------------------------------------------------------

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.overwrite = overwrite;
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn set_tab_width(&mut self, tab_width: usize) {
        self.tab_width = tab_width.max(1);
        self.follow_cursor();
    }

    pub fn search_options(&self) -> SearchOptions {
        self.search
    }

    pub fn set_search_options(&mut self, options: SearchOptions) {
        self.search = options;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: usize, height: usize) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.follow_cursor();
    }

    // ---------------------------------------------------------------------
    // Cursor and selection state
    // ---------------------------------------------------------------------

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Move the cursor (clamped into the buffer) and drop any selection.
    pub fn set_cursor(&mut self, pos: Position) {
        self.anchor = None;
        self.place_cursor(pos);
        self.sticky_x = None;
        self.last_was_kill = false;
    }

    /// Active selection, `None` when not selecting or the region is empty.
    pub fn selection(&self) -> Option<Selection> {
        let anchor = self.anchor?;
        let sel = Selection::new(anchor, self.cursor);
        (!sel.is_empty()).then_some(sel)
    }

    pub fn is_selecting(&self) -> bool {
        self.anchor.is_some()
    }

    /// Start selecting at the cursor (keeps an existing anchor).
    pub fn start_selection(&mut self) {
        if self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        }
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    // ---------------------------------------------------------------------
    // Internal helpers shared by the operation modules
    // ---------------------------------------------------------------------

    fn clamp(&self, pos: Position) -> Position {
        self.store.clamp(pos)
    }

    fn place_cursor(&mut self, pos: Position) {
        self.cursor = self.clamp(pos);
        self.continuous_find = false;
        self.follow_cursor();
    }

    fn follow_cursor(&mut self) {
        self.viewport
            .follow(&self.store, self.cursor, self.tab_width);
    }

    fn row_snapshot(&self, row: usize) -> Vec<Line> {
        vec![self.store.line(row).clone()]
    }

    fn rows_snapshot(&self, first: usize, last: usize) -> Vec<Line> {
        self.store.lines()[first..=last].to_vec()
    }

    fn record(&mut self, lines: Vec<Line>, cursor: Position, status: LineStatus) {
        if let Err(e) = self.history.add(lines, cursor, status) {
            warn!(target: "actions.edit", error = %e, "history_add_rejected");
        }
    }

    /// Close an edit: land the cursor, end selecting and notify observers.
    fn finish_edit(&mut self, cursor: Position) {
        self.anchor = None;
        self.sticky_x = None;
        self.place_cursor(cursor);
        self.observers.notify(&EditorEvent::TextChanged {
            cursor: self.cursor,
        });
    }
}
