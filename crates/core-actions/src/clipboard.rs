//! Clipboard capability consumed by kills, cut/copy and paste.
//!
//! The editor never talks to the OS clipboard; embedders supply an
//! implementation. Last writer wins; kills append while coalescing.

use std::cell::RefCell;
use std::rc::Rc;

pub trait Clipboard {
    fn get(&self) -> String;
    fn set(&mut self, text: &str);
    fn append(&mut self, text: &str) {
        let mut current = self.get();
        current.push_str(text);
        self.set(&current);
    }
}

/// Process-local single-slot clipboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn get(&self) -> String {
        self.contents.clone()
    }
    fn set(&mut self, text: &str) {
        self.contents.clear();
        self.contents.push_str(text);
    }
    fn append(&mut self, text: &str) {
        self.contents.push_str(text);
    }
}

/// One clipboard shared by several editors (or by the editor and its host).
impl<C: Clipboard> Clipboard for Rc<RefCell<C>> {
    fn get(&self) -> String {
        self.borrow().get()
    }
    fn set(&mut self, text: &str) {
        self.borrow_mut().set(text);
    }
    fn append(&mut self, text: &str) {
        self.borrow_mut().append(text);
    }
}
