use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct DialogContext {
    pub is_open: Signal<bool>,
    title: Rc<RefCell<String>>,
    message: Rc<RefCell<String>>,
}

impl Default for DialogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogContext {
    pub fn new() -> Self {
        Self {
            is_open: Signal::new(false),
            title: Rc::new(RefCell::new(String::new())),
            message: Rc::new(RefCell::new(String::new())),
        }
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    /// Open the dialog; it stays up until the user dismisses it
    pub fn alert(&self, title: String, message: String) {
        *self.title.borrow_mut() = title;
        *self.message.borrow_mut() = message;
        let mut is_open = self.is_open;
        is_open.set(true);
    }

    pub fn hide(&self) {
        let mut is_open = self.is_open;
        is_open.set(false);
    }
}
