//! Body class-list contracts used to flag feature availability to stylesheets.

use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

/// Host service for the document body's class list.
pub trait BodyClassList {
    /// Adds `class` to the body. Adding a class already present is a no-op.
    fn add_class(&self, class: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Class-list adapter for targets without a document body.
pub struct NoopBodyClassList;

impl BodyClassList for NoopBodyClassList {
    fn add_class(&self, _class: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory body class list.
pub struct MemoryBodyClassList {
    inner: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryBodyClassList {
    /// Whether `class` is currently present.
    pub fn contains(&self, class: &str) -> bool {
        self.inner.borrow().contains(class)
    }

    /// Current classes in sorted order.
    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().iter().cloned().collect()
    }
}

impl BodyClassList for MemoryBodyClassList {
    fn add_class(&self, class: &str) -> Result<(), String> {
        self.inner.borrow_mut().insert(class.to_string());
        Ok(())
    }
}
