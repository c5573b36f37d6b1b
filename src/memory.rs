//! In-memory ports for hosts without a DOM and for tests.
//!
//! Each type is a cheap `Rc` handle, like the web-sys handles it stands in
//! for: clone one before handing it to the controller to keep observing it.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::error::ThemeError;
use crate::ports::{IconClasses, PreferenceStore, ThemeTarget, ToggleControl};

#[derive(Default)]
struct StoreState {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Rc<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without going through [`PreferenceStore::set`].
    pub fn insert(&self, key: &str, value: &str) {
        self.state
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.state.entries.borrow().get(key).cloned()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.fail_writes.set(fail);
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.state.fail_reads.get() {
            return Err(ThemeError::StorageUnavailable);
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.state.fail_writes.get() {
            return Err(ThemeError::Storage("quota exceeded".to_string()));
        }
        self.insert(key, value);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryTarget {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(value.to_string()))),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    pub fn clear(&self) {
        self.value.borrow_mut().take();
    }
}

impl ThemeTarget for MemoryTarget {
    fn theme(&self) -> Option<String> {
        self.value()
    }

    fn set_theme(&self, value: &str) -> Result<(), ThemeError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryIcon {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryIcon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl IconClasses for MemoryIcon {
    fn add_class(&self, class: &str) -> Result<(), ThemeError> {
        self.classes.borrow_mut().insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), ThemeError> {
        self.classes.borrow_mut().remove(class);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryToggle {
    icon: Option<MemoryIcon>,
    handlers: Rc<RefCell<Vec<Box<dyn FnMut()>>>>,
}

impl MemoryToggle {
    /// A toggle with no icon inside it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icon(icon: MemoryIcon) -> Self {
        Self {
            icon: Some(icon),
            handlers: Rc::default(),
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Simulate a click: run every registered handler once, in order.
    pub fn activate(&self) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler();
        }
    }
}

impl ToggleControl for MemoryToggle {
    type Icon = MemoryIcon;

    fn status_icon(&self) -> Option<MemoryIcon> {
        self.icon.clone()
    }

    fn on_activate(&self, handler: Box<dyn FnMut()>) -> Result<(), ThemeError> {
        self.handlers.borrow_mut().push(handler);
        Ok(())
    }
}
