//! In-memory stand-ins for the browser capabilities.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::ViewError;
use super::location::PageLocation;
use super::notify::NotificationSink;
use super::storage::KeyValueStore;

#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<RefCell<bool>>,
}

impl MemoryStore {
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn fail_writes(&self) {
        *self.fail_writes.borrow_mut() = true;
    }

    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.item(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ViewError> {
        if *self.fail_writes.borrow() {
            return Err(ViewError::Storage("QuotaExceededError".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeLocation {
    search: Rc<RefCell<String>>,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl FakeLocation {
    pub fn at(search: &str) -> Self {
        let location = Self::default();
        *location.search.borrow_mut() = search.to_string();
        location
    }

    pub fn current(&self) -> String {
        self.search.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl PageLocation for FakeLocation {
    fn search(&self) -> String {
        self.current()
    }

    fn set_search(&self, query: &str) -> Result<(), ViewError> {
        *self.search.borrow_mut() = query.to_string();
        self.navigations.borrow_mut().push(query.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingSink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
