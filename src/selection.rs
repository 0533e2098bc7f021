//! Selection Set
//!
//! Multi-select state for the actions of the current item.

use indexmap::IndexSet;

/// Selected action names, in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: IndexSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.shift_remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
