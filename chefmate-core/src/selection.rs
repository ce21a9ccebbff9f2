//! The user's current ingredient choices.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Item name -> free-text quantity. An empty quantity means "default amount".
///
/// The key set is exactly the set of toggled-on items: toggling an item off
/// drops its quantity along with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionMap {
    entries: IndexMap<String, String>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `item` with an empty quantity, or deselect it if already present.
    ///
    /// Returns whether the item is selected afterwards.
    pub fn toggle(&mut self, item: &str) -> bool {
        if self.entries.shift_remove(item).is_some() {
            false
        } else {
            self.entries.insert(item.to_string(), String::new());
            true
        }
    }

    /// Update the quantity of an already selected item.
    ///
    /// Never inserts: returns false and leaves the map untouched when `item`
    /// is not selected.
    pub fn set_quantity(&mut self, item: &str, quantity: &str) -> bool {
        match self.entries.get_mut(item) {
            Some(existing) => {
                *existing = quantity.to_string();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.entries.contains_key(item)
    }

    /// The raw quantity text for a selected item (possibly empty).
    pub fn quantity(&self, item: &str) -> Option<&str> {
        self.entries.get(item).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(item, quantity)` pairs in selection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(item, quantity)| (item.as_str(), quantity.as_str()))
    }
}
