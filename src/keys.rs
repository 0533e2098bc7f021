//! Logical Media Keys
//!
//! Deterministic lookup keys derived from hierarchy names.

use std::fmt;

/// Key used to look up media for a card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    /// `category-<category>`
    Category(String),
    /// `subcategory-<category>-<subcategory>`
    Subcategory(String, String),
    /// `item-<name>`
    Item(String),
    /// `<name>-<action>`
    Action(String, String),
}

impl LogicalKey {
    pub fn category(category: &str) -> Self {
        LogicalKey::Category(category.to_string())
    }

    pub fn subcategory(category: &str, subcategory: &str) -> Self {
        LogicalKey::Subcategory(category.to_string(), subcategory.to_string())
    }

    pub fn item(name: &str) -> Self {
        LogicalKey::Item(name.to_string())
    }

    pub fn action(item: &str, action: &str) -> Self {
        LogicalKey::Action(item.to_string(), action.to_string())
    }

    /// Name spoken when the card's audio button is pressed
    pub fn spoken_name(&self) -> &str {
        match self {
            LogicalKey::Category(name) => name,
            LogicalKey::Subcategory(_, name) => name,
            LogicalKey::Item(name) => name,
            LogicalKey::Action(_, action) => action,
        }
    }
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalKey::Category(c) => write!(f, "category-{}", c),
            LogicalKey::Subcategory(c, s) => write!(f, "subcategory-{}-{}", c, s),
            LogicalKey::Item(n) => write!(f, "item-{}", n),
            LogicalKey::Action(n, a) => write!(f, "{}-{}", n, a),
        }
    }
}
