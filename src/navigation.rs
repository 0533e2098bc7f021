//! Hierarchical Navigation
//!
//! Drill-down state machine: categories -> subcategories -> items -> actions.
//!
//! Deeper states carry their parent selections as fields, so a state without
//! the required parent selection cannot be built. `NavigationController`
//! wraps the state together with the grouped data it browses and is
//! instantiated once per screen.

use std::fmt;

use thiserror::Error;

use crate::grouping::{group_items, GroupedView};
use crate::keys::LogicalKey;
use crate::models::Item;
use crate::selection::SelectionSet;

/// Level of the hierarchy currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Depth {
    Categories,
    Subcategories,
    Items,
    Actions,
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Depth::Categories => "categories",
            Depth::Subcategories => "subcategories",
            Depth::Items => "items",
            Depth::Actions => "actions",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("cannot enter {to} from {from}")]
    InvalidTransition { from: Depth, to: Depth },
    #[error("no {level} named '{name}'")]
    UnknownTarget { level: Depth, name: String },
}

/// Current position in the hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavigationState {
    #[default]
    Categories,
    Subcategories {
        category: String,
    },
    Items {
        category: String,
        subcategory: String,
    },
    Actions {
        category: String,
        subcategory: String,
        item: Item,
        selection: SelectionSet,
    },
}

impl NavigationState {
    pub fn depth(&self) -> Depth {
        match self {
            NavigationState::Categories => Depth::Categories,
            NavigationState::Subcategories { .. } => Depth::Subcategories,
            NavigationState::Items { .. } => Depth::Items,
            NavigationState::Actions { .. } => Depth::Actions,
        }
    }

    pub fn selected_category(&self) -> Option<&str> {
        match self {
            NavigationState::Categories => None,
            NavigationState::Subcategories { category }
            | NavigationState::Items { category, .. }
            | NavigationState::Actions { category, .. } => Some(category.as_str()),
        }
    }

    pub fn selected_subcategory(&self) -> Option<&str> {
        match self {
            NavigationState::Items { subcategory, .. } | NavigationState::Actions { subcategory, .. } => {
                Some(subcategory.as_str())
            }
            _ => None,
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        match self {
            NavigationState::Actions { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&SelectionSet> {
        match self {
            NavigationState::Actions { selection, .. } => Some(selection),
            _ => None,
        }
    }

    pub fn enter_subcategory(&mut self, category: &str) -> Result<(), NavigationError> {
        match self {
            NavigationState::Categories => {
                *self = NavigationState::Subcategories { category: category.to_string() };
                Ok(())
            }
            other => Err(NavigationError::InvalidTransition { from: other.depth(), to: Depth::Subcategories }),
        }
    }

    pub fn enter_items(&mut self, subcategory: &str) -> Result<(), NavigationError> {
        match self {
            NavigationState::Subcategories { category } => {
                let category = std::mem::take(category);
                *self = NavigationState::Items { category, subcategory: subcategory.to_string() };
                Ok(())
            }
            other => Err(NavigationError::InvalidTransition { from: other.depth(), to: Depth::Items }),
        }
    }

    /// Enter the actions of `item`. The selection always starts empty.
    pub fn enter_actions(&mut self, item: Item) -> Result<(), NavigationError> {
        match self {
            NavigationState::Items { category, subcategory } => {
                let category = std::mem::take(category);
                let subcategory = std::mem::take(subcategory);
                *self = NavigationState::Actions { category, subcategory, item, selection: SelectionSet::new() };
                Ok(())
            }
            other => Err(NavigationError::InvalidTransition { from: other.depth(), to: Depth::Actions }),
        }
    }

    /// Move one level up, dropping the selection of the level being left.
    /// Returns `false` at the top level.
    pub fn back(&mut self) -> bool {
        let prev = std::mem::take(self);
        *self = match prev {
            NavigationState::Categories => return false,
            NavigationState::Subcategories { .. } => NavigationState::Categories,
            NavigationState::Items { category, .. } => NavigationState::Subcategories { category },
            NavigationState::Actions { category, subcategory, .. } => NavigationState::Items { category, subcategory },
        };
        true
    }
}

/// Borrowed projection of the controller for rendering
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentView<'a> {
    Categories {
        categories: Vec<&'a str>,
    },
    Subcategories {
        category: &'a str,
        subcategories: Vec<&'a str>,
    },
    Items {
        category: &'a str,
        subcategory: &'a str,
        items: &'a [Item],
    },
    Actions {
        category: &'a str,
        subcategory: &'a str,
        item: &'a Item,
        selection: &'a SelectionSet,
    },
}

/// One drill-down browser over a grouped dataset
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    groups: GroupedView,
    state: NavigationState,
    epoch: u64,
}

impl NavigationController {
    pub fn new(items: &[Item]) -> Self {
        Self { groups: group_items(items), state: NavigationState::Categories, epoch: 0 }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn depth(&self) -> Depth {
        self.state.depth()
    }

    /// Incremented on every effective transition. Async work started for an
    /// older epoch must not be applied.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn selection(&self) -> Option<&SelectionSet> {
        self.state.selection()
    }

    /// Drill into the child named `name` of the current level.
    pub fn enter(&mut self, name: &str) -> Result<Depth, NavigationError> {
        match self.depth() {
            Depth::Categories => self.enter_subcategory(name),
            Depth::Subcategories => self.enter_items(name),
            Depth::Items => self.enter_actions(name),
            Depth::Actions => Err(NavigationError::InvalidTransition { from: Depth::Actions, to: Depth::Actions }),
        }?;
        Ok(self.depth())
    }

    pub fn enter_subcategory(&mut self, category: &str) -> Result<(), NavigationError> {
        if self.depth() == Depth::Categories && !self.groups.contains_key(category) {
            return Err(NavigationError::UnknownTarget { level: Depth::Subcategories, name: category.to_string() });
        }
        self.state.enter_subcategory(category)?;
        self.bump();
        Ok(())
    }

    pub fn enter_items(&mut self, subcategory: &str) -> Result<(), NavigationError> {
        if let NavigationState::Subcategories { category } = &self.state {
            let known = self.groups.get(category).is_some_and(|subs| subs.contains_key(subcategory));
            if !known {
                return Err(NavigationError::UnknownTarget { level: Depth::Items, name: subcategory.to_string() });
            }
        }
        self.state.enter_items(subcategory)?;
        self.bump();
        Ok(())
    }

    /// Enter the actions of the item named `name` in the current subcategory.
    pub fn enter_actions(&mut self, name: &str) -> Result<(), NavigationError> {
        let item = match &self.state {
            NavigationState::Items { category, subcategory } => self
                .bucket(category, subcategory)
                .and_then(|items| items.iter().find(|item| item.name == name))
                .cloned()
                .ok_or_else(|| NavigationError::UnknownTarget { level: Depth::Actions, name: name.to_string() })?,
            other => {
                return Err(NavigationError::InvalidTransition { from: other.depth(), to: Depth::Actions });
            }
        };
        self.state.enter_actions(item)?;
        self.bump();
        Ok(())
    }

    pub fn back(&mut self) -> bool {
        let moved = self.state.back();
        if moved {
            self.bump();
        }
        moved
    }

    /// Toggle `action` for the current item. `None` outside the actions level.
    pub fn toggle(&mut self, action: &str) -> Option<bool> {
        match &mut self.state {
            NavigationState::Actions { selection, .. } => Some(selection.toggle(action)),
            _ => None,
        }
    }

    pub fn current(&self) -> CurrentView<'_> {
        match &self.state {
            NavigationState::Categories => CurrentView::Categories {
                categories: self.groups.keys().map(String::as_str).collect(),
            },
            NavigationState::Subcategories { category } => CurrentView::Subcategories {
                category: category.as_str(),
                subcategories: self
                    .groups
                    .get(category)
                    .map(|subs| subs.keys().map(String::as_str).collect())
                    .unwrap_or_default(),
            },
            NavigationState::Items { category, subcategory } => CurrentView::Items {
                category: category.as_str(),
                subcategory: subcategory.as_str(),
                items: self.bucket(category, subcategory).unwrap_or(&[]),
            },
            NavigationState::Actions { category, subcategory, item, selection } => {
                CurrentView::Actions { category: category.as_str(), subcategory: subcategory.as_str(), item, selection }
            }
        }
    }

    /// Media keys of the cards on screen right now
    pub fn visible_keys(&self) -> Vec<LogicalKey> {
        match self.current() {
            CurrentView::Categories { categories } => categories.into_iter().map(LogicalKey::category).collect(),
            CurrentView::Subcategories { category, subcategories } => subcategories
                .into_iter()
                .map(|sub| LogicalKey::subcategory(category, sub))
                .collect(),
            CurrentView::Items { items, .. } => items.iter().map(|item| LogicalKey::item(&item.name)).collect(),
            CurrentView::Actions { item, .. } => item
                .requests
                .iter()
                .map(|action| LogicalKey::action(&item.name, action))
                .collect(),
        }
    }

    pub fn is_visible(&self, key: &LogicalKey) -> bool {
        self.visible_keys().contains(key)
    }

    /// Replace the browsed data, keeping as much of the current path as
    /// still exists.
    pub fn set_items(&mut self, items: &[Item]) {
        self.groups = group_items(items);
        let before = self.depth();

        let state = std::mem::take(&mut self.state);
        self.state = self.reconcile(state);

        if self.depth() != before {
            log::debug!("[NAV] Dataset changed, popped from {} to {}", before, self.depth());
            self.bump();
        }
    }

    fn reconcile(&self, state: NavigationState) -> NavigationState {
        match state {
            NavigationState::Categories => NavigationState::Categories,
            NavigationState::Subcategories { category } => {
                if self.groups.contains_key(&category) {
                    NavigationState::Subcategories { category }
                } else {
                    NavigationState::Categories
                }
            }
            NavigationState::Items { category, subcategory } => {
                if self.bucket(&category, &subcategory).is_some() {
                    NavigationState::Items { category, subcategory }
                } else {
                    self.reconcile(NavigationState::Subcategories { category })
                }
            }
            NavigationState::Actions { category, subcategory, item, selection } => {
                let fresh = self
                    .bucket(&category, &subcategory)
                    .and_then(|items| items.iter().find(|candidate| candidate.name == item.name))
                    .cloned();
                match fresh {
                    Some(item) => NavigationState::Actions { category, subcategory, item, selection },
                    None => self.reconcile(NavigationState::Items { category, subcategory }),
                }
            }
        }
    }

    fn bucket(&self, category: &str, subcategory: &str) -> Option<&[Item]> {
        self.groups.get(category).and_then(|subs| subs.get(subcategory)).map(Vec::as_slice)
    }

    fn bump(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        log::debug!(
            "[NAV] depth={} category={:?} subcategory={:?} epoch={}",
            self.depth(),
            self.state.selected_category(),
            self.state.selected_subcategory(),
            self.epoch
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(name: &str, category: &str, subcategory: &str, requests: &[&str]) -> Item {
        Item {
            name: name.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            requests: requests.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn bread() -> Item {
        make_item("bread", "food", "baked goods", &["spread butter", "toast"])
    }

    fn dataset() -> Vec<Item> {
        vec![
            bread(),
            make_item("water", "food", "beverages", &["need refill", "add ice"]),
            make_item("toothbrush", "personal care", "oral hygiene", &["add toothpaste"]),
        ]
    }

    #[test]
    fn test_enter_then_back_to_items() {
        let mut state = NavigationState::Categories;
        state.enter_subcategory("food").unwrap();
        state.enter_items("baked goods").unwrap();
        state.enter_actions(bread()).unwrap();
        assert!(state.back());

        assert_eq!(state.depth(), Depth::Items);
        assert_eq!(state.selected_item(), None);
        assert_eq!(state.selected_subcategory(), Some("baked goods"));
        assert_eq!(state.selected_category(), Some("food"));
    }

    #[test]
    fn test_back_at_top_is_noop() {
        let mut state = NavigationState::Categories;
        assert!(!state.back());
        assert_eq!(state, NavigationState::Categories);
    }

    #[test]
    fn test_wrong_depth_is_rejected_without_change() {
        let mut state = NavigationState::Categories;
        let err = state.enter_items("baked goods").unwrap_err();
        assert_eq!(err, NavigationError::InvalidTransition { from: Depth::Categories, to: Depth::Items });
        assert_eq!(state, NavigationState::Categories);

        state.enter_subcategory("food").unwrap();
        assert!(state.enter_actions(bread()).is_err());
        assert_eq!(state.depth(), Depth::Subcategories);
    }

    #[test]
    fn test_back_clears_selection() {
        let mut nav = NavigationController::new(&dataset());
        nav.enter("food").unwrap();
        nav.enter("baked goods").unwrap();
        nav.enter("bread").unwrap();
        assert_eq!(nav.toggle("toast"), Some(true));
        assert_eq!(nav.selection().map(SelectionSet::len), Some(1));

        assert!(nav.back());
        assert_eq!(nav.depth(), Depth::Items);
        assert!(nav.state().selected_item().is_none());
        assert!(nav.selection().is_none());

        // re-entry starts with an empty selection
        nav.enter("bread").unwrap();
        assert!(nav.selection().unwrap().is_empty());
    }

    #[test]
    fn test_no_stale_selection_after_switching_path() {
        let mut nav = NavigationController::new(&dataset());
        nav.enter("food").unwrap();
        nav.enter("baked goods").unwrap();
        nav.back();
        nav.back();
        nav.enter("personal care").unwrap();

        assert_eq!(nav.state().selected_category(), Some("personal care"));
        assert_eq!(nav.state().selected_subcategory(), None);
        assert_eq!(nav.state().selected_item(), None);
    }

    #[test]
    fn test_depth_tracks_enter_minus_effective_back() {
        let path = ["food", "beverages", "water"];

        // every enter/back sequence up to six steps; bit set = enter
        for len in 0..=6u32 {
            for script in 0..(1u32 << len) {
                let mut nav = NavigationController::new(&dataset());
                let mut expected = 0usize;
                for step in 0..len {
                    if script & (1 << step) != 0 {
                        if expected < 3 {
                            assert_eq!(nav.enter(path[expected]).unwrap() as usize, expected + 1);
                            expected += 1;
                        } else {
                            assert!(nav.enter("toast").is_err());
                        }
                    } else {
                        assert_eq!(nav.back(), expected > 0);
                        expected = expected.saturating_sub(1);
                    }
                    assert_eq!(nav.depth() as usize, expected, "script {:0width$b}", script, width = len as usize);
                }
            }
        }
    }

    #[test]
    fn test_enter_past_actions_is_rejected() {
        let mut nav = NavigationController::new(&dataset());
        for name in ["food", "baked goods", "bread"] {
            nav.enter(name).unwrap();
        }
        assert!(nav.enter("toast").is_err());
        assert_eq!(nav.depth(), Depth::Actions);
    }

    #[test]
    fn test_unknown_target_is_rejected() {
        let mut nav = NavigationController::new(&dataset());
        let err = nav.enter("furniture").unwrap_err();
        assert_eq!(err, NavigationError::UnknownTarget { level: Depth::Subcategories, name: "furniture".into() });
        assert_eq!(nav.depth(), Depth::Categories);
        assert_eq!(nav.epoch(), 0);
    }

    #[test]
    fn test_current_view_projection() {
        let mut nav = NavigationController::new(&dataset());
        assert_eq!(nav.current(), CurrentView::Categories { categories: vec!["food", "personal care"] });

        nav.enter("food").unwrap();
        assert_eq!(
            nav.current(),
            CurrentView::Subcategories { category: "food", subcategories: vec!["baked goods", "beverages"] }
        );

        nav.enter("beverages").unwrap();
        match nav.current() {
            CurrentView::Items { items, .. } => assert_eq!(items[0].name, "water"),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_visible_keys_follow_depth() {
        let mut nav = NavigationController::new(&dataset());
        assert!(nav.is_visible(&LogicalKey::category("food")));

        nav.enter("food").unwrap();
        assert!(nav.is_visible(&LogicalKey::subcategory("food", "baked goods")));
        assert!(!nav.is_visible(&LogicalKey::category("food")));

        nav.enter("baked goods").unwrap();
        nav.enter("bread").unwrap();
        assert_eq!(
            nav.visible_keys(),
            vec![LogicalKey::action("bread", "spread butter"), LogicalKey::action("bread", "toast")]
        );
    }

    #[test]
    fn test_epoch_advances_only_on_effective_transitions() {
        let mut nav = NavigationController::new(&dataset());
        nav.back();
        assert_eq!(nav.epoch(), 0);
        nav.enter("food").unwrap();
        nav.back();
        assert_eq!(nav.epoch(), 2);
    }

    #[test]
    fn test_set_items_swaps_in_updated_item() {
        let mut nav = NavigationController::new(&dataset());
        for name in ["food", "baked goods", "bread"] {
            nav.enter(name).unwrap();
        }
        nav.toggle("toast");
        let epoch = nav.epoch();

        let mut items = dataset();
        items[0] = bread().with_request("spread jam").unwrap();
        nav.set_items(&items);

        assert_eq!(nav.depth(), Depth::Actions);
        assert_eq!(nav.state().selected_item().unwrap().requests.len(), 3);
        assert!(nav.selection().unwrap().contains("toast"));
        assert_eq!(nav.epoch(), epoch);
    }

    #[test]
    fn test_set_items_pops_to_deepest_existing_level() {
        let mut nav = NavigationController::new(&dataset());
        for name in ["food", "baked goods", "bread"] {
            nav.enter(name).unwrap();
        }

        // bread removed, baked goods bucket gone, food still there
        let items: Vec<Item> = dataset().into_iter().filter(|i| i.name != "bread").collect();
        nav.set_items(&items);

        assert_eq!(nav.depth(), Depth::Subcategories);
        assert_eq!(nav.state().selected_category(), Some("food"));
    }
}
