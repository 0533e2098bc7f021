//! Item Grouping
//!
//! Reshapes the flat item list into category -> subcategory -> items.

use indexmap::IndexMap;

use crate::models::Item;

/// Subcategory name -> items, in first-seen order
pub type SubcategoryGroups = IndexMap<String, Vec<Item>>;

/// Category name -> subcategories, in first-seen order
pub type GroupedView = IndexMap<String, SubcategoryGroups>;

/// Group items by category and subcategory.
///
/// Items keep their relative input order inside each bucket. Records with a
/// missing category or subcategory land under the empty-string key.
pub fn group_items(items: &[Item]) -> GroupedView {
    let mut grouped = GroupedView::new();
    for item in items {
        grouped
            .entry(item.category.clone())
            .or_default()
            .entry(item.subcategory.clone())
            .or_default()
            .push(item.clone());
    }
    grouped
}

/// Flatten a grouped view back into a list (category, then subcategory order)
#[cfg(test)]
pub fn flatten_groups(grouped: &GroupedView) -> Vec<Item> {
    grouped
        .values()
        .flat_map(|subs| subs.values())
        .flat_map(|items| items.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(name: &str, category: &str, subcategory: &str) -> Item {
        Item {
            name: name.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            requests: Vec::new(),
        }
    }

    #[test]
    fn test_group_single_item() {
        let bread = Item {
            requests: vec!["spread butter".to_string(), "toast".to_string()],
            ..make_item("bread", "food", "baked goods")
        };
        let grouped = group_items(&[bread.clone()]);

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped["food"].len(), 1);
        assert_eq!(grouped["food"]["baked goods"], vec![bread]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_items(&[]).is_empty());
    }

    #[test]
    fn test_bucket_order_follows_input() {
        let items = vec![
            make_item("water", "food", "beverages"),
            make_item("bread", "food", "baked goods"),
            make_item("toothbrush", "care", "oral hygiene"),
            make_item("tea", "food", "beverages"),
        ];
        let grouped = group_items(&items);

        let categories: Vec<_> = grouped.keys().cloned().collect();
        assert_eq!(categories, vec!["food", "care"]);
        let subs: Vec<_> = grouped["food"].keys().cloned().collect();
        assert_eq!(subs, vec!["beverages", "baked goods"]);
        let names: Vec<_> = grouped["food"]["beverages"].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["water", "tea"]);
    }

    #[test]
    fn test_missing_keys_group_under_empty_string() {
        let grouped = group_items(&[make_item("cup", "", "")]);
        assert_eq!(grouped[""][""].len(), 1);
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let items = vec![
            make_item("water", "food", "beverages"),
            make_item("bread", "food", "baked goods"),
            make_item("tea", "food", "beverages"),
            make_item("socks", "clothing", "footwear"),
        ];
        let once = group_items(&items);
        let twice = group_items(&flatten_groups(&once));
        assert_eq!(once, twice);
    }
}
