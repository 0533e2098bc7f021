//! Text Helpers
//!
//! Small formatting helpers shared by the views and API bindings.

/// "baked goods" -> "Baked Goods"
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Name used in audio file lookups: spaces become underscores
pub fn audio_slug(name: &str) -> String {
    name.replace(' ', "_")
}

/// Clean up a comma-separated item list typed by the caregiver.
/// Returns `None` when nothing but separators and whitespace was entered.
pub fn normalize_item_list(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Last path segment of a stored media reference
pub fn basename(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("baked goods"), "Baked Goods");
        assert_eq!(title_case("FOOD and DRINKS"), "Food And Drinks");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_audio_slug() {
        assert_eq!(audio_slug("food and drinks"), "food_and_drinks");
    }

    #[test]
    fn test_normalize_item_list() {
        assert_eq!(normalize_item_list(" bread,water ,  apple "), Some("bread, water, apple".to_string()));
        assert_eq!(normalize_item_list(" , ,"), None);
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("oss/images/category_food.png"), "category_food.png");
        assert_eq!(basename("bread.png"), "bread.png");
    }
}
