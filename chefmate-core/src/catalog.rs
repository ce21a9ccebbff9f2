//! The fixed list of food items a user can pick from.

/// Every selectable item, in display order.
pub const CATALOG: [&str; 20] = [
    "Chicken",
    "Beef",
    "Fish",
    "Pork",
    "Milk",
    "Cheese",
    "Yogurt",
    "Eggs",
    "Carrots",
    "Broccoli",
    "Spinach",
    "Tomatoes",
    "Potatoes",
    "Onions",
    "Peppers",
    "Apples",
    "Bananas",
    "Oranges",
    "Grapes",
    "Strawberries",
];

/// Returns true if `name` is one of the catalog items (exact match).
pub fn is_catalog_item(name: &str) -> bool {
    CATALOG.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_twenty_unique_items() {
        let unique: HashSet<&str> = CATALOG.iter().copied().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn test_is_catalog_item() {
        assert!(is_catalog_item("Chicken"));
        assert!(is_catalog_item("Strawberries"));
        assert!(!is_catalog_item("chicken"));
        assert!(!is_catalog_item("Tofu"));
    }
}
