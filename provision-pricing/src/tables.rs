//! Keyword tables for ingredient pricing and categorization.
//!
//! Both tables are sorted by keyword length descending at load time and
//! scanned linearly, so longer keywords match before shorter overlapping
//! ones. Prices are per canonical unit (kg, liter, piece, bottle, pack) in
//! the charter's billing currency.

use std::sync::LazyLock;

use tracing::debug;

use crate::category::Category;

/// Price charged per canonical unit when no keyword matches.
///
/// Unknown ingredients are surcharged rather than rejected: the external
/// generator routinely invents items the table has never seen.
pub const DEFAULT_ITEM_PRICE: f64 = 5.0;

const PRICE_KEYWORDS: &[(&str, f64)] = &[
    // Beverages
    ("cold-pressed juice", 6.5),
    ("coconut water", 2.5),
    ("coffee", 12.0),
    ("juice", 3.0),
    ("soda", 1.5),
    ("wine", 15.0),
    ("beer", 2.5),
    ("tea", 8.0),
    // Fresh fruits
    ("berries", 8.0),
    ("banana", 2.0),
    ("oranges", 3.0),
    ("grapes", 5.0),
    ("mango", 4.5),
    ("melon", 3.5),
    ("apples", 3.0),
    // Fresh produce
    ("cucumber", 2.5),
    ("avocado", 2.5),
    ("tomato", 3.5),
    ("pepper", 4.0),
    ("potato", 1.8),
    ("greens", 6.0),
    ("onion", 2.0),
    ("salad", 6.0),
    ("herbs", 2.0),
    // Breakfast
    ("gluten-free bread", 7.5),
    ("gluten-free flour", 6.0),
    ("maple syrup", 11.0),
    ("preserves", 8.5),
    ("pancake", 5.0),
    ("granola", 7.0),
    ("cereal", 5.5),
    ("bread", 4.5),
    ("flour", 3.0),
    ("honey", 9.0),
    ("eggs", 4.0),
    ("oats", 3.5),
    ("jam", 4.5),
    // Dairy
    ("greek yogurt", 5.5),
    ("yogurt", 4.0),
    ("butter", 9.0),
    ("cheese", 14.0),
    ("cream", 4.5),
    ("milk", 1.5),
    // Dinner ingredients
    ("olive oil", 10.0),
    ("chicken", 9.5),
    ("salmon", 26.0),
    ("shrimp", 24.0),
    ("pasta", 2.5),
    ("sauce", 5.0),
    ("beef", 18.0),
    ("fish", 22.0),
    ("rice", 3.0),
    ("tofu", 6.0),
    // Snacks
    ("dried fruit", 10.0),
    ("chocolate", 12.0),
    ("crackers", 4.5),
    ("cookies", 6.0),
    ("chips", 4.0),
    ("nuts", 16.0),
    // Premium deli
    ("charcuterie", 25.0),
    ("prosciutto", 28.0),
    ("truffle", 80.0),
    ("caviar", 120.0),
];

const CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    ("cold-pressed juice", Category::GourmetExtras),
    ("coffee", Category::Beverages),
    ("juice", Category::Beverages),
    ("soda", Category::Beverages),
    ("wine", Category::Beverages),
    ("beer", Category::Beverages),
    ("tea", Category::Beverages),
    ("berries", Category::FreshFruits),
    ("banana", Category::FreshFruits),
    ("oranges", Category::FreshFruits),
    ("grapes", Category::FreshFruits),
    ("mango", Category::FreshFruits),
    ("melon", Category::FreshFruits),
    ("apples", Category::FreshFruits),
    ("fruit", Category::FreshFruits),
    ("cucumber", Category::FreshProduce),
    ("avocado", Category::FreshProduce),
    ("vegetable", Category::FreshProduce),
    ("tomato", Category::FreshProduce),
    ("pepper", Category::FreshProduce),
    ("potato", Category::FreshProduce),
    ("greens", Category::FreshProduce),
    ("onion", Category::FreshProduce),
    ("salad", Category::FreshProduce),
    ("herbs", Category::FreshProduce),
    ("maple syrup", Category::Breakfast),
    ("preserves", Category::Breakfast),
    ("pancake", Category::Breakfast),
    ("granola", Category::Breakfast),
    ("cereal", Category::Breakfast),
    ("toast", Category::Breakfast),
    ("bread", Category::Breakfast),
    ("flour", Category::Breakfast),
    ("honey", Category::Breakfast),
    ("yogurt", Category::Breakfast),
    ("eggs", Category::Breakfast),
    ("milk", Category::Breakfast),
    ("oats", Category::Breakfast),
    ("jam", Category::Breakfast),
    ("butter", Category::Dairy),
    ("cheese", Category::Dairy),
    ("cream", Category::Dairy),
    ("olive oil", Category::DinnerIngredients),
    ("chicken", Category::DinnerIngredients),
    ("salmon", Category::DinnerIngredients),
    ("shrimp", Category::DinnerIngredients),
    ("pasta", Category::DinnerIngredients),
    ("sauce", Category::DinnerIngredients),
    ("beef", Category::DinnerIngredients),
    ("fish", Category::DinnerIngredients),
    ("rice", Category::DinnerIngredients),
    ("tofu", Category::DinnerIngredients),
    ("dried fruit", Category::Snacks),
    ("chocolate", Category::Snacks),
    ("crackers", Category::Snacks),
    ("cookies", Category::Snacks),
    ("chips", Category::Snacks),
    ("nuts", Category::Snacks),
    ("charcuterie", Category::PremiumDeli),
    ("prosciutto", Category::PremiumDeli),
    ("truffle", Category::PremiumDeli),
    ("caviar", Category::PremiumDeli),
];

/// Price table sorted by keyword length descending.
/// Secondary sort by keyword alphabetically for deterministic ordering.
static PRICE_KEYWORDS_SORTED: LazyLock<Vec<(&'static str, f64)>> = LazyLock::new(|| {
    let mut table = PRICE_KEYWORDS.to_vec();
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    table
});

/// Category table sorted the same way.
static CATEGORY_KEYWORDS_SORTED: LazyLock<Vec<(&'static str, Category)>> = LazyLock::new(|| {
    let mut table = CATEGORY_KEYWORDS.to_vec();
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    table
});

/// Look up the price per canonical unit for an ingredient name.
///
/// Longest keyword match wins; unknown ingredients get [`DEFAULT_ITEM_PRICE`].
pub fn price_for(name: &str) -> f64 {
    let lower = name.to_lowercase();
    match PRICE_KEYWORDS_SORTED
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
    {
        Some((_, price)) => *price,
        None => {
            debug!(item = name, "no price keyword matched, using default price");
            DEFAULT_ITEM_PRICE
        }
    }
}

/// Classify an ingredient name into a category.
///
/// Water-bearing names are routed ahead of the generic table: coconut water
/// is a beverage, mineral/sparkling water is mineral water, anything else
/// containing "water" is still water. Unmatched names fall back to
/// [`Category::Miscellaneous`].
pub fn category_for(name: &str) -> Category {
    let lower = name.to_lowercase();
    if lower.contains("water") {
        if lower.contains("coconut") {
            return Category::Beverages;
        }
        if lower.contains("mineral") || lower.contains("sparkling") {
            return Category::MineralWater;
        }
        return Category::StillWater;
    }
    CATEGORY_KEYWORDS_SORTED
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Miscellaneous)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_match_wins() {
        // "cold-pressed juice" must outrank the shorter "juice" entry.
        assert_eq!(price_for("Cold-Pressed Juice"), 6.5);
        assert_eq!(price_for("Orange Juice"), 3.0);
        assert_eq!(category_for("Cold-Pressed Juice"), Category::GourmetExtras);
        assert_eq!(category_for("Orange Juice"), Category::Beverages);
    }

    #[test]
    fn test_yogurt_is_breakfast() {
        assert_eq!(category_for("Organic Greek Yogurt"), Category::Breakfast);
        assert_eq!(price_for("Organic Greek Yogurt"), 5.5);
    }

    #[test]
    fn test_water_routing() {
        assert_eq!(category_for("Still Water"), Category::StillWater);
        assert_eq!(category_for("Spring Water"), Category::StillWater);
        assert_eq!(category_for("Sparkling Water"), Category::MineralWater);
        assert_eq!(category_for("Mineral Water"), Category::MineralWater);
        assert_eq!(category_for("Coconut Water"), Category::Beverages);
    }

    #[test]
    fn test_unknown_ingredient() {
        assert_eq!(price_for("xyzfoobar123"), DEFAULT_ITEM_PRICE);
        assert_eq!(category_for("xyzfoobar123"), Category::Miscellaneous);
    }

    #[test]
    fn test_canonical_pantry_names() {
        assert_eq!(category_for("Organic Salad Greens Mix"), Category::FreshProduce);
        assert_eq!(category_for("Gluten-Free Bread"), Category::Breakfast);
        assert_eq!(category_for("Gluten-Free Flour Mix"), Category::Breakfast);
        assert_eq!(category_for("Premium Preserves and Honey"), Category::Breakfast);
        assert_eq!(category_for("Mixed Premium Nuts"), Category::Snacks);
    }
}
