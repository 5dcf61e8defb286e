//! The closed vocabulary of provisioning categories.
//!
//! Categories are a fixed enum rather than open strings so the budget
//! percentage table and the keyword map cannot reference a label that does
//! not exist. Free-text labels from external drafts resolve through
//! [`Category::from_label`]; labels outside the vocabulary stay unresolved
//! and fall under the caller's default budget rule.

use std::fmt;

/// A provisioning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MineralWater,
    StillWater,
    Beverages,
    FreshFruits,
    FreshProduce,
    Breakfast,
    DinnerIngredients,
    Snacks,
    Dairy,
    PremiumDeli,
    GourmetExtras,
    Miscellaneous,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::MineralWater,
        Category::StillWater,
        Category::Beverages,
        Category::FreshFruits,
        Category::FreshProduce,
        Category::Breakfast,
        Category::DinnerIngredients,
        Category::Snacks,
        Category::Dairy,
        Category::PremiumDeli,
        Category::GourmetExtras,
        Category::Miscellaneous,
    ];

    /// Display label used in provisions lists and cost breakdowns.
    pub fn label(self) -> &'static str {
        match self {
            Category::MineralWater => "Mineral Water",
            Category::StillWater => "Still Water",
            Category::Beverages => "Beverages",
            Category::FreshFruits => "Fresh Fruits",
            Category::FreshProduce => "Fresh Produce",
            Category::Breakfast => "Breakfast",
            Category::DinnerIngredients => "Dinner Ingredients",
            Category::Snacks => "Snacks",
            Category::Dairy => "Dairy",
            Category::PremiumDeli => "Premium Deli",
            Category::GourmetExtras => "Gourmet Extras",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    /// Share of the total budget this category may consume, in percent.
    ///
    /// Returns `None` for the two water categories: water ceilings come from
    /// the fixed water budget sub-split, never from this table.
    pub fn budget_percent(self) -> Option<f64> {
        match self {
            Category::MineralWater | Category::StillWater => None,
            Category::Beverages => Some(8.0),
            Category::FreshFruits => Some(10.0),
            Category::FreshProduce => Some(12.0),
            Category::Breakfast => Some(12.0),
            Category::DinnerIngredients => Some(20.0),
            Category::Snacks => Some(8.0),
            Category::Dairy => Some(10.0),
            Category::PremiumDeli => Some(10.0),
            Category::GourmetExtras => Some(10.0),
            Category::Miscellaneous => Some(15.0),
        }
    }

    /// Resolve a free-text category label to a vocabulary entry.
    ///
    /// Matching is case-insensitive and accepts the label variants external
    /// drafts are known to produce ("Snack Options", "Breakfast Items").
    pub fn from_label(label: &str) -> Option<Category> {
        if let Some(water) = water_category_for_label(label) {
            return Some(water);
        }
        match label.trim().to_lowercase().as_str() {
            "beverages" | "general beverages" | "drinks" => Some(Category::Beverages),
            "fresh fruits" | "fruits" => Some(Category::FreshFruits),
            "fresh produce" | "produce" | "vegetables" | "fresh vegetables" => {
                Some(Category::FreshProduce)
            }
            "breakfast" | "breakfast items" => Some(Category::Breakfast),
            "dinner ingredients" | "dinner" => Some(Category::DinnerIngredients),
            "snacks" | "snack options" => Some(Category::Snacks),
            "dairy" | "dairy products" => Some(Category::Dairy),
            "premium deli" | "deli" => Some(Category::PremiumDeli),
            "gourmet extras" | "gourmet" => Some(Category::GourmetExtras),
            "miscellaneous" | "misc" | "other" => Some(Category::Miscellaneous),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Route a water-bearing category label to its water category.
///
/// Returns `None` for labels that do not mention water at all. "Mineral" and
/// "sparkling" route to mineral water; every other water label is still water.
pub fn water_category_for_label(label: &str) -> Option<Category> {
    let lower = label.to_lowercase();
    if !lower.contains("water") {
        return None;
    }
    if lower.contains("mineral") || lower.contains("sparkling") {
        Some(Category::MineralWater)
    } else {
        Some(Category::StillWater)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for &category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_from_label_aliases() {
        assert_eq!(Category::from_label("Snack Options"), Some(Category::Snacks));
        assert_eq!(Category::from_label("breakfast items"), Some(Category::Breakfast));
        assert_eq!(Category::from_label("Vegetables"), Some(Category::FreshProduce));
        assert_eq!(Category::from_label("Charter Extras"), None);
    }

    #[test]
    fn test_water_labels() {
        assert_eq!(
            water_category_for_label("Sparkling Water"),
            Some(Category::MineralWater)
        );
        assert_eq!(
            water_category_for_label("Drinking Water"),
            Some(Category::StillWater)
        );
        assert_eq!(water_category_for_label("Beverages"), None);
    }

    #[test]
    fn test_water_has_no_table_percent() {
        assert_eq!(Category::StillWater.budget_percent(), None);
        assert_eq!(Category::MineralWater.budget_percent(), None);
        assert_eq!(Category::DinnerIngredients.budget_percent(), Some(20.0));
    }
}
