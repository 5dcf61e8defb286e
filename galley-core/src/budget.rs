//! Per-category budget ceilings.
//!
//! Two tiers, applied in this order: the two water categories are governed by
//! a fixed water budget (10% of the total, split 60/40 still/mineral),
//! regardless of anything the generic table says; every other label resolves
//! through the closed category vocabulary, with a default percentage for
//! labels outside it.

use provision_pricing::{water_category_for_label, Category};

use crate::water::{MINERAL_SHARE, STILL_SHARE};

/// Share of the total budget reserved for drinking water, in percent.
pub const WATER_BUDGET_PERCENT: f64 = 10.0;

/// Ceiling percentage for category labels outside the closed vocabulary.
pub const UNLISTED_CATEGORY_PERCENT: f64 = 15.0;

/// The spending ceiling for a category label against a total budget.
pub fn ceiling(category_label: &str, total_budget: f64) -> f64 {
    if let Some(water) = water_category_for_label(category_label) {
        let water_budget = total_budget * WATER_BUDGET_PERCENT / 100.0;
        let share = match water {
            Category::MineralWater => MINERAL_SHARE,
            _ => STILL_SHARE,
        };
        return water_budget * share;
    }
    let percent = Category::from_label(category_label)
        .and_then(Category::budget_percent)
        .unwrap_or(UNLISTED_CATEGORY_PERCENT);
    total_budget * percent / 100.0
}

/// Clamp a computed category cost to its ceiling. Never raises; overage is
/// surfaced at the whole-plan level, not per category.
pub fn clamp(category_label: &str, computed_cost: f64, total_budget: f64) -> f64 {
    computed_cost.min(ceiling(category_label, total_budget))
}
