//! Meal-plan to provisions cross-referencing.
//!
//! Scans the normalized meal plan's free text for ingredient families the
//! provisions list does not cover yet and synthesizes a canonical pantry
//! entry for each gap. Also guarantees both water varieties are represented
//! regardless of meal content.

use std::collections::HashSet;

use tracing::debug;

use provision_pricing::{category_for, price_for};

use crate::budget;
use crate::reconcile::{MINERAL_WATER_LABEL, STILL_WATER_LABEL};
use crate::types::{DayMealPlan, PricedCategory, PricedItem, TripParameters};
use crate::water;

/// Keyword families and the canonical pantry item each one maps to.
const FAMILIES: &[(&[&str], &str)] = &[
    (&["salad"], "Organic Salad Greens Mix"),
    (&["bread", "toast"], "Gluten-Free Bread"),
    (&["flour", "pancake"], "Gluten-Free Flour Mix"),
    (&["preserves", "honey"], "Premium Preserves and Honey"),
    (&["nuts"], "Mixed Premium Nuts"),
];

/// One gap-filled pack covers this many person-days, the same baseline the
/// normal per-person pricing uses.
const PERSON_DAYS_PER_PACK: f64 = 4.0;

/// Backfill provisions the meal plan implies but the list lacks.
pub fn fill_gaps(
    meal_plan: &[DayMealPlan],
    mut categories: Vec<PricedCategory>,
    params: &TripParameters,
) -> Vec<PricedCategory> {
    ensure_water(&mut categories, params);

    let tokens = meal_tokens(meal_plan);
    for (keywords, canonical) in FAMILIES {
        let mentioned = keywords
            .iter()
            .any(|keyword| tokens.iter().any(|token| token.contains(keyword)));
        if !mentioned || item_exists(&categories, canonical) {
            continue;
        }
        debug!(item = %canonical, "backfilling provisions gap from meal plan");
        add_pantry_item(&mut categories, canonical, params);
    }
    categories
}

/// Lowercase tokens of every meal suggestion, split on whitespace, commas,
/// and periods.
fn meal_tokens(meal_plan: &[DayMealPlan]) -> HashSet<String> {
    meal_plan
        .iter()
        .flat_map(|day| day.meals.iter())
        .flat_map(|meal| {
            meal.suggestion
                .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
                .filter(|token| !token.is_empty())
                .map(|token| token.to_lowercase())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Case-insensitive substring check against every item name in the list.
fn item_exists(categories: &[PricedCategory], name: &str) -> bool {
    let needle = name.to_lowercase();
    categories
        .iter()
        .flat_map(|c| c.items.iter())
        .any(|item| item.name.to_lowercase().contains(&needle))
}

/// Synthesize a canonical pantry entry and file it under its classified
/// category, creating the category if the list has no entry for it yet.
fn add_pantry_item(categories: &mut Vec<PricedCategory>, name: &str, params: &TripParameters) {
    let label = category_for(name).label();
    let person_days = f64::from(params.headcount * params.days());
    let packs = (person_days / PERSON_DAYS_PER_PACK).ceil().max(1.0) as u32;
    let item = PricedItem {
        name: name.to_string(),
        quantity: format!("{} packs", packs),
        estimated_price: price_for(name),
    };
    match categories
        .iter_mut()
        .find(|c| c.category.eq_ignore_ascii_case(label))
    {
        Some(existing) => existing.items.push(item),
        None => categories.push(PricedCategory {
            category: label.to_string(),
            items: vec![item],
            estimated_cost: 0.0,
        }),
    }
}

/// Guarantee both water varieties appear by item name, synthesizing computed
/// entries when a list arrives without them.
fn ensure_water(categories: &mut Vec<PricedCategory>, params: &TripParameters) {
    let needs = water::water_needs(params.days(), params.headcount);
    let entries = [
        (
            STILL_WATER_LABEL,
            needs.still_bottles,
            water::STILL_BOTTLE_PRICE,
        ),
        (
            MINERAL_WATER_LABEL,
            needs.mineral_bottles,
            water::MINERAL_BOTTLE_PRICE,
        ),
    ];
    // Inserting still first and mineral second at the front keeps the
    // conventional mineral-then-still ordering.
    for (label, bottles, price) in entries {
        if item_exists(categories, label) {
            continue;
        }
        let cost = budget::clamp(label, f64::from(bottles) * price, params.budget);
        categories.insert(
            0,
            PricedCategory {
                category: label.to_string(),
                items: vec![PricedItem {
                    name: format!("{} (500ml bottles)", label),
                    quantity: format!("{} bottles", bottles),
                    estimated_price: price,
                }],
                estimated_cost: cost,
            },
        );
    }
}
