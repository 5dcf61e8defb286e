//! The provisions reconciliation pipeline.
//!
//! Six ordered stages: strip the draft's water guesses, insert the computed
//! water categories, price every item, clamp category costs, branch on the
//! budget, and reorder the final list. Each stage is a pure function
//! consuming the previous stage's output, so the ordering contract is visible
//! in the signatures: clamping assumes pricing ran and reordering assumes
//! clamped costs.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::budget;
use crate::error::PlanError;
use crate::types::{
    BudgetDiagnostic, CategoryCostSummary, DraftCategory, DraftItem, PricedCategory, PricedItem,
    TripParameters,
};
use crate::water;

pub const MINERAL_WATER_LABEL: &str = "Mineral Water";
pub const STILL_WATER_LABEL: &str = "Still Water";

/// Remediation options presented alongside a budget diagnostic.
const REMEDIATION_SUGGESTIONS: [&str; 4] = [
    "Increase the provisioning budget to cover the estimated cost",
    "Remove or reduce items in the highest-cost categories first",
    "Swap premium and gourmet selections for standard alternatives",
    "Shorten the trip or reduce the guest count to lower consumption",
];

/// Item names the draft may use for water it invented on its own.
static DRAFT_WATER_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:still|mineral|sparkling)\s+water\b").expect("water pattern is valid")
});

/// Output of the provisions half of the engine.
#[derive(Debug, Clone)]
pub struct ReconciledProvisions {
    /// Final category list: mineral water, still water, everything else,
    /// then a single merged snacks category.
    pub categories: Vec<PricedCategory>,
    pub total_cost: f64,
    pub category_totals: BTreeMap<String, f64>,
}

/// Run the full reconciliation pipeline over a draft provisions list.
pub fn reconcile_provisions(
    draft: Vec<DraftCategory>,
    params: &TripParameters,
) -> Result<ReconciledProvisions, PlanError> {
    let stripped = strip_draft_water(draft);
    let with_water = insert_water_categories(stripped, params);
    let priced = price_categories(with_water)?;
    let clamped = clamp_categories(priced, params.budget);
    let total_cost = clamped.iter().map(|c| c.estimated_cost).sum::<f64>();
    if total_cost > params.budget {
        return Err(PlanError::BudgetExceeded(budget_diagnostic(
            clamped,
            total_cost,
            params.budget,
        )));
    }
    let categories = reorder_categories(clamped);
    let category_totals = categories
        .iter()
        .map(|c| (c.category.clone(), c.estimated_cost))
        .collect();
    Ok(ReconciledProvisions {
        categories,
        total_cost,
        category_totals,
    })
}

/// Stage 1: the draft's own water guesses are never trusted.
///
/// Drops every category whose label mentions water and removes water-named
/// items from the categories that remain.
fn strip_draft_water(draft: Vec<DraftCategory>) -> Vec<DraftCategory> {
    let before = draft.len();
    let stripped: Vec<DraftCategory> = draft
        .into_iter()
        .filter(|c| !c.category.to_lowercase().contains("water"))
        .map(|mut c| {
            c.items.retain(|item| !DRAFT_WATER_ITEM.is_match(&item.name));
            c
        })
        .collect();
    if stripped.len() < before {
        debug!(
            dropped = before - stripped.len(),
            "dropped draft water categories"
        );
    }
    stripped
}

/// Stage 2: prepend the computed water categories, mineral first by
/// convention. Their items flow through the same pricing stage as everything
/// else.
fn insert_water_categories(
    mut categories: Vec<DraftCategory>,
    params: &TripParameters,
) -> Vec<DraftCategory> {
    let needs = water::water_needs(params.days(), params.headcount);
    let water_category = |label: &str, bottles: u32, price: f64| DraftCategory {
        category: label.to_string(),
        items: vec![DraftItem {
            name: format!("{} (500ml bottles)", label),
            quantity: format!("{} bottles", bottles),
            estimated_price: Some(price),
        }],
    };
    let mut out = vec![
        water_category(
            MINERAL_WATER_LABEL,
            needs.mineral_bottles,
            water::MINERAL_BOTTLE_PRICE,
        ),
        water_category(
            STILL_WATER_LABEL,
            needs.still_bottles,
            water::STILL_BOTTLE_PRICE,
        ),
    ];
    out.append(&mut categories);
    out
}

/// Stage 3: price every item and accumulate per-category totals.
///
/// A missing or non-positive price is the one place reconciliation fails
/// loudly: silently zero-pricing an item would corrupt the budget total
/// invisibly.
fn price_categories(categories: Vec<DraftCategory>) -> Result<Vec<PricedCategory>, PlanError> {
    categories.into_iter().map(price_category).collect()
}

fn price_category(category: DraftCategory) -> Result<PricedCategory, PlanError> {
    let mut estimated_cost = 0.0;
    let mut items = Vec::with_capacity(category.items.len());
    for item in category.items {
        let price = match item.estimated_price {
            Some(price) if price > 0.0 => price,
            _ => return Err(PlanError::MissingItemPrice { item: item.name }),
        };
        let priced = PricedItem {
            name: item.name,
            quantity: item.quantity,
            estimated_price: price,
        };
        estimated_cost += priced.line_total();
        items.push(priced);
    }
    Ok(PricedCategory {
        category: category.category,
        items,
        estimated_cost,
    })
}

/// Stage 4: clamp each category's cost to its budget ceiling.
fn clamp_categories(categories: Vec<PricedCategory>, total_budget: f64) -> Vec<PricedCategory> {
    categories
        .into_iter()
        .map(|mut c| {
            c.estimated_cost = budget::clamp(&c.category, c.estimated_cost, total_budget);
            c
        })
        .collect()
}

/// Stage 5 support: the structured report for a plan that exceeds its budget.
///
/// Categories are ranked descending by clamped cost and items within each
/// category descending by price, so the caller can present the biggest
/// levers first.
fn budget_diagnostic(
    categories: Vec<PricedCategory>,
    total_cost: f64,
    budget: f64,
) -> BudgetDiagnostic {
    let mut summaries: Vec<CategoryCostSummary> = categories
        .into_iter()
        .map(|c| {
            let mut items = c.items;
            items.sort_by(|a, b| b.estimated_price.total_cmp(&a.estimated_price));
            CategoryCostSummary {
                category: c.category,
                cost: c.estimated_cost,
                items,
            }
        })
        .collect();
    summaries.sort_by(|a, b| b.cost.total_cmp(&a.cost));
    let overage = total_cost - budget;
    BudgetDiagnostic {
        total_cost,
        budget,
        overage,
        overage_percent: overage / budget * 100.0,
        categories: summaries,
        suggestions: REMEDIATION_SUGGESTIONS
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    }
}

/// Stage 6: final ordering. Mineral water, still water, the remaining
/// non-water/non-snack categories in draft order, then one merged snacks
/// category. A category literally named "Beverages" gets one more sweep for
/// water items that slipped through as generic drinks.
fn reorder_categories(categories: Vec<PricedCategory>) -> Vec<PricedCategory> {
    let mut water = Vec::new();
    let mut snacks = Vec::new();
    let mut rest = Vec::new();
    for mut category in categories {
        let label = category.category.to_lowercase();
        if label.contains("water") {
            water.push(category);
        } else if label == "snacks" || label == "snack options" {
            snacks.push(category);
        } else {
            if category.category.eq_ignore_ascii_case("beverages") {
                category
                    .items
                    .retain(|item| !DRAFT_WATER_ITEM.is_match(&item.name));
            }
            rest.push(category);
        }
    }
    water.sort_by_key(|c| {
        if c.category.eq_ignore_ascii_case(MINERAL_WATER_LABEL) {
            0
        } else {
            1
        }
    });

    let mut out = water;
    out.extend(rest);
    if !snacks.is_empty() {
        out.push(merge_snacks(snacks));
    }
    out
}

/// Merge every snack category into a single "Snacks" entry. Items are
/// concatenated, not deduplicated; costs were clamped per source category and
/// are summed as-is.
fn merge_snacks(snacks: Vec<PricedCategory>) -> PricedCategory {
    if snacks.len() > 1 {
        debug!(merged = snacks.len(), "consolidating snack categories");
    }
    let mut items = Vec::new();
    let mut estimated_cost = 0.0;
    for category in snacks {
        estimated_cost += category.estimated_cost;
        items.extend(category.items);
    }
    PricedCategory {
        category: "Snacks".to_string(),
        items,
        estimated_cost,
    }
}
