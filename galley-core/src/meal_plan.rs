//! Meal-plan day normalization.
//!
//! The external generator is expected, but not guaranteed, to return one
//! entry per trip day. This module repairs short drafts deterministically and
//! guarantees exactly one entry per day, labeled "Day 1".."Day N".

use tracing::warn;

use crate::types::{DayMealPlan, DraftDay, MealSuggestion};

/// Normalize a draft meal plan to exactly `total_days` entries.
///
/// Suggestions whose meal type is not in the active set are dropped before
/// repair. The repair policy is intentionally asymmetric so that richer
/// drafts produce a more varied fill:
/// - a draft with one day repeats that day throughout;
/// - a draft with two days uses day one once, then day two for the rest;
/// - a longer-but-short draft cycles through its entries in order;
/// - a draft at or beyond `total_days` is truncated, never expanded.
pub fn normalize_days(
    draft_days: Vec<DraftDay>,
    total_days: u32,
    active_types: &[&str],
) -> Vec<DayMealPlan> {
    let filtered: Vec<Vec<MealSuggestion>> = draft_days
        .into_iter()
        .map(|day| {
            day.meals
                .into_iter()
                .filter(|meal| {
                    active_types
                        .iter()
                        .any(|t| t.eq_ignore_ascii_case(&meal.meal_type))
                })
                .collect()
        })
        .collect();

    let total = total_days as usize;
    if filtered.len() < total {
        warn!(
            draft_days = filtered.len(),
            total_days, "draft meal plan under-delivered, repairing"
        );
    }

    (0..total)
        .map(|i| {
            let meals = match filtered.len() {
                0 => Vec::new(),
                1 => filtered[0].clone(),
                2 => {
                    if i == 0 {
                        filtered[0].clone()
                    } else {
                        filtered[1].clone()
                    }
                }
                n if n >= total => filtered[i].clone(),
                n => filtered[i % n].clone(),
            };
            DayMealPlan {
                day: format!("Day {}", i + 1),
                meals,
            }
        })
        .collect()
}
