//! The top-level plan builder.
//!
//! Fixed stage order: validate parameters, reconcile provisions (which may
//! short-circuit into a budget diagnostic), normalize meal-plan days, then
//! cross-reference meals against the provisions list.

use crate::cross_reference;
use crate::error::PlanError;
use crate::meal_plan;
use crate::reconcile;
use crate::types::{DraftPlan, ProvisionPlan, TripParameters};

/// Turn trip parameters and an external draft into a reconciled plan.
pub fn build_provision_plan(
    params: &TripParameters,
    draft: DraftPlan,
) -> Result<ProvisionPlan, PlanError> {
    params.validate()?;

    let reconciled = reconcile::reconcile_provisions(draft.provisions_list, params)?;
    let active = params.active_meal_types();
    let meal_suggestions = meal_plan::normalize_days(draft.meal_suggestions, params.days(), &active);
    let provisions_list =
        cross_reference::fill_gaps(&meal_suggestions, reconciled.categories, params);

    Ok(ProvisionPlan {
        provisions_list,
        meal_suggestions,
        total_cost: reconciled.total_cost,
        remaining_budget: params.budget - reconciled.total_cost,
        category_totals: reconciled.category_totals,
    })
}
