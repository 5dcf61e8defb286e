//! Core data types: trip parameters, external draft plans, and reconciled
//! output.
//!
//! Boundary types use camelCase field names on the wire: the draft producer
//! and the consuming API layer both speak JSON in that convention.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::quantity;

/// Unit of a trip duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Week,
    Month,
}

/// Trip duration as the caller expresses it ("2 weeks", "1 month").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDuration {
    pub count: u32,
    pub unit: DurationUnit,
}

impl TripDuration {
    pub fn weeks(count: u32) -> Self {
        Self {
            count,
            unit: DurationUnit::Week,
        }
    }

    pub fn months(count: u32) -> Self {
        Self {
            count,
            unit: DurationUnit::Month,
        }
    }

    /// Length of the trip in whole days. Months are billed as 30 days.
    pub fn days(self) -> u32 {
        match self.unit {
            DurationUnit::Week => self.count * 7,
            DurationUnit::Month => self.count * 30,
        }
    }
}

/// A group of children sharing an age range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAgeGroup {
    pub age_range: String,
    pub count: u32,
    #[serde(default)]
    pub dietary_notes: String,
}

/// A dietary preference and how many guests it applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPreference {
    pub preference: String,
    pub guests: u32,
}

/// A requested meal type; active when `per_day` is greater than zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealTypePreference {
    pub meal_type: String,
    pub per_day: u32,
}

/// Everything the caller tells us about the trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripParameters {
    pub duration: TripDuration,
    pub headcount: u32,
    pub adults: u32,
    #[serde(default)]
    pub children: Vec<ChildAgeGroup>,
    #[serde(default)]
    pub dietary_preferences: Vec<DietaryPreference>,
    pub meal_types: Vec<MealTypePreference>,
    pub budget: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TripParameters {
    /// Validate the parameters before any reconciliation work starts.
    ///
    /// These checks are fatal to the request and reported verbatim.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(PlanError::InvalidBudget);
        }
        if self.headcount == 0 {
            return Err(PlanError::ZeroHeadcount);
        }
        let computed = self.adults + self.children.iter().map(|c| c.count).sum::<u32>();
        if computed != self.headcount {
            return Err(PlanError::HeadcountMismatch {
                declared: self.headcount,
                computed,
            });
        }
        if self.duration.days() == 0 {
            return Err(PlanError::EmptyDuration);
        }
        if !self.meal_types.iter().any(|m| m.per_day > 0) {
            return Err(PlanError::NoActiveMealTypes);
        }
        Ok(())
    }

    pub fn days(&self) -> u32 {
        self.duration.days()
    }

    /// Labels of the meal types with a non-zero per-day count, in
    /// declaration order.
    pub fn active_meal_types(&self) -> Vec<&str> {
        self.meal_types
            .iter()
            .filter(|m| m.per_day > 0)
            .map(|m| m.meal_type.as_str())
            .collect()
    }
}

/// The draft plan as the external generator returns it.
///
/// The shape is assumed, not schema-validated: a category missing its items
/// array deserializes as empty, and a missing price stays `None` so that its
/// absence is our diagnostic rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPlan {
    #[serde(default)]
    pub provisions_list: Vec<DraftCategory>,
    #[serde(default)]
    pub meal_suggestions: Vec<DraftDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<DraftItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftItem {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub estimated_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftDay {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub meals: Vec<MealSuggestion>,
}

/// One suggested meal within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    #[serde(rename = "type")]
    pub meal_type: String,
    pub suggestion: String,
}

/// A priced provisions item after reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedItem {
    pub name: String,
    pub quantity: String,
    pub estimated_price: f64,
}

impl PricedItem {
    /// Price times the quantity expressed in its canonical unit.
    pub fn line_total(&self) -> f64 {
        self.estimated_price * quantity::parse_quantity(&self.quantity).amount
    }
}

/// A provisions category with its clamped estimated cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedCategory {
    pub category: String,
    pub items: Vec<PricedItem>,
    pub estimated_cost: f64,
}

/// One day of the normalized meal plan, labeled "Day 1".."Day N".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMealPlan {
    pub day: String,
    pub meals: Vec<MealSuggestion>,
}

/// The reconciled plan returned to the caller on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionPlan {
    pub provisions_list: Vec<PricedCategory>,
    pub meal_suggestions: Vec<DayMealPlan>,
    pub total_cost: f64,
    pub remaining_budget: f64,
    pub category_totals: BTreeMap<String, f64>,
}

/// Cost breakdown for one category inside a budget diagnostic,
/// items ranked descending by price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCostSummary {
    pub category: String,
    pub cost: f64,
    pub items: Vec<PricedItem>,
}

/// Structured budget-exceeded report.
///
/// Not a generic error message: the caller is expected to branch on this and
/// present the ranked breakdown and remediation options to the end user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDiagnostic {
    pub total_cost: f64,
    pub budget: f64,
    pub overage: f64,
    pub overage_percent: f64,
    /// Categories ranked descending by clamped cost.
    pub categories: Vec<CategoryCostSummary>,
    /// Fixed remediation suggestions, in presentation order.
    pub suggestions: Vec<String>,
}
