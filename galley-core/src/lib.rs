//! Provisioning plan reconciliation for charter trips.
//!
//! Takes a set of trip parameters and a loosely structured draft plan from an
//! external generator, and produces a priced, budget-validated provisions
//! list plus a meal plan with guaranteed day coverage, or a structured
//! budget diagnostic when the estimated cost exceeds the trip budget.
//!
//! The engine is a pure, synchronous computation with no I/O and no state
//! shared across invocations.

pub mod budget;
pub mod cross_reference;
pub mod error;
pub mod meal_plan;
pub mod plan;
pub mod quantity;
pub mod reconcile;
pub mod types;
pub mod water;

pub use error::PlanError;
pub use plan::build_provision_plan;
pub use quantity::{parse_quantity, CanonicalUnit, ParsedQuantity};
pub use reconcile::{reconcile_provisions, ReconciledProvisions};
pub use types::{
    BudgetDiagnostic, CategoryCostSummary, DayMealPlan, DraftCategory, DraftDay, DraftItem,
    DraftPlan, MealSuggestion, MealTypePreference, PricedCategory, PricedItem, ProvisionPlan,
    TripDuration, TripParameters,
};
pub use water::{water_needs, WaterNeeds};
