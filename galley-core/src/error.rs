use thiserror::Error;

use crate::types::BudgetDiagnostic;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Budget must be a positive amount")]
    InvalidBudget,

    #[error("At least one meal type must be requested")]
    NoActiveMealTypes,

    #[error("Headcount must be at least one")]
    ZeroHeadcount,

    #[error("Headcount {declared} does not match adults plus children ({computed})")]
    HeadcountMismatch { declared: u32, computed: u32 },

    #[error("Trip duration must cover at least one day")]
    EmptyDuration,

    #[error("Missing or non-positive price for item: {item}")]
    MissingItemPrice { item: String },

    #[error(
        "Estimated cost {:.2} exceeds budget {:.2}",
        .0.total_cost,
        .0.budget
    )]
    BudgetExceeded(BudgetDiagnostic),
}
