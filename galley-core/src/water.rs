//! Deterministic drinking-water provisioning.
//!
//! Water is never taken from the draft plan: quantities are computed from
//! trip length and headcount, and prices are fixed per bottle rather than
//! looked up through the keyword table.

/// Daily drinking water per person, in milliliters.
pub const ML_PER_PERSON_PER_DAY: f64 = 3000.0;

/// Bottle size used for provisioning, in milliliters.
pub const BOTTLE_ML: f64 = 500.0;

/// Share of the total water volume provisioned as still water; the rest is
/// mineral. The same split drives the water budget ceilings in the budget
/// module.
pub const STILL_SHARE: f64 = 0.6;
pub const MINERAL_SHARE: f64 = 1.0 - STILL_SHARE;

/// Fixed per-bottle prices.
pub const STILL_BOTTLE_PRICE: f64 = 0.8;
pub const MINERAL_BOTTLE_PRICE: f64 = 1.2;

/// Bottle counts for one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterNeeds {
    pub still_bottles: u32,
    pub mineral_bottles: u32,
}

/// Compute bottle counts for a trip.
///
/// Each variety is rounded up to a whole bottle independently;
/// under-provisioning water is never acceptable.
pub fn water_needs(days: u32, headcount: u32) -> WaterNeeds {
    let total_ml = ML_PER_PERSON_PER_DAY * f64::from(headcount) * f64::from(days);
    let bottles = |share: f64| (total_ml * share / BOTTLE_ML).ceil() as u32;
    WaterNeeds {
        still_bottles: bottles(STILL_SHARE),
        mineral_bottles: bottles(MINERAL_SHARE),
    }
}
