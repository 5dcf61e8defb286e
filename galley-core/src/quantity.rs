//! Quantity string parsing.
//!
//! Draft items carry free-form quantity strings ("500 g", "3 bottles",
//! "2 dozen eggs"). Parsing is best-effort: the first number-plus-unit pair
//! wins, and a string with no recognizable unit defaults to an amount of one
//! rather than failing; under-pricing a malformed entry is preferred to
//! rejecting the whole plan.

use std::sync::LazyLock;

use regex::Regex;

/// Canonical units quantities normalize to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalUnit {
    Kilogram,
    Liter,
    Piece,
    Bottle,
}

/// A parsed quantity: amount expressed in its canonical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedQuantity {
    pub amount: f64,
    pub unit: Option<CanonicalUnit>,
}

/// First number-plus-unit pair, case-insensitive. Longer unit tokens are
/// listed first; the trailing word boundary keeps "g" from matching inside
/// "grapes".
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d+(?:\.\d+)?)\s*(pieces|piece|pcs|bottles|bottle|packs|pack|jars|jar|bags|bag|loaves|loaf|units|unit|dozen|kg|ml|l|g)\b",
    )
    .expect("quantity pattern is valid")
});

/// Parse a free-form quantity string.
///
/// Conversions: grams and milliliters divide by 1000 into kilograms and
/// liters; a dozen is twelve pieces. Container words (packs, jars, bags,
/// loaves, units) all count as pieces.
pub fn parse_quantity(raw: &str) -> ParsedQuantity {
    let Some(caps) = QUANTITY_RE.captures(raw) else {
        return ParsedQuantity {
            amount: 1.0,
            unit: None,
        };
    };
    let number: f64 = caps[1].parse().unwrap_or(1.0);
    let (amount, unit) = match caps[2].to_lowercase().as_str() {
        "g" => (number / 1000.0, CanonicalUnit::Kilogram),
        "kg" => (number, CanonicalUnit::Kilogram),
        "ml" => (number / 1000.0, CanonicalUnit::Liter),
        "l" => (number, CanonicalUnit::Liter),
        "dozen" => (number * 12.0, CanonicalUnit::Piece),
        "bottle" | "bottles" => (number, CanonicalUnit::Bottle),
        _ => (number, CanonicalUnit::Piece),
    };
    ParsedQuantity {
        amount,
        unit: Some(unit),
    }
}
