//! Static pricing and category tables for charter provisioning.
//!
//! Lookups are keyword-containment scans over tables sorted longest-keyword
//! first, so specific entries ("cold-pressed juice") win over shorter
//! overlapping ones ("juice"). The tables are read-only after initialization
//! and safe to share across concurrent reconciliations.

pub mod category;
pub mod tables;

pub use category::{water_category_for_label, Category};
pub use tables::{category_for, price_for, DEFAULT_ITEM_PRICE};
