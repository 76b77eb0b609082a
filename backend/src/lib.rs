//! Gym Membership Core - Pricing Engine
//!
//! Prices gym membership subscriptions from a plan, optional features and a
//! member count.
//!
//! # Architecture
//!
//! - **models**: Domain types (Plan, Feature, SpecialOffer, Selection)
//! - **catalog**: Validated, immutable pricing data and rates
//! - **pricing**: Selection validation and the cost calculator
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole currency units)
//! 2. The catalog is never mutated after construction and is passed
//!    explicitly to every pricing call
//! 3. Pricing is pure: identical inputs always give identical totals

pub mod catalog;
pub mod models;
pub mod pricing;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogConfig, CatalogError, PricingRates};
pub use models::{Feature, Plan, Selection, SpecialOffer};
pub use pricing::{
    calculate_total_cost, price_breakdown, price_selection, validate_selection, PriceBreakdown,
    SelectionError,
};
