//! Pricing engine
//!
//! Two pure entry points over a [`Catalog`](crate::Catalog):
//!
//! - [`validate_selection`]: checks plan and feature names
//! - [`calculate_total_cost`]: runs the pricing pipeline
//!
//! See `calculator.rs` for the pipeline order.

pub mod calculator;
pub mod validation;

// Re-exports
pub use calculator::{calculate_total_cost, price_breakdown, price_selection, PriceBreakdown};
pub use validation::{validate_selection, SelectionError};
