//! Domain models for the membership catalog

pub mod feature;
pub mod offer;
pub mod plan;
pub mod selection;

// Re-exports
pub use feature::Feature;
pub use offer::SpecialOffer;
pub use plan::Plan;
pub use selection::Selection;
