//! Special offer brackets
//!
//! An offer grants a fixed discount once the running total strictly
//! exceeds its threshold. Offers never stack: only the first matching
//! bracket in catalog order applies.

use serde::{Deserialize, Serialize};

/// A threshold-based fixed discount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialOffer {
    /// Total must be strictly greater than this value
    pub threshold: i64,

    /// Amount subtracted from the total
    pub discount: i64,
}

impl SpecialOffer {
    pub fn new(threshold: i64, discount: i64) -> Self {
        Self {
            threshold,
            discount,
        }
    }
}
