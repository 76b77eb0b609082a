//! Pricing Rates
//!
//! Group discount and premium surcharge configuration.
//! Rates are expressed in basis points (1 bp = 0.01%) so that every
//! pricing step stays in integer arithmetic.

use serde::{Deserialize, Serialize};

/// Basis points in 100%
pub const BPS_SCALE: i64 = 10_000;

/// Largest accepted premium surcharge (10000%)
pub const MAX_SURCHARGE_BPS: i64 = BPS_SCALE * 100;

/// Pricing Rates Configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRates {
    /// Minimum member count that qualifies for the group discount
    pub group_discount_threshold: u32,

    /// Group discount in basis points (e.g., 1000 = 10% off)
    pub group_discount_bps: i64,

    /// Surcharge in basis points applied when any premium feature is selected
    /// (e.g., 1500 = 15% on top)
    pub premium_surcharge_bps: i64,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            group_discount_threshold: 2, // two or more members
            group_discount_bps: 1000,    // 10%
            premium_surcharge_bps: 1500, // 15%
        }
    }
}

impl PricingRates {
    /// Whether a group of `members` people qualifies for the group discount
    pub fn qualifies_for_group_discount(&self, members: u32) -> bool {
        members >= self.group_discount_threshold
    }

    /// Multiplier numerator (over [`BPS_SCALE`]) for the group discount step
    pub fn group_factor_bps(&self) -> i128 {
        i128::from(BPS_SCALE) - i128::from(self.group_discount_bps)
    }

    /// Multiplier numerator (over [`BPS_SCALE`]) for the premium surcharge step
    pub fn surcharge_factor_bps(&self) -> i128 {
        i128::from(BPS_SCALE) + i128::from(self.premium_surcharge_bps)
    }
}
