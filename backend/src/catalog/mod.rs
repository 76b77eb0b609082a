//! Membership Catalog
//!
//! The catalog is the single source of pricing data: plans, features,
//! rates and special-offer brackets. It is built once at startup from a
//! [`CatalogConfig`] (built-in defaults or a JSON document), validated, and
//! then only ever read.
//!
//! # Critical Invariants
//!
//! 1. Plan and feature names are unique, case-sensitive keys
//! 2. All money values are non-negative i64
//! 3. Special offers are sorted by strictly descending threshold, so the
//!    first matching offer is also the largest applicable bracket

pub mod rates;

use crate::models::{Feature, Plan, SpecialOffer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub use rates::{PricingRates, BPS_SCALE, MAX_SURCHARGE_BPS};

/// Errors raised while building a catalog
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog must define at least one plan")]
    NoPlans,

    #[error("Duplicate plan name: {0}")]
    DuplicatePlan(String),

    #[error("Duplicate feature name: {0}")]
    DuplicateFeature(String),

    #[error("Amount for '{name}' must be non-negative, got {amount}")]
    NegativeAmount { name: String, amount: i64 },

    #[error("Group discount threshold must be at least 1 member")]
    InvalidGroupThreshold,

    #[error("Rate '{name}' out of range: {bps} bps")]
    InvalidRate { name: &'static str, bps: i64 },

    #[error("Special offers must be sorted by strictly descending threshold ({previous} then {next})")]
    OffersNotDescending { previous: i64, next: i64 },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

/// Raw catalog definition, as authored
///
/// Field order in `plans`, `features` and `special_offers` is preserved
/// for display and, for offers, for precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub plans: Vec<Plan>,

    #[serde(default)]
    pub features: Vec<Feature>,

    #[serde(default)]
    pub rates: PricingRates,

    #[serde(default)]
    pub special_offers: Vec<SpecialOffer>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            plans: vec![
                Plan::new("Basic", 50, "Access to gym equipment"),
                Plan::new("Premium", 100, "Gym + Sauna + Pool"),
                Plan::new("Family", 150, "Access for 4 family members").covering_group(),
            ],
            features: vec![
                Feature::new("Personal Training", 30),
                Feature::new("Group Classes", 20),
                Feature::new("Exclusive Access", 50).premium(),
                Feature::new("Diet Plan", 10),
            ],
            rates: PricingRates::default(),
            special_offers: vec![SpecialOffer::new(400, 50), SpecialOffer::new(200, 20)],
        }
    }
}

/// Validated, immutable catalog
///
/// # Example
/// ```
/// use gym_membership_core_rs::Catalog;
///
/// let catalog = Catalog::default();
/// assert_eq!(catalog.plan("Basic").map(|p| p.base_cost()), Some(50));
/// assert!(catalog.plan("basic").is_none()); // keys are case-sensitive
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    plans: Vec<Plan>,
    features: Vec<Feature>,
    rates: PricingRates,
    special_offers: Vec<SpecialOffer>,
}

impl Default for Catalog {
    fn default() -> Self {
        let config = CatalogConfig::default();
        debug_assert_eq!(Self::validate_config(&config), Ok(()));
        Self {
            plans: config.plans,
            features: config.features,
            rates: config.rates,
            special_offers: config.special_offers,
        }
    }
}

impl Catalog {
    /// Build a catalog from a definition, rejecting inconsistent data
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        Self::validate_config(&config)?;

        tracing::info!(
            plans = config.plans.len(),
            features = config.features.len(),
            offers = config.special_offers.len(),
            "catalog loaded"
        );

        Ok(Self {
            plans: config.plans,
            features: config.features,
            rates: config.rates,
            special_offers: config.special_offers,
        })
    }

    /// Parse and validate a catalog JSON document
    ///
    /// # Example
    /// ```
    /// use gym_membership_core_rs::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"{
    ///     "plans": [{"name": "Solo", "base_cost": 40}],
    ///     "features": [{"name": "Sauna", "cost": 15, "is_premium": true}]
    /// }"#).unwrap();
    /// assert!(catalog.feature("Sauna").unwrap().is_premium());
    /// assert!(catalog.special_offers().is_empty());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(config)
    }

    fn validate_config(config: &CatalogConfig) -> Result<(), CatalogError> {
        if config.plans.is_empty() {
            return Err(CatalogError::NoPlans);
        }

        let mut plan_names = HashSet::new();
        for plan in &config.plans {
            if !plan_names.insert(plan.name()) {
                return Err(CatalogError::DuplicatePlan(plan.name().to_string()));
            }
            ensure_non_negative(plan.name(), plan.base_cost())?;
        }

        let mut feature_names = HashSet::new();
        for feature in &config.features {
            if !feature_names.insert(feature.name()) {
                return Err(CatalogError::DuplicateFeature(feature.name().to_string()));
            }
            ensure_non_negative(feature.name(), feature.cost())?;
        }

        let rates = &config.rates;
        if rates.group_discount_threshold == 0 {
            return Err(CatalogError::InvalidGroupThreshold);
        }
        if !(0..=BPS_SCALE).contains(&rates.group_discount_bps) {
            return Err(CatalogError::InvalidRate {
                name: "group_discount_bps",
                bps: rates.group_discount_bps,
            });
        }
        if !(0..=MAX_SURCHARGE_BPS).contains(&rates.premium_surcharge_bps) {
            return Err(CatalogError::InvalidRate {
                name: "premium_surcharge_bps",
                bps: rates.premium_surcharge_bps,
            });
        }

        for offer in &config.special_offers {
            ensure_non_negative(&format!("offer > {}", offer.threshold), offer.discount)?;
        }
        for pair in config.special_offers.windows(2) {
            if pair[1].threshold >= pair[0].threshold {
                return Err(CatalogError::OffersNotDescending {
                    previous: pair[0].threshold,
                    next: pair[1].threshold,
                });
            }
        }

        Ok(())
    }

    /// Look up a plan by exact name
    pub fn plan(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.name() == name)
    }

    /// Look up a feature by exact name
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.name() == name)
    }

    /// Plans in authored order
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Features in authored order
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn rates(&self) -> &PricingRates {
        &self.rates
    }

    /// Offers in precedence order (descending threshold)
    pub fn special_offers(&self) -> &[SpecialOffer] {
        &self.special_offers
    }
}

fn ensure_non_negative(name: &str, amount: i64) -> Result<(), CatalogError> {
    if amount < 0 {
        return Err(CatalogError::NegativeAmount {
            name: name.to_string(),
            amount,
        });
    }
    Ok(())
}
