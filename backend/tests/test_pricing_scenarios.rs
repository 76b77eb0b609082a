//! Pricing Pipeline Scenarios
//!
//! End-to-end pricing checks against the built-in catalog:
//! Basic=$50, Premium=$100, Family=$150 (covers group);
//! Personal Training=$30, Group Classes=$20, Exclusive Access=$50 (premium),
//! Diet Plan=$10; group discount 10% from 2 members; premium surcharge 15%;
//! offers >400 → -50, >200 → -20.

use gym_membership_core_rs::{
    calculate_total_cost, price_breakdown, Catalog, SelectionError, SpecialOffer,
};

const NO_FEATURES: [&str; 0] = [];

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_basic_with_personal_training_single_member() {
    let catalog = Catalog::default();
    let cost = calculate_total_cost(&catalog, "Basic", &["Personal Training"], 1);
    assert_eq!(cost, Ok(80));
}

#[test]
fn test_group_discount_two_members() {
    // 50 × 2 = 100, 10% off = 90
    let catalog = Catalog::default();
    assert_eq!(calculate_total_cost(&catalog, "Basic", &NO_FEATURES, 2), Ok(90));
}

#[test]
fn test_premium_surcharge_single_member() {
    // 50 + 50 = 100, +15% = 115
    let catalog = Catalog::default();
    assert_eq!(
        calculate_total_cost(&catalog, "Basic", &["Exclusive Access"], 1),
        Ok(115)
    );
}

#[test]
fn test_family_plan_special_offer() {
    // 150 + 50 = 200 (not scaled), +15% = 230, > 200 → -20 = 210
    let catalog = Catalog::default();
    assert_eq!(
        calculate_total_cost(&catalog, "Family", &["Exclusive Access"], 1),
        Ok(210)
    );
}

// ============================================================================
// Group coverage
// ============================================================================

#[test]
fn test_family_plan_not_scaled_by_member_count() {
    let catalog = Catalog::default();
    for members in 1..=8 {
        let breakdown = price_breakdown(&catalog, "Family", &["Diet Plan"], members).unwrap();
        assert_eq!(breakdown.subtotal, 160);
        assert_eq!(breakdown.scaled_subtotal, 160);
    }
}

#[test]
fn test_family_plan_still_gets_group_discount() {
    // 150 → 10% off = 135
    let catalog = Catalog::default();
    let breakdown = price_breakdown(&catalog, "Family", &NO_FEATURES, 4).unwrap();
    assert!(breakdown.group_discount_applied);
    assert_eq!(breakdown.total, 135);
}

#[test]
fn test_per_member_plan_scales() {
    let catalog = Catalog::default();
    let breakdown = price_breakdown(&catalog, "Premium", &["Group Classes"], 3).unwrap();
    assert_eq!(breakdown.subtotal, 120);
    assert_eq!(breakdown.scaled_subtotal, 360);
    // 360 × 0.9 = 324 > 200 → 304
    assert_eq!(breakdown.total, 304);
}

// ============================================================================
// Adjustment ordering
// ============================================================================

#[test]
fn test_all_adjustments_in_order() {
    // (100 + 50 + 30) × 3 = 540, ×0.9 = 486, ×1.15 = 558.9, > 400 → 508.9 → 508
    let catalog = Catalog::default();
    let breakdown = price_breakdown(
        &catalog,
        "Premium",
        &["Exclusive Access", "Personal Training"],
        3,
    )
    .unwrap();
    assert!(breakdown.group_discount_applied);
    assert!(breakdown.premium_surcharge_applied);
    assert_eq!(breakdown.special_offer, Some(SpecialOffer::new(400, 50)));
    assert_eq!(breakdown.total, 508);
}

#[test]
fn test_offer_checked_after_surcharge() {
    // 180 on its own is below 200; the surcharge pushes it to 207 → -20
    let catalog = Catalog::default();
    let breakdown =
        price_breakdown(&catalog, "Premium", &["Exclusive Access", "Personal Training"], 1)
            .unwrap();
    assert_eq!(breakdown.subtotal, 180);
    assert_eq!(breakdown.special_offer, Some(SpecialOffer::new(200, 20)));
    assert_eq!(breakdown.total, 187);
}

#[test]
fn test_surcharge_applies_once_for_multiple_premium_features() {
    // (50 + 50 + 50) = 150, +15% = 172.5 → 172
    let catalog = Catalog::default();
    assert_eq!(
        calculate_total_cost(&catalog, "Basic", &["Exclusive Access", "Exclusive Access"], 1),
        Ok(172)
    );
}

#[test]
fn test_repeated_features_charged_per_occurrence() {
    let catalog = Catalog::default();
    let once = calculate_total_cost(&catalog, "Basic", &["Diet Plan"], 1).unwrap();
    let twice = calculate_total_cost(&catalog, "Basic", &["Diet Plan", "Diet Plan"], 1).unwrap();
    assert_eq!(once, 60);
    assert_eq!(twice, 70);
}

#[test]
fn test_feature_order_irrelevant() {
    let catalog = Catalog::default();
    let a = calculate_total_cost(&catalog, "Premium", &["Diet Plan", "Exclusive Access"], 2);
    let b = calculate_total_cost(&catalog, "Premium", &["Exclusive Access", "Diet Plan"], 2);
    assert_eq!(a, b);
}

// ============================================================================
// Preconditions
// ============================================================================

#[test]
fn test_zero_members_is_an_error() {
    let catalog = Catalog::default();
    assert_eq!(
        calculate_total_cost(&catalog, "Family", &NO_FEATURES, 0),
        Err(SelectionError::InvalidMemberCount(0))
    );
}

#[test]
fn test_deterministic() {
    let catalog = Catalog::default();
    let first = price_breakdown(&catalog, "Premium", &["Exclusive Access"], 7);
    for _ in 0..10 {
        assert_eq!(price_breakdown(&catalog, "Premium", &["Exclusive Access"], 7), first);
    }
}
