//! Selection Validation Tests
//!
//! Validation reports the first unknown name only: the plan first, then
//! features in input order. Messages must name the offending entry.

use gym_membership_core_rs::{validate_selection, Catalog, SelectionError};

#[test]
fn test_valid_plan_and_feature() {
    let catalog = Catalog::default();
    assert_eq!(
        validate_selection(&catalog, "Basic", &["Personal Training"]),
        Ok(())
    );
}

#[test]
fn test_every_catalog_combination_is_valid() {
    let catalog = Catalog::default();
    let all_features: Vec<&str> = catalog.features().iter().map(|f| f.name()).collect();
    for plan in catalog.plans() {
        assert_eq!(validate_selection(&catalog, plan.name(), &all_features), Ok(()));
        for feature in &all_features {
            assert_eq!(validate_selection(&catalog, plan.name(), &[*feature]), Ok(()));
        }
    }
}

#[test]
fn test_invalid_plan_message_names_plan() {
    let catalog = Catalog::default();
    let none: [&str; 0] = [];
    let err = validate_selection(&catalog, "NonExistentPlan", &none).unwrap_err();
    assert_eq!(err, SelectionError::InvalidPlan("NonExistentPlan".to_string()));
    assert!(err.to_string().contains("Plan 'NonExistentPlan' does not exist"));
}

#[test]
fn test_invalid_feature_message_names_feature() {
    let catalog = Catalog::default();
    let err = validate_selection(&catalog, "Basic", &["Space Travel"]).unwrap_err();
    assert!(err
        .to_string()
        .contains("Feature 'Space Travel' is not available"));
}

#[test]
fn test_only_first_invalid_feature_reported() {
    let catalog = Catalog::default();
    let err = validate_selection(
        &catalog,
        "Premium",
        &["Diet Plan", "Yoga", "Space Travel"],
    )
    .unwrap_err();
    assert_eq!(err, SelectionError::InvalidFeature("Yoga".to_string()));
    assert!(!err.to_string().contains("Space Travel"));
}

#[test]
fn test_names_are_case_sensitive() {
    let catalog = Catalog::default();
    let none: [&str; 0] = [];
    assert!(validate_selection(&catalog, "basic", &none).is_err());
    assert!(validate_selection(&catalog, "Basic", &["diet plan"]).is_err());
}

#[test]
fn test_owned_strings_accepted() {
    let catalog = Catalog::default();
    let features = vec!["Diet Plan".to_string(), "Group Classes".to_string()];
    assert_eq!(validate_selection(&catalog, "Family", &features), Ok(()));
}
