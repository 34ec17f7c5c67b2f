#![cfg(feature = "serde")]

use pyreq_version::{Operator, Requirement, RequirementSet, RuntimeVersion};
use serde_json::json;

#[test]
fn requirement_serializes_as_string() {
    let requirement: Requirement = ">= 3.8".parse().unwrap();
    assert_eq!(serde_json::to_value(&requirement).unwrap(), json!(">=3.8"));
}

#[test]
fn operator_uses_symbols() {
    assert_eq!(
        serde_json::to_value(Operator::LessThanOrEqual).unwrap(),
        json!("<=")
    );
    let op: Operator = serde_json::from_value(json!("!=")).unwrap();
    assert_eq!(op, Operator::NotEqual);
}

#[test]
fn invalid_strings_fail_to_deserialize() {
    assert!(serde_json::from_value::<Requirement>(json!("~=3.8")).is_err());
    assert!(serde_json::from_value::<RuntimeVersion>(json!("cpython")).is_err());
}

#[test]
fn requirement_set_from_config_value() {
    let set: RequirementSet = serde_json::from_value(json!(">=3.7, <4")).unwrap();
    assert!(set
        .is_satisfied_by(&RuntimeVersion::from((3, 11)))
        .unwrap());
}
