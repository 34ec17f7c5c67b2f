use pyreq_version::{satisfies_python_requirement, Error, Requirement, RuntimeVersion};

#[test]
fn greater_than_minor() {
    assert!(satisfies_python_requirement(">", "2.4", &[2, 5]).unwrap());
    assert!(satisfies_python_requirement(">", "3.1", &[3, 5]).unwrap());
    assert!(!satisfies_python_requirement(">", "3.1", &[2, 8]).unwrap());
}

#[test]
fn equality_and_inclusive_bounds() {
    assert!(satisfies_python_requirement("==", "2.3", &[2, 3]).unwrap());
    assert!(satisfies_python_requirement("<=", "2.3", &[2, 3]).unwrap());
    assert!(!satisfies_python_requirement("<", "2.3", &[2, 3]).unwrap());
    assert!(satisfies_python_requirement(">=", "2.3", &[2, 3]).unwrap());
    assert!(!satisfies_python_requirement("!=", "2.3", &[2, 3]).unwrap());
}

#[test]
fn wildcard_ignores_minor() {
    assert!(satisfies_python_requirement("==", "2.*", &[2, 6]).unwrap());
    assert!(satisfies_python_requirement("==", "3.*", &[3, 6]).unwrap());
    assert!(!satisfies_python_requirement("==", "2.*", &[3, 0]).unwrap());
    assert!(satisfies_python_requirement("!=", "2.*", &[3, 0]).unwrap());
}

#[test]
fn patch_level_is_ignored_for_short_specs() {
    assert!(satisfies_python_requirement("==", "3.8", &[3, 8, 10]).unwrap());
    assert!(satisfies_python_requirement("<", "3.9", &[3, 8, 99]).unwrap());
    assert!(satisfies_python_requirement(">=", "3.8.5", &[3, 8, 10]).unwrap());
}

#[test]
fn invalid_operator_is_reported() {
    let err = satisfies_python_requirement("~=", "3.5", &[3, 5]).unwrap_err();
    assert_eq!(err, Error::InvalidOperator("~=".to_string()));
}

#[test]
fn malformed_spec_is_reported() {
    for spec in ["3.x", "three", "3..1", "*.1", ""] {
        let err = satisfies_python_requirement("==", spec, &[3, 1]).unwrap_err();
        assert!(
            matches!(err, Error::MalformedVersionSpec { .. }),
            "{spec:?} -> {err}"
        );
    }
}

#[test]
fn short_runtime_is_reported() {
    let err = satisfies_python_requirement("==", "3.8.1", &[3, 8]).unwrap_err();
    assert_eq!(
        err,
        Error::InsufficientRuntimePrecision {
            required: 3,
            actual: 2
        }
    );
    assert!(matches!(
        satisfies_python_requirement("==", "3", &[]),
        Err(Error::MalformedRuntimeVersion(_))
    ));
}

#[test]
fn typed_api_matches_string_api() {
    let runtime: RuntimeVersion = "3.10.2".parse().unwrap();
    for (text, op, spec) in [
        (">=3.8", ">=", "3.8"),
        ("<3.10", "<", "3.10"),
        ("==3.*", "==", "3.*"),
        ("!=3.10.*", "!=", "3.10.*"),
    ] {
        let requirement: Requirement = text.parse().unwrap();
        assert_eq!(
            requirement.is_satisfied_by(&runtime).unwrap(),
            satisfies_python_requirement(op, spec, runtime.components()).unwrap(),
            "{text}"
        );
    }
}
