//! Python runtime version requirement checking
//!
//! Decides whether a Python runtime version (e.g. `3.11.4`) satisfies a
//! requirement such as `>= 3.5` or `== 2.*`.
//!
//! - Runtime precision beyond the spec is ignored: `3.8.10` compares as `3.8` against `3.8`.
//! - A trailing `*` confines `==` / `!=` to the segments before it.
//! - Ordering operators on a wildcard spec compare the fixed prefix only.
//!
//! # Examples
//!
//! ```rust
//! use pyreq_version::{satisfies_python_requirement, Operator, Requirement, RuntimeVersion};
//!
//! assert!(satisfies_python_requirement(">", "2.4", &[2, 5]).unwrap());
//! assert!(satisfies_python_requirement("==", "3.*", &[3, 6]).unwrap());
//!
//! let requirement: Requirement = ">=3.8".parse().unwrap();
//! assert_eq!(requirement.operator, Operator::GreaterThanOrEqual);
//! assert!(requirement.is_satisfied_by(&RuntimeVersion::from((3, 12, 1))).unwrap());
//! ```
#![forbid(unsafe_code)]

mod error;
mod operator;
mod requirement;
mod runtime;
mod spec;

pub use error::{Error, Result};
pub use operator::Operator;
pub use requirement::{Requirement, RequirementSet};
pub use runtime::RuntimeVersion;
pub use spec::VersionSpec;

/// Check `runtime_version <operator> version_spec`.
///
/// `operator` must be one of `==`, `!=`, `<`, `<=`, `>`, `>=` and
/// `version_spec` a dotted list of integers with an optional trailing `*`.
/// `runtime_version` needs at least as many components as the spec's
/// numeric segments.
pub fn satisfies_python_requirement(
    operator: &str,
    version_spec: &str,
    runtime_version: &[u64],
) -> Result<bool> {
    let requirement = Requirement::parse_parts(operator, version_spec)?;
    let runtime = RuntimeVersion::try_from(runtime_version)?;
    requirement.is_satisfied_by(&runtime)
}
