//! Error types for version requirement parsing and evaluation

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Version requirement errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid operator: '{0}'")]
    InvalidOperator(String),

    #[error("Malformed version spec '{spec}': {reason}")]
    MalformedVersionSpec { spec: String, reason: &'static str },

    #[error("Malformed runtime version: '{0}'")]
    MalformedRuntimeVersion(String),

    #[error("Runtime version has {actual} component(s), requirement needs {required}")]
    InsufficientRuntimePrecision { required: usize, actual: usize },

    #[error("Empty requirement")]
    EmptyRequirement,
}

impl Error {
    pub(crate) fn malformed(spec: &str, reason: &'static str) -> Self {
        Error::MalformedVersionSpec {
            spec: spec.to_string(),
            reason,
        }
    }
}
