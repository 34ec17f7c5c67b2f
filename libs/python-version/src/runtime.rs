//! The version of the Python runtime a requirement is checked against

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Version of an executing Python runtime, e.g. `3.11.4`.
///
/// Always holds at least one component. Pre-release and local tails are
/// dropped while parsing (`3.12.0rc1` becomes `3.12.0`), matching the integer
/// tuple exposed by `sys.version_info`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct RuntimeVersion {
    components: Vec<u64>,
}

impl RuntimeVersion {
    pub fn new(components: Vec<u64>) -> Result<Self> {
        if components.is_empty() {
            return Err(Error::MalformedRuntimeVersion(String::new()));
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    pub fn major(&self) -> u64 {
        self.components[0]
    }

    pub fn minor(&self) -> Option<u64> {
        self.components.get(1).copied()
    }

    /// The `major.minor` prefix, as used by the `python_version` marker.
    pub fn major_minor(&self) -> RuntimeVersion {
        RuntimeVersion {
            components: self.components.iter().take(2).copied().collect(),
        }
    }

    /// The first `len` components, failing when the runtime carries fewer.
    pub fn truncated(&self, len: usize) -> Result<&[u64]> {
        if self.components.len() < len {
            return Err(Error::InsufficientRuntimePrecision {
                required: len,
                actual: self.components.len(),
            });
        }
        Ok(&self.components[..len])
    }

    /// Parse the output of `python --version`, e.g. `Python 3.11.4`.
    pub fn from_interpreter_output(output: &str) -> Result<Self> {
        output
            .split_whitespace()
            .find(|token| token.starts_with(|c: char| c.is_ascii_digit()))
            .ok_or_else(|| Error::MalformedRuntimeVersion(output.trim().to_string()))?
            .parse()
    }
}

impl FromStr for RuntimeVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let malformed = || Error::MalformedRuntimeVersion(input.to_string());

        let mut components = Vec::new();
        for segment in input.split('.') {
            let digits_end = segment
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(segment.len());
            let (digits, tail) = segment.split_at(digits_end);

            if digits.is_empty() {
                // `3.11.dev0` keeps `3.11`; a leading non-number is an error
                if components.is_empty() {
                    return Err(malformed());
                }
                break;
            }

            components.push(digits.parse::<u64>().map_err(|_| malformed())?);
            if !tail.is_empty() {
                break;
            }
        }

        Self::new(components).map_err(|_| malformed())
    }
}

impl TryFrom<Vec<u64>> for RuntimeVersion {
    type Error = Error;

    fn try_from(components: Vec<u64>) -> Result<Self> {
        Self::new(components)
    }
}

impl TryFrom<&[u64]> for RuntimeVersion {
    type Error = Error;

    fn try_from(components: &[u64]) -> Result<Self> {
        Self::new(components.to_vec())
    }
}

impl TryFrom<String> for RuntimeVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<(u64, u64)> for RuntimeVersion {
    fn from((major, minor): (u64, u64)) -> Self {
        Self {
            components: vec![major, minor],
        }
    }
}

impl From<(u64, u64, u64)> for RuntimeVersion {
    fn from((major, minor, micro): (u64, u64, u64)) -> Self {
        Self {
            components: vec![major, minor, micro],
        }
    }
}

impl From<RuntimeVersion> for String {
    fn from(version: RuntimeVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.components)
    }
}

pub(crate) fn write_dotted(f: &mut fmt::Formatter<'_>, parts: &[u64]) -> fmt::Result {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        write!(f, "{}", part)?;
    }
    Ok(())
}
