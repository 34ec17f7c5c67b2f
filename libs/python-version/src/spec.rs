//! Version specifications: the right-hand side of a requirement

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::operator::Operator;
use crate::runtime::{write_dotted, RuntimeVersion};

/// A parsed version specification.
///
/// - `Exact("2.3")` compares the runtime, truncated to two components, as a tuple.
/// - `WildcardPrefix("2.*")` only constrains the components before the `*`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum VersionSpec {
    Exact(Vec<u64>),
    WildcardPrefix(Vec<u64>),
}

impl VersionSpec {
    /// The numeric segments, without the wildcard.
    pub fn segments(&self) -> &[u64] {
        match self {
            VersionSpec::Exact(segments) | VersionSpec::WildcardPrefix(segments) => segments,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, VersionSpec::WildcardPrefix(_))
    }

    /// Evaluate `runtime <op> self`.
    ///
    /// Extra runtime precision beyond the spec's segments is ignored, so a
    /// `3.8.10` runtime compares as `3.8` against `3.8`.
    pub fn compare(&self, runtime: &RuntimeVersion, op: Operator) -> Result<bool> {
        let segments = self.segments();
        let prefix = runtime.truncated(segments.len())?;

        let satisfied = match self {
            VersionSpec::Exact(_) => op.matches(prefix.cmp(segments)),
            VersionSpec::WildcardPrefix(_) => match op {
                Operator::Equal => prefix == segments,
                Operator::NotEqual => prefix != segments,
                // Ordering operators fall back to comparing the fixed prefix
                _ => op.matches(prefix.cmp(segments)),
            },
        };
        Ok(satisfied)
    }
}

impl FromStr for VersionSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let spec = s.trim();
        if spec.is_empty() {
            return Err(Error::malformed(spec, "empty version"));
        }

        let parts: Vec<&str> = spec.split('.').collect();
        let last = parts.len() - 1;
        let mut segments = Vec::with_capacity(parts.len());
        let mut wildcard = false;

        for (i, part) in parts.iter().enumerate() {
            match *part {
                "*" if i == last => wildcard = true,
                "*" => return Err(Error::malformed(spec, "wildcard must be the final segment")),
                "" => return Err(Error::malformed(spec, "empty segment")),
                p if !p.bytes().all(|b| b.is_ascii_digit()) => {
                    return Err(Error::malformed(spec, "non-numeric segment"))
                }
                p => segments.push(
                    p.parse::<u64>()
                        .map_err(|_| Error::malformed(spec, "segment out of range"))?,
                ),
            }
        }

        if wildcard {
            if segments.is_empty() {
                return Err(Error::malformed(spec, "wildcard needs a numeric prefix"));
            }
            Ok(VersionSpec::WildcardPrefix(segments))
        } else {
            Ok(VersionSpec::Exact(segments))
        }
    }
}

impl TryFrom<String> for VersionSpec {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<VersionSpec> for String {
    fn from(spec: VersionSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, self.segments())?;
        if self.is_wildcard() {
            f.write_str(".*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rt(parts: &[u64]) -> RuntimeVersion {
        RuntimeVersion::try_from(parts).unwrap()
    }

    #[test]
    fn test_parse_exact_and_wildcard() {
        assert_eq!("2.3".parse::<VersionSpec>(), Ok(VersionSpec::Exact(vec![2, 3])));
        assert_eq!("3".parse::<VersionSpec>(), Ok(VersionSpec::Exact(vec![3])));
        assert_eq!("2.*".parse::<VersionSpec>(), Ok(VersionSpec::WildcardPrefix(vec![2])));
        assert_eq!(
            " 3.6.* ".parse::<VersionSpec>(),
            Ok(VersionSpec::WildcardPrefix(vec![3, 6]))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "2.x", "2..3", "*", "*.3", "2.*.1", "3.", "a", "-1", "2.+3"] {
            let err = bad.parse::<VersionSpec>().unwrap_err();
            assert!(
                matches!(err, Error::MalformedVersionSpec { .. }),
                "{bad:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["2.3", "3.*", "3.6.*", "10"] {
            assert_eq!(text.parse::<VersionSpec>().unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_exact_ignores_extra_runtime_precision() {
        let spec: VersionSpec = "3.8".parse().unwrap();
        assert!(spec.compare(&rt(&[3, 8, 10]), Operator::Equal).unwrap());
        assert!(!spec.compare(&rt(&[3, 8, 10]), Operator::GreaterThan).unwrap());
    }

    #[test]
    fn test_wildcard_equality() {
        let spec: VersionSpec = "2.*".parse().unwrap();
        assert!(spec.compare(&rt(&[2, 6]), Operator::Equal).unwrap());
        assert!(!spec.compare(&rt(&[3, 0]), Operator::Equal).unwrap());
        assert!(spec.compare(&rt(&[3, 0]), Operator::NotEqual).unwrap());
    }

    #[test]
    fn test_wildcard_ordering_fallback_uses_prefix() {
        let spec: VersionSpec = "2.*".parse().unwrap();
        assert!(spec.compare(&rt(&[3, 0]), Operator::GreaterThan).unwrap());
        assert!(!spec.compare(&rt(&[2, 9]), Operator::GreaterThan).unwrap());
        assert!(spec.compare(&rt(&[2, 9]), Operator::GreaterThanOrEqual).unwrap());
        assert!(spec.compare(&rt(&[1, 9]), Operator::LessThan).unwrap());
    }

    #[test]
    fn test_runtime_too_short() {
        let spec: VersionSpec = "3.8.1".parse().unwrap();
        assert_eq!(
            spec.compare(&rt(&[3, 8]), Operator::Equal),
            Err(Error::InsufficientRuntimePrecision {
                required: 3,
                actual: 2
            })
        );
    }
}
