//! Comparison operators accepted in Python version requirements

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A version comparison operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    #[cfg_attr(feature = "serde", serde(rename = "=="))]
    Equal,
    #[cfg_attr(feature = "serde", serde(rename = "!="))]
    NotEqual,
    #[cfg_attr(feature = "serde", serde(rename = "<"))]
    LessThan,
    #[cfg_attr(feature = "serde", serde(rename = "<="))]
    LessThanOrEqual,
    #[cfg_attr(feature = "serde", serde(rename = ">"))]
    GreaterThan,
    #[cfg_attr(feature = "serde", serde(rename = ">="))]
    GreaterThanOrEqual,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Apply the operator to the ordering of `runtime` relative to `spec`.
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }

    /// The operator that holds exactly when `self` does not.
    pub fn negated(self) -> Self {
        match self {
            Operator::Equal => Operator::NotEqual,
            Operator::NotEqual => Operator::Equal,
            Operator::LessThan => Operator::GreaterThanOrEqual,
            Operator::LessThanOrEqual => Operator::GreaterThan,
            Operator::GreaterThan => Operator::LessThanOrEqual,
            Operator::GreaterThanOrEqual => Operator::LessThan,
        }
    }

    /// The operator to use when the operands trade places: `a < b` is `b > a`.
    pub fn swapped(self) -> Self {
        match self {
            Operator::LessThan => Operator::GreaterThan,
            Operator::LessThanOrEqual => Operator::GreaterThanOrEqual,
            Operator::GreaterThan => Operator::LessThan,
            Operator::GreaterThanOrEqual => Operator::LessThanOrEqual,
            other => other,
        }
    }

    /// Split a leading operator off `input`, returning it with the remainder.
    ///
    /// Two-character operators are tried first so `<=` is never read as `<`.
    pub fn split_prefix(input: &str) -> Option<(Operator, &str)> {
        let input = input.trim_start();
        for op in [
            Operator::Equal,
            Operator::NotEqual,
            Operator::LessThanOrEqual,
            Operator::GreaterThanOrEqual,
            Operator::LessThan,
            Operator::GreaterThan,
        ] {
            if let Some(rest) = input.strip_prefix(op.as_str()) {
                return Some((op, rest));
            }
        }
        None
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            other => Err(Error::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_symbols() {
        for op in Operator::ALL {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["=", "~=", "===", "=>", "", "<>"] {
            assert_eq!(
                bad.parse::<Operator>(),
                Err(Error::InvalidOperator(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_matches() {
        assert!(Operator::LessThanOrEqual.matches(Ordering::Equal));
        assert!(!Operator::LessThan.matches(Ordering::Equal));
        assert!(Operator::GreaterThan.matches(Ordering::Greater));
        assert!(Operator::NotEqual.matches(Ordering::Less));
    }

    #[test]
    fn test_negated_is_complement() {
        for op in Operator::ALL {
            for ord in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
                assert_ne!(op.matches(ord), op.negated().matches(ord), "{op} {ord:?}");
            }
            assert_eq!(op.negated().negated(), op);
        }
    }

    #[test]
    fn test_swapped_reverses_operands() {
        for op in Operator::ALL {
            for ord in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
                assert_eq!(op.matches(ord), op.swapped().matches(ord.reverse()));
            }
        }
    }

    #[test]
    fn test_split_prefix_prefers_longest() {
        assert_eq!(
            Operator::split_prefix("<=3.5"),
            Some((Operator::LessThanOrEqual, "3.5"))
        );
        assert_eq!(
            Operator::split_prefix(" > 2"),
            Some((Operator::GreaterThan, " 2"))
        );
        assert_eq!(Operator::split_prefix("3.5"), None);
    }
}
