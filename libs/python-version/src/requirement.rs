//! Operator + version spec pairs, alone or joined with commas

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::operator::Operator;
use crate::runtime::RuntimeVersion;
use crate::spec::VersionSpec;

/// A single requirement such as `>=3.5` or `== 2.*`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Requirement {
    pub operator: Operator,
    pub spec: VersionSpec,
}

impl Requirement {
    pub fn new(operator: Operator, spec: VersionSpec) -> Self {
        Self { operator, spec }
    }

    /// Parse an operator symbol and a spec given separately.
    pub fn parse_parts(operator: &str, spec: &str) -> Result<Self> {
        let operator = operator.parse()?;
        let spec = spec.parse()?;
        Ok(Self { operator, spec })
    }

    pub fn is_satisfied_by(&self, runtime: &RuntimeVersion) -> Result<bool> {
        self.spec.compare(runtime, self.operator)
    }
}

impl FromStr for Requirement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        if input.is_empty() {
            return Err(Error::EmptyRequirement);
        }
        let (operator, rest) = Operator::split_prefix(input)
            .ok_or_else(|| Error::InvalidOperator(leading_symbol(input)))?;
        // `===` must not be read as `==`
        if rest.starts_with(['=', '<', '>', '!', '~']) {
            return Err(Error::InvalidOperator(leading_symbol(input)));
        }
        Ok(Self {
            operator,
            spec: rest.parse()?,
        })
    }
}

fn leading_symbol(input: &str) -> String {
    input
        .chars()
        .take_while(|c| !c.is_ascii_digit() && !c.is_whitespace())
        .collect()
}

impl TryFrom<String> for Requirement {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Requirement> for String {
    fn from(requirement: Requirement) -> Self {
        requirement.to_string()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.spec)
    }
}

/// A comma-joined list of requirements that must all hold, e.g.
/// `>=3.6, !=3.7.*, <4`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct RequirementSet {
    requirements: Vec<Requirement>,
}

impl RequirementSet {
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// An empty set is satisfied by every runtime.
    pub fn is_satisfied_by(&self, runtime: &RuntimeVersion) -> Result<bool> {
        for requirement in &self.requirements {
            if !requirement.is_satisfied_by(runtime)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The first requirement the runtime fails, if any.
    pub fn first_unsatisfied(&self, runtime: &RuntimeVersion) -> Result<Option<&Requirement>> {
        for requirement in &self.requirements {
            if !requirement.is_satisfied_by(runtime)? {
                return Ok(Some(requirement));
            }
        }
        Ok(None)
    }
}

impl FromIterator<Requirement> for RequirementSet {
    fn from_iter<I: IntoIterator<Item = Requirement>>(iter: I) -> Self {
        Self {
            requirements: iter.into_iter().collect(),
        }
    }
}

impl FromStr for RequirementSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(',').map(str::parse::<Requirement>).collect()
    }
}

impl TryFrom<String> for RequirementSet {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RequirementSet> for String {
    fn from(set: RequirementSet) -> Self {
        set.to_string()
    }
}

impl fmt::Display for RequirementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, requirement) in self.requirements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", requirement)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_forms() {
        let req: Requirement = ">=3.5".parse().unwrap();
        assert_eq!(req.operator, Operator::GreaterThanOrEqual);
        assert_eq!(req.spec, VersionSpec::Exact(vec![3, 5]));

        let req: Requirement = " == 2.* ".parse().unwrap();
        assert_eq!(req.operator, Operator::Equal);
        assert_eq!(req.spec, VersionSpec::WildcardPrefix(vec![2]));
        assert_eq!(req.to_string(), "==2.*");
    }

    #[test]
    fn test_parse_rejects_bad_operators() {
        assert_eq!(
            "~=3.5".parse::<Requirement>(),
            Err(Error::InvalidOperator("~=".to_string()))
        );
        assert_eq!(
            "===3.5".parse::<Requirement>(),
            Err(Error::InvalidOperator("===".to_string()))
        );
        assert_eq!(
            "3.5".parse::<Requirement>(),
            Err(Error::InvalidOperator(String::new()))
        );
        assert_eq!("  ".parse::<Requirement>(), Err(Error::EmptyRequirement));
    }

    #[test]
    fn test_typed_construction() {
        let req = Requirement::new(Operator::NotEqual, VersionSpec::WildcardPrefix(vec![3, 7]));
        assert_eq!(req.to_string(), "!=3.7.*");
        assert!(req.is_satisfied_by(&RuntimeVersion::from((3, 8, 0))).unwrap());
        assert!(!req.is_satisfied_by(&RuntimeVersion::from((3, 7, 4))).unwrap());
    }

    #[test]
    fn test_parse_parts() {
        let req = Requirement::parse_parts("<", "4").unwrap();
        assert!(req.is_satisfied_by(&RuntimeVersion::from((3, 12))).unwrap());
        assert!(matches!(
            Requirement::parse_parts("=<", "4"),
            Err(Error::InvalidOperator(_))
        ));
    }

    #[test]
    fn test_requirement_set() {
        let set: RequirementSet = ">=3.6, !=3.7.*, <4".parse().unwrap();
        assert_eq!(set.requirements().len(), 3);
        assert!(set.is_satisfied_by(&RuntimeVersion::from((3, 8))).unwrap());
        assert!(!set.is_satisfied_by(&RuntimeVersion::from((3, 7))).unwrap());
        assert!(!set.is_satisfied_by(&RuntimeVersion::from((2, 7))).unwrap());
        assert_eq!(
            set.first_unsatisfied(&RuntimeVersion::from((3, 7)))
                .unwrap()
                .map(ToString::to_string),
            Some("!=3.7.*".to_string())
        );
        assert_eq!(set.to_string(), ">=3.6, !=3.7.*, <4");
    }

    #[test]
    fn test_empty_set_is_always_satisfied() {
        let set: RequirementSet = "".parse().unwrap();
        assert!(set.is_empty());
        assert!(set.is_satisfied_by(&RuntimeVersion::from((2, 0))).unwrap());
    }

    #[test]
    fn test_set_with_empty_member_fails() {
        assert_eq!(
            ">=3.6,,<4".parse::<RequirementSet>(),
            Err(Error::EmptyRequirement)
        );
    }
}
