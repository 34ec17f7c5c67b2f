//! Filtering of requirements files by environment marker

use crate::environment::MarkerEnvironment;
use crate::error::{Error, Result};
use crate::marker::Marker;

/// One non-empty line of a requirements file, split at the marker separator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequirementLine {
    /// The requirement without its marker, e.g. `enum34==1.1.6`.
    pub requirement: String,
    pub marker: Option<Marker>,
}

impl RequirementLine {
    /// Parse a line, returning `None` for blank and comment-only lines.
    ///
    /// Comments start at a `#` at the beginning of the line or after whitespace.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            return Ok(None);
        }

        // pip options (`-r other.txt`, `--index-url ...`) carry no marker
        if line.starts_with('-') {
            return Ok(Some(Self {
                requirement: line.to_string(),
                marker: None,
            }));
        }

        match line.split_once(';') {
            Some((requirement, marker)) if !marker.trim().is_empty() => Ok(Some(Self {
                requirement: requirement.trim().to_string(),
                marker: Some(marker.parse()?),
            })),
            Some((requirement, _)) => Ok(Some(Self {
                requirement: requirement.trim().to_string(),
                marker: None,
            })),
            None => Ok(Some(Self {
                requirement: line.to_string(),
                marker: None,
            })),
        }
    }

    /// A line without a marker applies everywhere.
    pub fn applies_to(&self, env: &MarkerEnvironment) -> Result<bool> {
        match &self.marker {
            Some(marker) => marker.evaluate(env),
            None => Ok(true),
        }
    }
}

fn strip_comment(line: &str) -> &str {
    let mut previous_is_space = true;
    for (i, c) in line.char_indices() {
        if c == '#' && previous_is_space {
            return &line[..i];
        }
        previous_is_space = c.is_whitespace();
    }
    line
}

/// Return the requirements from `text` whose markers match `env`, markers removed.
pub fn filter_requirements(text: &str, env: &MarkerEnvironment) -> Result<Vec<String>> {
    let mut kept = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let at_line = |source: Error| Error::InvalidLine {
            line: line_number,
            source: Box::new(source),
        };

        let Some(line) = RequirementLine::parse(raw).map_err(at_line)? else {
            continue;
        };

        if line.applies_to(env).map_err(at_line)? {
            kept.push(line.requirement);
        } else if let Some(marker) = &line.marker {
            tracing::debug!(
                line = line_number,
                requirement = %line.requirement,
                marker = %marker,
                "Skipping requirement, marker does not match environment"
            );
        }
    }

    tracing::debug!(kept = kept.len(), "Filtered requirements");
    Ok(kept)
}
