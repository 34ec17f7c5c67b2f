//! Subcommand execution

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use pyreq_markers::{filter_requirements, Marker, MarkerEnvironment};
use pyreq_version::{satisfies_python_requirement, Requirement, RequirementSet, RuntimeVersion};
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::detect::resolve_runtime;

/// Result of a subcommand, printed as text or JSON.
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Outcome {
    Check {
        runtime: RuntimeVersion,
        requirement: String,
        satisfied: bool,
    },
    Require {
        runtime: RuntimeVersion,
        requirements: RequirementSet,
        satisfied: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        unsatisfied: Option<Requirement>,
    },
    Marker {
        runtime: RuntimeVersion,
        sys_platform: String,
        marker: String,
        satisfied: bool,
    },
    Filter {
        runtime: RuntimeVersion,
        requirements: Vec<String>,
    },
    Detect {
        runtime: RuntimeVersion,
    },
}

impl Outcome {
    /// `0` when satisfied, `1` when not.
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::Check { satisfied, .. }
            | Outcome::Require { satisfied, .. }
            | Outcome::Marker { satisfied, .. } if !satisfied => 1,
            _ => 0,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn render_text(&self) -> String {
        match self {
            Outcome::Check {
                runtime,
                requirement,
                satisfied,
            } => format!("{}: Python {} {}", verdict(*satisfied), runtime, requirement),
            Outcome::Require {
                runtime,
                requirements,
                satisfied,
                unsatisfied,
            } => match unsatisfied {
                Some(failed) if !satisfied => format!(
                    "{}: Python {} does not satisfy {} (from {})",
                    verdict(*satisfied),
                    runtime,
                    failed,
                    requirements
                ),
                _ => format!("{}: Python {} {}", verdict(*satisfied), runtime, requirements),
            },
            Outcome::Marker {
                runtime,
                sys_platform,
                marker,
                satisfied,
            } => format!(
                "{}: {} (Python {}, {})",
                verdict(*satisfied),
                marker,
                runtime,
                sys_platform
            ),
            Outcome::Filter { requirements, .. } => requirements.join("\n"),
            Outcome::Detect { runtime } => runtime.to_string(),
        }
    }

    pub fn render_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn verdict(satisfied: bool) -> &'static str {
    if satisfied {
        "satisfied"
    } else {
        "not satisfied"
    }
}

pub fn run(cli: &Cli, config: &Config) -> anyhow::Result<Outcome> {
    let runtime = resolve_runtime(
        cli.python.as_ref(),
        cli.interpreter.as_deref(),
        &config.python,
    )?;

    let outcome = match &cli.command {
        Command::Check { operator, spec } => {
            let satisfied = satisfies_python_requirement(operator, spec, runtime.components())
                .with_context(|| format!("Cannot check '{operator} {spec}'"))?;
            Outcome::Check {
                requirement: format!("{} {}", operator.trim(), spec.trim()),
                runtime,
                satisfied,
            }
        }
        Command::Require { requirements } => {
            let requirements: RequirementSet = requirements
                .parse()
                .with_context(|| format!("Invalid requirements '{requirements}'"))?;
            let unsatisfied = requirements.first_unsatisfied(&runtime)?.cloned();
            Outcome::Require {
                satisfied: unsatisfied.is_none(),
                unsatisfied,
                requirements,
                runtime,
            }
        }
        Command::Marker { expression } => {
            let marker: Marker = expression
                .parse()
                .with_context(|| format!("Invalid marker '{expression}'"))?;
            let env = marker_environment(&runtime, cli, config);
            let satisfied = marker.evaluate(&env)?;
            Outcome::Marker {
                sys_platform: env.sys_platform,
                marker: marker.to_string(),
                runtime,
                satisfied,
            }
        }
        Command::Filter { file } => {
            let text = read_input(file)?;
            let env = marker_environment(&runtime, cli, config);
            let requirements = filter_requirements(&text, &env)
                .with_context(|| format!("Failed to filter {}", file.display()))?;
            Outcome::Filter {
                runtime,
                requirements,
            }
        }
        Command::Detect => Outcome::Detect { runtime },
    };

    tracing::debug!(?outcome, "Command finished");
    Ok(outcome)
}

fn marker_environment(runtime: &RuntimeVersion, cli: &Cli, config: &Config) -> MarkerEnvironment {
    let env = MarkerEnvironment::for_host(runtime.clone());
    match cli.platform.as_ref().or(config.python.sys_platform.as_ref()) {
        Some(platform) => env.with_sys_platform(platform.as_str()),
        None => env,
    }
}

fn read_input(file: &Path) -> anyhow::Result<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read requirements from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}
