//! Configuration for the `pyreq` binary
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `pyreq.toml` in the working directory (or the file passed with `--config`)
//! 3. `PYREQ__*` environment variables, e.g. `PYREQ__PYTHON__INTERPRETER=python3.11`

use std::path::Path;

use anyhow::Context;
use pyreq_version::RuntimeVersion;
use serde::Deserialize;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub python: PythonConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PythonConfig {
    /// Interpreter run with `--version` when no version is given.
    pub interpreter: String,
    /// Fixed runtime version; skips interpreter detection.
    #[serde(default)]
    pub version: Option<RuntimeVersion>,
    /// Overrides the `sys_platform` marker value.
    #[serde(default)]
    pub sys_platform: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("python.interpreter", "python3")?
            .set_default("logging.level", "warn")?
            .set_default("logging.json", false)?;

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name("pyreq").required(false)),
        };

        let config = builder
            .add_source(config::Environment::with_prefix("PYREQ").separator("__"))
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.python.interpreter.trim().is_empty() {
            return Err("python.interpreter must not be empty".to_string());
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            python: PythonConfig {
                interpreter: "python3".to_string(),
                version: None,
                sys_platform: None,
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                json: false,
            },
        }
    }
}
