//! Resolving the Python runtime version to check against

use std::process::Command;

use anyhow::{bail, Context};
use pyreq_version::RuntimeVersion;

use crate::config::PythonConfig;

/// Pick the runtime version: an explicit version wins, then the configured
/// one, then whatever the interpreter reports.
pub fn resolve_runtime(
    explicit: Option<&RuntimeVersion>,
    interpreter: Option<&str>,
    config: &PythonConfig,
) -> anyhow::Result<RuntimeVersion> {
    if let Some(version) = explicit {
        tracing::debug!(%version, "Using runtime version from command line");
        return Ok(version.clone());
    }
    if let Some(version) = &config.version {
        tracing::debug!(%version, "Using runtime version from configuration");
        return Ok(version.clone());
    }
    detect_interpreter_version(interpreter.unwrap_or(&config.interpreter))
}

/// Run `<interpreter> --version` and parse its output.
///
/// Python 2 prints the version on stderr, so stderr is used when stdout is empty.
pub fn detect_interpreter_version(interpreter: &str) -> anyhow::Result<RuntimeVersion> {
    let output = Command::new(interpreter)
        .arg("--version")
        .output()
        .with_context(|| format!("Failed to run '{interpreter} --version'"))?;

    if !output.status.success() {
        bail!(
            "'{interpreter} --version' exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = if stdout.trim().is_empty() {
        String::from_utf8_lossy(&output.stderr)
    } else {
        stdout
    };

    let version = RuntimeVersion::from_interpreter_output(&text)
        .with_context(|| format!("Unrecognized output from '{interpreter} --version'"))?;
    tracing::info!(interpreter, %version, "Detected Python runtime");
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python_config(version: Option<&str>) -> PythonConfig {
        PythonConfig {
            interpreter: "pyreq-test-no-such-interpreter".to_string(),
            version: version.map(|v| v.parse().unwrap()),
            sys_platform: None,
        }
    }

    #[test]
    fn test_explicit_version_wins() {
        let explicit = RuntimeVersion::from((3, 12));
        let resolved =
            resolve_runtime(Some(&explicit), None, &python_config(Some("2.7"))).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn test_configured_version_skips_detection() {
        let resolved = resolve_runtime(None, None, &python_config(Some("3.9.1"))).unwrap();
        assert_eq!(resolved, RuntimeVersion::from((3, 9, 1)));
    }

    #[test]
    fn test_missing_interpreter_is_an_error() {
        let err = resolve_runtime(None, None, &python_config(None)).unwrap_err();
        assert!(err.to_string().contains("pyreq-test-no-such-interpreter"));
    }
}
