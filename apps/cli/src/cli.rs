use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pyreq_version::RuntimeVersion;

/// Check Python runtime versions against requirements and environment markers.
#[derive(Debug, Parser)]
#[command(name = "pyreq", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Runtime version to check against (skips interpreter detection)
    #[arg(long, global = true, value_name = "VERSION")]
    pub python: Option<RuntimeVersion>,

    /// Interpreter to run with `--version` for detection
    #[arg(long, global = true, value_name = "PATH")]
    pub interpreter: Option<String>,

    /// Value for the `sys_platform` marker
    #[arg(long, global = true)]
    pub platform: Option<String>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./pyreq.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check `runtime <OPERATOR> <SPEC>`, e.g. `check '>=' 3.8`
    Check {
        operator: String,
        spec: String,
    },
    /// Check a comma-separated requirement list, e.g. `require '>=3.6, <4'`
    Require { requirements: String },
    /// Evaluate an environment marker, e.g. `marker "python_version < '3'"`
    Marker { expression: String },
    /// Print the lines of a requirements file that apply (`-` reads stdin)
    Filter { file: PathBuf },
    /// Print the detected runtime version
    Detect,
}
