//! pyreq - Python runtime requirement checks from the command line
//!
//! Exit status: 0 satisfied, 1 not satisfied, 2 error.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pyreq_cli::{cli::Cli, commands, config::Config, logging};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    // `.env` is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting pyreq");

    let outcome = commands::run(&cli, &config)?;
    if cli.json {
        println!("{}", outcome.render_json()?);
    } else {
        println!("{}", outcome.render_text());
    }

    Ok(outcome.exit_code())
}
