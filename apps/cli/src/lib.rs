//! `pyreq` command-line application
//!
//! Library half of the binary so the subcommands can be exercised from tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod detect;
pub mod logging;
