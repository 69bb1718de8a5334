//! Core library entry for the `ctxsnap` CLI.
//!
//! `ctxsnap` regenerates the ownership-chain service's LLM context
//! document: it reads a fixed set of tracked files, extracts method names
//! from the analyzer module by structural scan, and composes everything
//! into one timestamped markdown artifact.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod ports;
pub mod snapshot;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
