//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::snapshot::{DEFAULT_MAX_EXCERPT_CHARS, DEFAULT_OUTPUT_PATH};

/// Top-level CLI parser for `ctxsnap`.
#[derive(Debug, Parser)]
#[command(name = "ctxsnap", version, about = "Generate the LLM context snapshot document")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compose and write the context document for the tracked project.
    Generate {
        /// Project root containing the manifest and tracked files.
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Destination path for the composed document, relative to the root.
        #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Character cap for truncated source excerpts.
        #[arg(long, default_value_t = DEFAULT_MAX_EXCERPT_CHARS)]
        max_excerpt_chars: usize,
    },
}
