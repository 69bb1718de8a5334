//! Command dispatch and handlers.

pub mod generate;

use crate::cli::Command;
use crate::snapshot::SnapshotOptions;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Generate { root, output, max_excerpt_chars } => {
            let options = SnapshotOptions { max_excerpt_chars: *max_excerpt_chars };
            generate::run(root, output, &options)
        }
    }
}
