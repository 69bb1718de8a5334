//! Binary entrypoint for the `ctxsnap` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match ctxsnap::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
