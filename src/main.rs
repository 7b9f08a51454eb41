//! Binary entrypoint for the `sddpack` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match sddpack::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
