//! downlevel CLI entrypoint.
//!
//! Parses args, runs the request through the library, and turns any failure
//! into a message on stderr and a non-zero exit status.
//! For programmatic use, prefer the library API (`downlevel::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => cli::report(&err),
    }
}
