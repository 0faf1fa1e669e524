//! ignition-inline: convert a YAML Ignition config to JSON, turning inline
//! file contents into data URLs.
//!
//! This is the main entry point for the `ignition-inline` CLI. It parses
//! arguments, runs the filter from stdin to stdout, and handles errors with
//! proper exit codes.

mod cli;
mod document;
mod error;
mod exit_codes;
mod logging;
mod stream;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    Cli::parse_args();
    logging::init();

    match stream::run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print the failure to stderr; stdout stays free of partial output
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
