//! CLI argument parsing for ignition-inline.
//!
//! Uses clap derive macros. The filter takes no arguments; clap contributes
//! `--help` and `--version` and rejects anything else.

use clap::Parser;

/// Convert a YAML Ignition config on stdin to JSON on stdout.
///
/// Every `storage.files` entry with `contents.inline` gets that text moved
/// into `contents.source` as a percent-encoded `data:` URL.
/// Set RUST_LOG (e.g. `RUST_LOG=debug`) for diagnostics on stderr.
#[derive(Parser, Debug)]
#[command(name = "ignition-inline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
