//! Runs the document filter over a pair of byte streams.
//!
//! Input is read to completion before anything is parsed, and output is only
//! written once the whole JSON document has been rendered, so a failed run
//! never leaves partial JSON on the writer.

use crate::document;
use crate::error::{FilterError, Result};
use std::io::{Read, Write};
use tracing::debug;

/// Read YAML from `input`, filter it, and write the JSON to `output`.
pub fn run<R: Read, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|source| FilterError::Io {
            context: "failed to read standard input",
            source,
        })?;
    debug!(bytes = text.len(), "read input document");

    let json = document::transform(&text)?;

    output
        .write_all(json.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|source| FilterError::Io {
            context: "failed to write standard output",
            source,
        })?;

    Ok(())
}
