//! Exit code constants for the ignition-inline filter.
//!
//! - 0: Success
//! - 1: Reading stdin or writing stdout failed
//! - 2: Command-line usage error (reported by clap, never by the filter)
//! - 3: Input is not valid YAML
//! - 4: Document shape mismatch (wrong container type, non-string inline)
//! - 5: Document could not be rendered as JSON

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// I/O failure on the standard streams.
pub const IO_FAILURE: i32 = 1;

/// Bad command-line arguments. clap exits with this code on its own.
#[allow(dead_code)]
pub const USAGE_ERROR: i32 = 2;

/// YAML syntax error.
pub const PARSE_FAILURE: i32 = 3;

/// The document has an unexpected shape along the `storage.files` path.
pub const STRUCTURE_FAILURE: i32 = 4;

/// JSON rendering failure, e.g. a mapping key that is not a scalar.
pub const SERIALIZE_FAILURE: i32 = 5;
