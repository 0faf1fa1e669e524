//! The Ignition document filter.
//!
//! A document is parsed into an untyped [`serde_yaml::Value`] tree, its
//! `storage.files` entries are rewritten in place, and the whole tree is
//! rendered back out as pretty-printed JSON. Mapping key order survives the
//! round trip.

mod data_url;
mod files;
mod yaml11;


pub use files::inline_file_contents;

use crate::error::{FilterError, Result};
use serde_yaml::Value;
use tracing::info;

/// Convert YAML text into JSON text with inline file contents turned into
/// data URLs.
///
/// The returned JSON uses 2-space indentation and ends with a newline.
pub fn transform(input: &str) -> Result<String> {
    let mut document = parse(input)?;
    let summary = inline_file_contents(&mut document)?;
    info!(
        rewritten = summary.rewritten,
        skipped = summary.skipped,
        "processed storage.files entries"
    );
    render(&document)
}

/// Parse YAML text into an untyped document tree.
///
/// Plain scalars follow YAML 1.1 (`0644` is octal, `yes`/`off` are booleans)
/// and `<<` merge keys are applied.
pub fn parse(input: &str) -> Result<Value> {
    let mut document = yaml11::from_str(input).map_err(FilterError::Parse)?;
    document.apply_merge().map_err(FilterError::Parse)?;
    Ok(document)
}

/// Render a document tree as 2-space indented JSON followed by a newline.
pub fn render(document: &Value) -> Result<String> {
    let mut json = serde_json::to_string_pretty(document).map_err(FilterError::Serialize)?;
    json.push('\n');
    Ok(json)
}
