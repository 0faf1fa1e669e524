//! Rewriting of `storage.files` entries.
//!
//! Each file entry whose `contents` mapping carries an `inline` string gets a
//! `contents.source` data URL instead. Entries without `contents` or without
//! `contents.inline` are skipped; any other shape mismatch is an error.

use super::data_url;
use crate::error::{FilterError, Result};
use serde_yaml::{Mapping, Value};
use tracing::debug;

const STORAGE_KEY: &str = "storage";
const FILES_KEY: &str = "files";
const CONTENTS_KEY: &str = "contents";
const INLINE_KEY: &str = "inline";
const SOURCE_KEY: &str = "source";

/// Path used in errors when the document itself has the wrong shape.
const ROOT_PATH: &str = "document root";

/// Counts of file entries visited by [`inline_file_contents`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InlineSummary {
    /// Entries whose inline contents were replaced by a data URL.
    pub rewritten: usize,
    /// Entries left untouched because `contents` or `inline` was missing.
    pub skipped: usize,
}

/// Replace every `storage.files[*].contents.inline` with a data URL in
/// `contents.source`, mutating `document` in place.
///
/// A missing `storage` or `storage.files` is treated as empty.
///
/// # Errors
///
/// Returns [`FilterError::Structure`] when the root, `storage`, a file entry or
/// its `contents` is not a mapping, when `files` is not a sequence, or when
/// `inline` is not a string.
pub fn inline_file_contents(document: &mut Value) -> Result<InlineSummary> {
    let mut summary = InlineSummary::default();

    let root = as_mapping_mut(document, ROOT_PATH)?;
    let Some(storage) = root.get_mut(STORAGE_KEY) else {
        return Ok(summary);
    };
    let storage = as_mapping_mut(storage, STORAGE_KEY)?;
    let Some(files) = storage.get_mut(FILES_KEY) else {
        return Ok(summary);
    };
    let files = match files {
        Value::Sequence(files) => files,
        other => {
            return Err(FilterError::structure(
                format!("{}.{}", STORAGE_KEY, FILES_KEY),
                "sequence",
                other,
            ));
        }
    };

    for (index, entry) in files.iter_mut().enumerate() {
        let path = format!("{}.{}[{}]", STORAGE_KEY, FILES_KEY, index);
        if rewrite_entry(entry, &path)? {
            summary.rewritten += 1;
        } else {
            summary.skipped += 1;
        }
    }

    Ok(summary)
}

/// Rewrite a single file entry. Returns `false` if it was left unmodified.
fn rewrite_entry(entry: &mut Value, path: &str) -> Result<bool> {
    let entry = as_mapping_mut(entry, path)?;

    let Some(contents) = entry.get_mut(CONTENTS_KEY) else {
        debug!(%path, "file entry has no contents, leaving it unchanged");
        return Ok(false);
    };
    let contents_path = format!("{}.{}", path, CONTENTS_KEY);
    let contents = as_mapping_mut(contents, &contents_path)?;

    let source = match contents.get(INLINE_KEY) {
        None => {
            debug!(%path, "file entry has no inline contents, leaving it unchanged");
            return Ok(false);
        }
        Some(Value::String(text)) => data_url::encode(text),
        Some(other) => {
            return Err(FilterError::structure(
                format!("{}.{}", contents_path, INLINE_KEY),
                "string",
                other,
            ));
        }
    };

    // Keeps the slot of an existing `source`; otherwise appends.
    contents.insert(Value::from(SOURCE_KEY), Value::from(source));
    contents.shift_remove(INLINE_KEY);

    debug!(%path, "replaced inline contents with data URL");
    Ok(true)
}

fn as_mapping_mut<'a>(value: &'a mut Value, path: &str) -> Result<&'a mut Mapping> {
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(FilterError::structure(path, "mapping", other)),
    }
}
