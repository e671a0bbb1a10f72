//! Whole-file reading into newline-stripped lines.
//!
//! Every failure — missing file, permission denial, non-UTF-8 content —
//! maps to [`Error::Io`] and aborts the scan. There is no per-file
//! recovery.

use std::path::Path;

use crate::error::{Error, Result};

/// Read a file fully into memory as an ordered sequence of lines.
///
/// Newline separators (`\n` and `\r\n`) are stripped. The content is
/// transient: callers process it and drop it before the next file.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(text.lines().map(str::to_string).collect())
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
