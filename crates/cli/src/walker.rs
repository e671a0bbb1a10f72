// SPDX-License-Identifier: MIT
// Copyright (c) 2026 groblegark

//! Sequential file walking.
//!
//! Uses the `ignore` crate's walker with its standard filters disabled:
//! every file reachable from the root is visited, hidden or not, whatever
//! ignore files say. Entries are sorted by file name so a scan of an
//! unchanged tree prints byte-identical output.
//!
//! Symlink following stays at the walker's default (off).

use std::path::Path;

use ignore::{DirEntry, Walk, WalkBuilder};

use crate::error::Error;

/// Build the sequential walker for a scan root.
pub fn walk(root: &Path) -> Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder.build()
}

/// True when the entry is a plain file (not a directory or other kind).
pub fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().map(|t| t.is_file()).unwrap_or(false)
}

/// Escalate a traversal error to a fatal scan error.
pub fn walk_error(err: ignore::Error) -> Error {
    Error::Walk(err.to_string())
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
