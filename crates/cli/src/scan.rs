// SPDX-License-Identifier: MIT
// Copyright (c) 2026 groblegark

//! Per-file matching pipeline and scan orchestration.

use std::path::Path;

use termcolor::WriteColor;

use crate::error::Result;
use crate::mask::FileMask;
use crate::matcher::PatternSet;
use crate::merge::merge_windows;
use crate::reader;
use crate::report;
use crate::walker;
use crate::window::{Window, build_window};

/// Counters for one scan.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanStats {
    /// Files that passed the mask filter and were read.
    pub files_scanned: usize,

    /// Files that matched every pattern and were printed.
    pub files_matched: usize,
}

/// Apply every pattern to a file's lines.
///
/// Returns an empty window unless every pattern matches at least once: the
/// first pattern with no match in the file short-circuits the whole file to
/// "no output", whatever the other patterns found.
pub fn file_windows(lines: &[String], patterns: &PatternSet) -> Window {
    let mut per_pattern = Vec::with_capacity(patterns.len());

    for pattern in patterns.patterns() {
        let matches = pattern.match_lines(lines);
        if matches.is_empty() {
            return Window::new();
        }
        per_pattern.push(build_window(lines, &matches));
    }

    merge_windows(per_pattern)
}

/// A configured scan: compiled mask plus compiled patterns.
#[derive(Debug)]
pub struct Scanner {
    mask: FileMask,
    patterns: PatternSet,
}

impl Scanner {
    /// Compile the mask and every pattern up front.
    pub fn new(mask: &str, patterns: &[String]) -> Result<Self> {
        Ok(Self {
            mask: FileMask::new(mask)?,
            patterns: PatternSet::compile(patterns)?,
        })
    }

    /// Walk `root`, printing a report block for every file that matches all
    /// patterns.
    ///
    /// The first traversal, read, or write failure aborts the scan; files
    /// already printed stay printed.
    pub fn scan(&self, root: &Path, out: &mut dyn WriteColor) -> Result<ScanStats> {
        let mut stats = ScanStats::default();

        for entry in walker::walk(root) {
            let entry = entry.map_err(walker::walk_error)?;
            if !walker::is_file(&entry) {
                continue;
            }
            if !self.mask.matches(entry.file_name()) {
                continue;
            }

            stats.files_scanned += 1;
            tracing::trace!(path = %entry.path().display(), "scanning");

            let lines = reader::read_lines(entry.path())?;
            let merged = file_windows(&lines, &self.patterns);

            if !merged.is_empty() {
                report::print_file(out, entry.path(), &merged)?;
                stats.files_matched += 1;
            }
        }

        tracing::debug!(
            scanned = stats.files_scanned,
            matched = stats.files_matched,
            "scan complete"
        );

        Ok(stats)
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
