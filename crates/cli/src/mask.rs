//! Filename mask matching.
//!
//! The mask is a shell-style glob (e.g. `*.log`) matched against a file's
//! base name only, never the full path.

use std::ffi::OsStr;
use std::path::Path;

use globset::{Glob, GlobMatcher};

use crate::error::{Error, Result};

/// A compiled filename mask.
#[derive(Debug, Clone)]
pub struct FileMask {
    mask: String,
    matcher: GlobMatcher,
}

impl FileMask {
    /// Compile a shell-glob mask.
    ///
    /// An unparseable mask aborts the run before any file is visited.
    pub fn new(mask: &str) -> Result<Self> {
        let glob = Glob::new(mask).map_err(|e| Error::Mask {
            mask: mask.to_string(),
            source: e,
        })?;

        Ok(Self {
            mask: mask.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    /// The mask as supplied on the command line.
    pub fn as_str(&self) -> &str {
        &self.mask
    }

    /// Match a file's base name against the mask.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        self.matcher.is_match(Path::new(file_name))
    }
}

#[cfg(test)]
#[path = "mask_tests.rs"]
mod tests;
