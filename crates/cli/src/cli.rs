// SPDX-License-Identifier: MIT
// Copyright (c) 2026 groblegark

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use termcolor::ColorChoice;

use crate::color;

/// Recursive multi-pattern file search with context windows
#[derive(Parser)]
#[command(name = "trawl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan recursively
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Shell-glob filename mask, matched against base names (e.g. "*.log")
    #[arg(value_name = "MASK")]
    pub mask: String,

    /// Regular expressions; a file is reported only if all of them match
    #[arg(value_name = "REGEX", required = true)]
    pub patterns: Vec<String>,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Print a scan summary to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective color choice from flags and environment.
    pub fn color_choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else if self.color {
            ColorChoice::Always
        } else {
            color::resolve_color()
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
