//! Per-line regular expression matching.

use regex::Regex;

use crate::error::{Error, Result};

/// A compiled search pattern, keeping the source text for diagnostics.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern.
    ///
    /// The returned error carries the offending pattern text alongside the
    /// engine's own complaint, so the top-level handler can format both.
    pub fn compile(text: &str) -> Result<Self> {
        let regex = Regex::new(text).map_err(|e| Error::Pattern {
            pattern: text.to_string(),
            source: e,
        })?;

        Ok(Self {
            text: text.to_string(),
            regex,
        })
    }

    /// The pattern as supplied on the command line.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Indices of lines the pattern matches, ascending.
    ///
    /// Each line is tested independently; there is no multi-line mode.
    pub fn match_lines(&self, lines: &[String]) -> Vec<usize> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.regex.is_match(line))
            .map(|(i, _)| i)
            .collect()
    }
}

/// All search patterns for a run, compiled up front.
///
/// Compiling before the walk starts means an invalid pattern aborts the run
/// before any output is produced.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compile every pattern, failing on the first invalid one.
    pub fn compile(texts: &[String]) -> Result<Self> {
        let patterns = texts
            .iter()
            .map(|t| Pattern::compile(t))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// The compiled patterns, in command-line order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
