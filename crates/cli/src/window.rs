//! Context window construction around matched lines.

use std::collections::BTreeMap;

/// Lines of context shown on each side of a match.
pub const CONTEXT_RADIUS: usize = 5;

/// A line selected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowLine {
    /// The line text, newline stripped.
    pub text: String,
    /// True when a pattern matched on this line, false for context.
    pub exact: bool,
}

/// Lines selected for display, keyed by 0-based line index.
///
/// The map's key order is the display order, so merged windows never need
/// an explicit sort step.
pub type Window = BTreeMap<usize, WindowLine>;

/// Expand match indices into a ±[`CONTEXT_RADIUS`] window clipped to file
/// bounds.
///
/// A line pulled in as context by one match keeps its non-exact status
/// until some match lands on it directly; once exact, never downgraded.
pub fn build_window(lines: &[String], matches: &[usize]) -> Window {
    let mut window = Window::new();

    for &m in matches {
        let start = m.saturating_sub(CONTEXT_RADIUS);
        let end = (m + CONTEXT_RADIUS).min(lines.len() - 1);

        for i in start..=end {
            let entry = window.entry(i).or_insert_with(|| WindowLine {
                text: lines[i].clone(),
                exact: false,
            });
            if i == m {
                entry.exact = true;
            }
        }
    }

    window
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
