//! Union of per-pattern context windows.

use crate::window::Window;

/// Merge the windows contributed by each pattern for one file.
///
/// Keys are unioned; a line is exact in the merged window when any
/// contributing window marks it exact. Ascending order falls out of the
/// `BTreeMap` key order.
pub fn merge_windows(windows: Vec<Window>) -> Window {
    let mut merged = Window::new();

    for window in windows {
        for (index, line) in window {
            merged
                .entry(index)
                .and_modify(|existing| existing.exact |= line.exact)
                .or_insert(line);
        }
    }

    merged
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
