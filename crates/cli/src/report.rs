//! Match report formatting.
//!
//! Per-file block:
//! ```text
//! <file path>
//! <line number, width 5><marker> <line text>
//! ...
//! <80-dash separator at gaps between match clusters>
//! ...
//! <blank line><blank line>
//! ```
//!
//! Line numbers are 1-based. The marker is `" >"` on exact match lines and
//! `"  "` on context lines. Colors go through the `WriteColor` sink so a
//! `NoColor` writer yields exactly the bytes above.

use std::io::{self, Write};
use std::path::Path;

use termcolor::WriteColor;

use crate::color::scheme;
use crate::window::Window;

/// Width of the separator between disjoint match clusters.
pub const SEPARATOR_WIDTH: usize = 80;

/// Print one matching file's report block.
pub fn print_file(out: &mut dyn WriteColor, path: &Path, window: &Window) -> io::Result<()> {
    out.set_color(&scheme::path())?;
    write!(out, "{}", path.display())?;
    out.reset()?;
    writeln!(out)?;

    let mut previous: Option<usize> = None;
    for (&index, line) in window {
        // A jump in line numbers means two separate match clusters.
        if previous.is_some_and(|prev| index > prev + 1) {
            writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        }

        out.set_color(&scheme::line_number())?;
        write!(out, "{:5}", index + 1)?;
        out.reset()?;

        if line.exact {
            out.set_color(&scheme::marker())?;
            write!(out, " >")?;
            out.reset()?;
        } else {
            write!(out, "  ")?;
        }

        writeln!(out, " {}", line.text)?;
        previous = Some(index);
    }

    writeln!(out)?;
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
