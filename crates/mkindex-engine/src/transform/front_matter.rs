//! YAML front matter detection.
//!
//! Front matter is a block at the very top of a file opened and closed by a
//! `---` line. Markers are compared after trimming surrounding whitespace.
//! When the opening marker has no matching close the file is treated as
//! having no front matter at all and every line is body.

pub const FRONT_MATTER_MARKER: &str = "---";

/// Number of leading lines taken up by front matter, both markers included.
///
/// Returns 0 when the file does not open with a marker or the block is never closed.
pub fn front_matter_len<S: AsRef<str>>(lines: &[S]) -> usize {
    match lines.first() {
        Some(first) if is_marker(first.as_ref()) => lines[1..]
            .iter()
            .position(|line| is_marker(line.as_ref()))
            .map_or(0, |closing| closing + 2),
        _ => 0,
    }
}

/// The lines following the front matter block, or all lines when there is none
pub fn strip_front_matter<S: AsRef<str>>(lines: &[S]) -> &[S] {
    &lines[front_matter_len(lines)..]
}

fn is_marker(line: &str) -> bool {
    line.trim() == FRONT_MATTER_MARKER
}
