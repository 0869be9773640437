//! Heading demotion.
//!
//! Each document lands under the index page's `#` title, so its own headings
//! are pushed down one level. Lines inside fenced code blocks are left alone.

use std::borrow::Cow;

pub const FENCE_MARKER: &str = "```";
pub const HEADING_MARKER: char = '#';

/// Tracks whether a line-by-line scan is inside a fenced code block.
///
/// Any line starting with [`FENCE_MARKER`] toggles the state; info strings and
/// fence lengths are not matched against the opener.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FenceState {
    open: bool,
}

impl FenceState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Feed the next line. Returns true when the line is itself a fence delimiter.
    pub fn observe(&mut self, line: &str) -> bool {
        if line.starts_with(FENCE_MARKER) {
            self.open = !self.open;
            true
        } else {
            false
        }
    }
}

/// Prepend one `#` to a heading line; anything else passes through
pub fn demote_heading(line: &str) -> Cow<'_, str> {
    if line.starts_with(HEADING_MARKER) {
        Cow::Owned(format!("{HEADING_MARKER}{line}"))
    } else {
        Cow::Borrowed(line)
    }
}

/// Demote every heading outside fenced code blocks
pub fn demote_headings<S: AsRef<str>>(lines: &[S]) -> Vec<Cow<'_, str>> {
    let mut fence = FenceState::default();
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            if fence.observe(line) || fence.is_open() {
                Cow::Borrowed(line)
            } else {
                demote_heading(line)
            }
        })
        .collect()
}
