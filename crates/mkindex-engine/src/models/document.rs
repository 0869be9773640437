use crate::models::MarkdownFile;
use crate::transform::{front_matter_len, strip_front_matter, summarize};

/// A loaded markdown document, split into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    file: MarkdownFile,
    lines: Vec<String>,
}

impl Document {
    /// Build a document from its raw text. Accepts both `\n` and `\r\n` line endings.
    pub fn from_text(file: MarkdownFile, text: &str) -> Self {
        Self {
            file,
            lines: split_lines(text).map(str::to_string).collect(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.file.display_name()
    }

    /// Lines following the front matter block
    pub fn content_lines(&self) -> &[String] {
        strip_front_matter(&self.lines)
    }

    pub fn has_front_matter(&self) -> bool {
        front_matter_len(&self.lines) > 0
    }

    /// Escaped preview of the first `count` content lines joined with `<br>`
    pub fn summary(&self, count: usize) -> String {
        summarize(self.content_lines(), count)
    }
}

/// Split on `\n`, dropping one trailing `\r` from each line.
///
/// Unlike `str::lines`, a lone `\r` ending the final line is dropped too.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
