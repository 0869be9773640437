//! Index page rendering and generation.
//!
//! The page is a `# Title` header followed by one collapsible block per document:
//!
//! ```text
//! <details>
//! <summary>first lines, escaped, joined with <br></summary>
//!
//! document body without front matter
//!
//! </details>
//!
//! ```

use crate::io::{INDEX_FILE_NAME, IoError, list_markdown_files, read_document};
use crate::models::{Document, MarkdownFile};
use crate::title::directory_title;
use crate::transform::demote_headings;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_SUMMARY_LINES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// How many content lines make up each `<summary>`
    pub summary_lines: usize,
    /// Push document headings one level down, below the page title. Off by default.
    pub demote_headings: bool,
    /// Filename written inside the category directory
    pub output_name: String,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            summary_lines: DEFAULT_SUMMARY_LINES,
            demote_headings: false,
            output_name: INDEX_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("cannot create {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub output_path: PathBuf,
    pub title: String,
    /// Display names of the documents written, in page order
    pub written: Vec<String>,
    /// Display names of the documents that could not be read
    pub skipped: Vec<String>,
}

/// Streams an index page into any writer
pub struct IndexWriter<'a, W: Write> {
    out: W,
    options: &'a IndexOptions,
}

impl<'a, W: Write> IndexWriter<'a, W> {
    pub fn new(out: W, options: &'a IndexOptions) -> Self {
        Self { out, options }
    }

    pub fn write_title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "# {title}")?;
        writeln!(self.out)
    }

    pub fn write_document(&mut self, document: &Document) -> io::Result<()> {
        let summary = document.summary(self.options.summary_lines);
        let content = document.content_lines();
        let body: Vec<Cow<'_, str>> = if self.options.demote_headings {
            demote_headings(content)
        } else {
            content.iter().map(|line| Cow::Borrowed(line.as_str())).collect()
        };

        writeln!(self.out, "<details>")?;
        writeln!(self.out, "<summary>{summary}</summary>")?;
        writeln!(self.out)?;
        for line in &body {
            writeln!(self.out, "{line}")?;
        }
        // Markdown inside <details> needs a blank line before the closing tag
        if body.last().is_some_and(|line| !line.trim().is_empty()) {
            writeln!(self.out)?;
        }
        writeln!(self.out, "</details>")?;
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

}

/// Build `<dir>/<output_name>` from the markdown files in `dir`.
///
/// Listing the directory and creating the output are fatal. A document that
/// cannot be read is logged, recorded in [`IndexReport::skipped`] and left out.
pub fn generate_index(dir: &Path, options: &IndexOptions) -> Result<IndexReport, IndexError> {
    let title = directory_title(dir);
    let files: Vec<MarkdownFile> = list_markdown_files(dir)?
        .into_iter()
        .filter(|file| file.display_name() != options.output_name)
        .collect();
    log::debug!("Found {} markdown files in {}", files.len(), dir.display());

    let output_path = dir.join(&options.output_name);
    let output = File::create(&output_path).map_err(|source| IndexError::CreateOutput {
        path: output_path.clone(),
        source,
    })?;
    let mut writer = IndexWriter::new(BufWriter::new(output), options);

    writer
        .write_title(&title)
        .map_err(|source| write_failed(&output_path, source))?;

    let mut written = Vec::new();
    let mut skipped = Vec::new();
    for file in &files {
        match read_document(dir, file) {
            Ok(document) => {
                writer
                    .write_document(&document)
                    .map_err(|source| write_failed(&output_path, source))?;
                log::debug!(
                    "Wrote {} ({} content lines, front matter stripped: {})",
                    file.display_name(),
                    document.content_lines().len(),
                    document.has_front_matter()
                );
                written.push(file.display_name().to_string());
            }
            Err(e) => {
                log::warn!("{e}");
                skipped.push(file.display_name().to_string());
            }
        }
    }

    writer
        .flush()
        .map_err(|source| write_failed(&output_path, source))?;

    Ok(IndexReport {
        output_path,
        title,
        written,
        skipped,
    })
}

fn write_failed(path: &Path, source: io::Error) -> IndexError {
    IndexError::Write {
        path: path.to_path_buf(),
        source,
    }
}
