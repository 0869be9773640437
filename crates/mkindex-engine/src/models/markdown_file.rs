use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Path, PathBuf};

/// A markdown file discovered in a category directory, addressed relative to that directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl MarkdownFile {
    /// Create a new MarkdownFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the display name (the original filename, extension included)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Resolve this file against the directory it was discovered in
    pub fn to_path(&self, root: &Path) -> PathBuf {
        self.relative_path.to_path(root)
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name().unwrap_or(path.as_str()).to_string()
    }
}

impl From<RelativePathBuf> for MarkdownFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for MarkdownFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_keeps_extension() {
        let file = MarkdownFile::from("getting-started.md");
        assert_eq!(file.display_name(), "getting-started.md");
    }

    #[test]
    fn test_display_name_uses_last_component() {
        let file = MarkdownFile::from("nested/deep.md");
        assert_eq!(file.display_name(), "deep.md");
        assert_eq!(file.relative_path().as_str(), "nested/deep.md");
    }

    #[test]
    fn test_to_path_joins_root() {
        let file = MarkdownFile::from("a.md");
        assert_eq!(file.to_path(Path::new("/notes")), PathBuf::from("/notes/a.md"));
    }
}
