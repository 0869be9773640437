use crate::models::{Document, MarkdownFile};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the generated page; never picked up as a source document
pub const INDEX_FILE_NAME: &str = "index.md";
pub const MARKDOWN_EXTENSION: &str = ".md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Directory not found: {0}")]
    NotFound(PathBuf),
    #[error("error reading dir {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Whether a filename belongs in the index
pub fn is_indexable(file_name: &str) -> bool {
    file_name.ends_with(MARKDOWN_EXTENSION) && file_name != INDEX_FILE_NAME
}

/// List the markdown files directly inside `dir`, sorted by filename.
///
/// Subdirectories are skipped without descending into them, as are names that
/// are not valid UTF-8.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<MarkdownFile>, IoError> {
    if !dir.exists() {
        return Err(IoError::NotFound(dir.to_path_buf()));
    }

    let read_dir_error = |source| IoError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            log::warn!("Skipping non UTF-8 filename {}", path.display());
            continue;
        };

        if is_indexable(&name) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names
        .into_iter()
        .map(|name| MarkdownFile::new(RelativePathBuf::from(name)))
        .collect())
}

/// Read and split a discovered file.
///
/// Invalid UTF-8 is replaced rather than rejected; only I/O failures are errors.
pub fn read_document(dir: &Path, file: &MarkdownFile) -> Result<Document, IoError> {
    let path = file.to_path(dir);
    let bytes = fs::read(&path).map_err(|source| IoError::ReadFile { path, source })?;
    Ok(Document::from_text(
        file.clone(),
        &String::from_utf8_lossy(&bytes),
    ))
}

pub fn validate_category_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};
    use rstest::rstest;

    fn names(files: &[MarkdownFile]) -> Vec<&str> {
        files.iter().map(MarkdownFile::display_name).collect()
    }

    #[rstest]
    #[case("a.md", true)]
    #[case("index.md", false)]
    #[case("INDEX.md", true)]
    #[case("notes.markdown", false)]
    #[case("readme.MD", false)]
    #[case("draft.md.bak", false)]
    fn test_is_indexable(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_indexable(name), expected);
    }

    #[test]
    fn test_list_filters_and_sorts() {
        let dir = create_test_dir();
        create_test_file(&dir, "b.md", "b");
        create_test_file(&dir, "a.md", "a");
        create_test_file(&dir, "index.md", "old index");
        create_test_file(&dir, "notes.txt", "not markdown");
        create_test_file(&dir, "Zeta.md", "upper case sorts first");
        fs::create_dir(dir.path().join("sub.md")).unwrap();
        create_test_file(&dir, "sub.md/inner.md", "nested");

        let files = list_markdown_files(dir.path()).unwrap();

        assert_eq!(names(&files), ["Zeta.md", "a.md", "b.md"]);
    }

    #[test]
    fn test_list_empty_directory() {
        let dir = create_test_dir();
        assert!(list_markdown_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_directory() {
        let result = list_markdown_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_list_rejects_file_as_directory() {
        let dir = create_test_dir();
        let file = create_test_file(&dir, "a.md", "a");
        let result = list_markdown_files(&file);
        assert!(matches!(result, Err(IoError::ReadDir { .. })));
    }

    #[test]
    fn test_read_document_strips_front_matter() {
        let dir = create_test_dir();
        create_test_file(&dir, "b.md", "---\ntitle: x\n---\nBody text");

        let document = read_document(dir.path(), &MarkdownFile::from("b.md")).unwrap();

        assert_eq!(document.display_name(), "b.md");
        assert_eq!(document.content_lines(), ["Body text"]);
    }

    #[test]
    fn test_read_document_accepts_invalid_utf8() {
        let dir = create_test_dir();
        fs::write(dir.path().join("cafe.md"), b"Caf\xe9 menu\n").unwrap();

        let document = read_document(dir.path(), &MarkdownFile::from("cafe.md")).unwrap();

        assert_eq!(document.content_lines(), ["Caf\u{FFFD} menu"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_listed_but_unreadable() {
        let dir = create_test_dir();
        std::os::unix::fs::symlink(dir.path().join("gone.md"), dir.path().join("x.md")).unwrap();

        let files = list_markdown_files(dir.path()).unwrap();
        assert_eq!(names(&files), ["x.md"]);

        let result = read_document(dir.path(), &files[0]);
        assert!(matches!(result, Err(IoError::ReadFile { .. })));
    }

    #[test]
    fn test_read_document_missing_file() {
        let dir = create_test_dir();
        let result = read_document(dir.path(), &MarkdownFile::from("gone.md"));
        let err = result.unwrap_err();
        assert!(matches!(err, IoError::ReadFile { .. }));
        assert!(err.to_string().starts_with("failed to read"));
    }

    #[test]
    fn test_validate_category_dir() {
        let dir = create_test_dir();
        assert!(validate_category_dir(dir.path()).is_ok());
        let file = create_test_file(&dir, "a.md", "a");
        assert!(validate_category_dir(&file).is_err());
    }
}
