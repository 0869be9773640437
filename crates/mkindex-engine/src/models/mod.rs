pub mod document;
pub mod markdown_file;

pub use document::Document;
pub use markdown_file::MarkdownFile;
