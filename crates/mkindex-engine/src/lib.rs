pub mod index;
pub mod io;
pub mod models;
pub mod title;
pub mod transform;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use index::*;
pub use io::*;
pub use models::{document::*, markdown_file::*};
pub use title::*;
pub use transform::{front_matter::*, headings::*, summary::*};
