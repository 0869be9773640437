//! Line-level rewrites applied to each document before it is written to the index.

pub mod front_matter;
pub mod headings;
pub mod summary;

pub use front_matter::{front_matter_len, strip_front_matter};
pub use headings::{FenceState, demote_heading, demote_headings};
pub use summary::{escape_html, summarize};
