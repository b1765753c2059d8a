//! Content model for the insikt blog generator.
//!
//! This crate scans a directory of Markdown posts, parses YAML frontmatter,
//! attaches a computed reading-time estimate, and exposes the immutable
//! document set through the two query shapes the site needs: all documents
//! sorted by date descending, and a single document by id.

pub mod document;
pub mod frontmatter;
pub mod reading_time;
pub mod store;

pub use document::{Document, DocumentId};
pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use reading_time::ReadingTime;
pub use store::{ContentStore, StoreError};
