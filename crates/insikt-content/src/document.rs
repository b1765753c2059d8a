//! The document model: one blog post with metadata and body.

use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;

use crate::reading_time::ReadingTime;

/// Opaque identifier for a document, unique and stable for one build.
///
/// Internally the content-root-relative source path, but callers should
/// treat it as opaque and only hand it back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(relative_path: impl Into<String>) -> Self {
        Self(relative_path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One blog post, fully resolved and enriched.
///
/// Immutable after the content scan; reading time is attached exactly once
/// during that scan.
#[derive(Debug, Clone)]
pub struct Document {
    /// Stable identifier for this build
    pub id: DocumentId,

    /// URL-path fragment, unique among documents
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date, if any
    pub date: Option<NaiveDate>,

    /// Description for SEO
    pub description: Option<String>,

    /// Absolute path to the header image source file, if any
    pub image: Option<PathBuf>,

    /// Markdown body with frontmatter stripped
    pub body: String,

    /// Computed reading-time estimate
    pub time_to_read: ReadingTime,
}

impl Document {
    /// Date formatted for display (YYYY-MM-DD), if present.
    pub fn display_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(date: Option<NaiveDate>) -> Document {
        Document {
            id: DocumentId::new("insights/test.md"),
            slug: "test".to_string(),
            title: "Test".to_string(),
            date,
            description: None,
            image: None,
            body: String::new(),
            time_to_read: ReadingTime::estimate(""),
        }
    }

    #[test]
    fn formats_display_date() {
        let d = doc(NaiveDate::from_ymd_opt(2024, 3, 1));

        assert_eq!(d.display_date(), Some("2024-03-01".to_string()));
    }

    #[test]
    fn undated_document_has_no_display_date() {
        let d = doc(None);

        assert_eq!(d.display_date(), None);
    }
}
