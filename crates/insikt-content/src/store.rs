//! Content store: scan a directory of posts and answer build-time queries.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::document::{Document, DocumentId};
use crate::frontmatter::{extract_frontmatter, FrontmatterError};
use crate::reading_time::ReadingTime;

/// Errors that can occur while scanning the content directory.
///
/// Any of these aborts the build; there is no partial scan.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Content directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse frontmatter in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        source: FrontmatterError,
    },
}

/// Immutable view over all documents found in one content scan.
///
/// Supports the two query shapes the site issues: all documents sorted by
/// date descending, and a single document by id.
#[derive(Debug)]
pub struct ContentStore {
    /// Documents sorted by date descending, undated last, ties by slug
    documents: Vec<Document>,
    /// Index from id into `documents`
    by_id: HashMap<DocumentId, usize>,
}

impl ContentStore {
    /// Scan a content directory and build the store.
    ///
    /// Walks the directory once, parses every `.md`/`.mdx` file, and
    /// attaches the reading-time estimate. Files without a frontmatter
    /// block are skipped; any read or parse failure is fatal.
    pub fn scan(content_dir: &Path) -> Result<Self, StoreError> {
        if !content_dir.exists() {
            return Err(StoreError::MissingDirectory(content_dir.to_path_buf()));
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" && ext != "mdx" {
                continue;
            }

            let source = fs::read_to_string(path).map_err(|e| StoreError::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

            let (frontmatter, body) =
                extract_frontmatter(&source).map_err(|e| StoreError::Frontmatter {
                    path: path.to_path_buf(),
                    source: e,
                })?;

            let Some(frontmatter) = frontmatter else {
                tracing::debug!("Skipping {} (no frontmatter)", path.display());
                continue;
            };

            let relative = path.strip_prefix(content_dir).unwrap_or(path);
            let id = DocumentId::new(relative.to_string_lossy().to_string());

            let slug = match &frontmatter.slug {
                Some(s) => s.trim_matches('/').to_string(),
                None => slugify_stem(relative),
            };

            // Resolve the image relative to the post file; a missing file
            // just means the post renders without a hero.
            let image = frontmatter.image_path.as_ref().and_then(|rel| {
                let resolved = path.parent().unwrap_or(Path::new("")).join(rel);
                if resolved.exists() {
                    Some(resolved)
                } else {
                    tracing::warn!(
                        "Image not found for {}: {}",
                        path.display(),
                        resolved.display()
                    );
                    None
                }
            });

            documents.push(Document {
                id,
                slug,
                title: frontmatter.title,
                date: frontmatter.date,
                description: frontmatter.description,
                image,
                body: body.to_string(),
                time_to_read: ReadingTime::estimate(body),
            });
        }

        // Most recent first; undated documents sort last; equal dates
        // order by slug so the listing is stable across builds.
        documents.sort_by(|a, b| match (a.date, b.date) {
            (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.slug.cmp(&b.slug)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.slug.cmp(&b.slug),
        });

        let by_id = documents
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();

        tracing::info!(
            "Scanned {} documents from {}",
            documents.len(),
            content_dir.display()
        );

        Ok(Self { documents, by_id })
    }

    /// All documents, sorted by date descending.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Look up a single document by id.
    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.by_id.get(id).map(|&i| &self.documents[i])
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Derive a slug from a file stem.
fn slugify_stem(relative: &Path) -> String {
    let stem = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");

    stem.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
