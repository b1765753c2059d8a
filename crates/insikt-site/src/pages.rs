//! Page mapping: one routable page per document, plus the fixed pages.

use std::path::{Path, PathBuf};

use insikt_content::{ContentStore, DocumentId};

/// Route prefix for document-backed pages.
pub const POST_ROUTE_PREFIX: &str = "/insights/";

/// What a page renders as.
///
/// Fixed pages carry no document; a post page carries the document id
/// only, with field resolution deferred to render time.
#[derive(Debug, Clone, PartialEq)]
pub enum PageKind {
    Listing,
    Contact,
    NotFound,
    Post(DocumentId),
}

/// One routable output unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Route path, e.g. `/` or `/insights/heat-pumps`
    pub route: String,
    pub kind: PageKind,
}

impl Page {
    /// Where this page's HTML lands under the output directory.
    ///
    /// `/` becomes `index.html`, `/404` becomes `404.html` (so static
    /// hosts pick it up as the fallback), everything else becomes
    /// `<route>/index.html`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        match self.route.as_str() {
            "/" => output_dir.join("index.html"),
            "/404" => output_dir.join("404.html"),
            route => output_dir.join(route.trim_start_matches('/')).join("index.html"),
        }
    }
}

/// Map the document set to the full page set.
///
/// Produces the three fixed pages plus exactly one page per document, with
/// route = prefix + slug. Duplicate slugs are not diagnosed; the later
/// page overwrites the earlier output file.
pub fn map_pages(store: &ContentStore) -> Vec<Page> {
    let mut pages = vec![
        Page {
            route: "/".to_string(),
            kind: PageKind::Listing,
        },
        Page {
            route: "/contact".to_string(),
            kind: PageKind::Contact,
        },
        Page {
            route: "/404".to_string(),
            kind: PageKind::NotFound,
        },
    ];

    for doc in store.documents() {
        pages.push(Page {
            route: format!("{}{}", POST_ROUTE_PREFIX, doc.slug),
            kind: PageKind::Post(doc.id.clone()),
        });
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn store_with(posts: &[(&str, &str)]) -> ContentStore {
        let temp = tempdir().unwrap();
        for (name, frontmatter) in posts {
            fs::write(
                temp.path().join(name),
                format!("---\n{}\n---\n\nbody", frontmatter),
            )
            .unwrap();
        }
        ContentStore::scan(temp.path()).unwrap()
    }

    #[test]
    fn maps_one_page_per_document_plus_fixed_pages() {
        let store = store_with(&[
            ("a.md", "title: A\nslug: alpha\ndate: 2024-01-01"),
            ("b.md", "title: B\nslug: beta\ndate: 2024-02-01"),
        ]);

        let pages = map_pages(&store);

        assert_eq!(pages.len(), 5);
        assert!(pages.iter().any(|p| p.route == "/"));
        assert!(pages.iter().any(|p| p.route == "/contact"));
        assert!(pages.iter().any(|p| p.route == "/404"));
        assert!(pages.iter().any(|p| p.route == "/insights/alpha"));
        assert!(pages.iter().any(|p| p.route == "/insights/beta"));
    }

    #[test]
    fn distinct_slugs_give_distinct_routes() {
        let store = store_with(&[
            ("a.md", "title: A\nslug: one"),
            ("b.md", "title: B\nslug: two"),
            ("c.md", "title: C\nslug: three"),
        ]);

        let pages = map_pages(&store);
        let mut routes: Vec<_> = pages.iter().map(|p| p.route.clone()).collect();
        let before = routes.len();
        routes.sort();
        routes.dedup();

        assert_eq!(routes.len(), before);
    }

    #[test]
    fn empty_store_maps_only_fixed_pages() {
        let temp = tempdir().unwrap();
        let store = ContentStore::scan(temp.path()).unwrap();

        let pages = map_pages(&store);

        assert_eq!(pages.len(), 3);
    }

    #[test]
    fn output_paths_follow_routes() {
        let out = Path::new("dist");

        let listing = Page {
            route: "/".to_string(),
            kind: PageKind::Listing,
        };
        let not_found = Page {
            route: "/404".to_string(),
            kind: PageKind::NotFound,
        };
        let post = Page {
            route: "/insights/heat-pumps".to_string(),
            kind: PageKind::Contact, // kind is irrelevant to the path
        };

        assert_eq!(listing.output_path(out), Path::new("dist/index.html"));
        assert_eq!(not_found.output_path(out), Path::new("dist/404.html"));
        assert_eq!(
            post.output_path(out),
            Path::new("dist/insights/heat-pumps/index.html")
        );
    }

    #[test]
    fn post_page_carries_document_id_only() {
        let store = store_with(&[("a.md", "title: A\nslug: alpha")]);
        let id = store.documents()[0].id.clone();

        let pages = map_pages(&store);
        let post = pages
            .iter()
            .find(|p| p.route == "/insights/alpha")
            .unwrap();

        assert_eq!(post.kind, PageKind::Post(id));
    }
}
