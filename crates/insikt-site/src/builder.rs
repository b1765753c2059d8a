//! Static site builder.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;

use insikt_content::{ContentStore, Document, DocumentId, StoreError};

use crate::assets::AssetPipeline;
use crate::markdown::render_markdown;
use crate::pages::{map_pages, Page, PageKind};
use crate::seo::{MetaOverrides, PageMeta, SiteMetadata};
use crate::templates::{Card, ContactInfo, PostContext, TemplateEngine};

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source content directory
    pub content_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Site-wide metadata, read once and passed to every render
    pub site: SiteMetadata,

    /// Intro blurb on the listing page
    pub tagline: Option<String>,

    /// Contact page details
    pub contact: ContactInfo,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content/insights"),
            output_dir: PathBuf::from("dist"),
            minify: true,
            site: SiteMetadata {
                title: "insikt".to_string(),
                description: String::new(),
                base_url: "http://localhost:4000".to_string(),
                default_image: "assets/icon.png".to_string(),
            },
            tagline: None,
            contact: ContactInfo::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of document-backed pages among them
    pub posts: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Content scan failed: {0}")]
    Scan(#[from] StoreError),

    #[error("No document for id {0}")]
    MissingDocument(DocumentId),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the site.
    ///
    /// Scans the content store, maps documents to pages, renders every
    /// page, and writes the output tree. A content scan failure aborts
    /// the whole build.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let store = ContentStore::scan(&self.config.content_dir)?;

        let pages = map_pages(&store);

        // Copy post images up front so every render sees the final URLs.
        let image_urls = self.copy_images(&store)?;

        // Pages are independent; render and write them in parallel.
        let results: Vec<Result<(), BuildError>> = pages
            .par_iter()
            .map(|page| self.build_page(page, &store, &image_urls))
            .collect();

        for result in results {
            result?;
        }

        self.write_stylesheet()?;
        self.write_sitemap(&pages)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: pages.len(),
            posts: store.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render one page and write it to its output path.
    fn build_page(
        &self,
        page: &Page,
        store: &ContentStore,
        image_urls: &HashMap<DocumentId, String>,
    ) -> Result<(), BuildError> {
        let site = &self.config.site;

        let html = match &page.kind {
            PageKind::Post(id) => {
                let doc = store
                    .get(id)
                    .ok_or_else(|| BuildError::MissingDocument(id.clone()))?;

                let image = image_urls.get(id).cloned();

                let meta = PageMeta::resolve(
                    site,
                    &page.route,
                    &MetaOverrides {
                        title: Some(doc.title.clone()),
                        description: doc.description.clone(),
                        image: image.clone(),
                    },
                );

                let post = PostContext {
                    title: doc.title.clone(),
                    date: doc.display_date(),
                    minutes: doc.time_to_read.rounded_minutes(),
                    image,
                    content: render_markdown(&doc.body),
                };

                self.templates
                    .render_post(&site.title, &meta, &post)
                    .map_err(|e| BuildError::TemplateError(e.to_string()))?
            }

            PageKind::Listing => {
                let cards: Vec<Card> = store
                    .documents()
                    .iter()
                    .map(|doc| self.card_for(doc, image_urls))
                    .collect();

                let meta = PageMeta::resolve(site, &page.route, &MetaOverrides::default());

                self.templates
                    .render_listing(&site.title, &meta, self.config.tagline.as_deref(), &cards)
                    .map_err(|e| BuildError::TemplateError(e.to_string()))?
            }

            PageKind::Contact => {
                let meta = PageMeta::resolve(
                    site,
                    &page.route,
                    &MetaOverrides {
                        title: Some("Contact".to_string()),
                        ..Default::default()
                    },
                );

                self.templates
                    .render_contact(&site.title, &meta, &self.config.contact)
                    .map_err(|e| BuildError::TemplateError(e.to_string()))?
            }

            PageKind::NotFound => {
                let meta = PageMeta::resolve(
                    site,
                    &page.route,
                    &MetaOverrides {
                        title: Some("Not found".to_string()),
                        ..Default::default()
                    },
                );

                self.templates
                    .render_not_found(&site.title, &meta)
                    .map_err(|e| BuildError::TemplateError(e.to_string()))?
            }
        };

        let output_path = page.output_path(&self.config.output_dir);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Build a listing card from a document.
    fn card_for(&self, doc: &Document, image_urls: &HashMap<DocumentId, String>) -> Card {
        Card {
            title: doc.title.clone(),
            route: format!("{}{}", crate::pages::POST_ROUTE_PREFIX, doc.slug),
            date: doc.display_date(),
            minutes: doc.time_to_read.rounded_minutes(),
            image: image_urls.get(&doc.id).cloned(),
        }
    }

    /// Copy every referenced post image into the assets directory.
    ///
    /// Returns the site-relative URL per document. A copy failure logs a
    /// warning and the page renders without its image.
    fn copy_images(&self, store: &ContentStore) -> Result<HashMap<DocumentId, String>, BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let mut urls = HashMap::new();

        for doc in store.documents() {
            let Some(source) = &doc.image else {
                continue;
            };

            match AssetPipeline::copy_image(source, &assets_dir) {
                Ok(url) => {
                    urls.insert(doc.id.clone(), url);
                }
                Err(e) => {
                    tracing::warn!("Failed to copy image {}: {}", source.display(), e);
                }
            }
        }

        Ok(urls)
    }

    /// Write the site stylesheet.
    fn write_stylesheet(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };

        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Write sitemap.xml and robots.txt.
    fn write_sitemap(&self, pages: &[Page]) -> Result<(), BuildError> {
        let base = self.config.site.base_url.trim_end_matches('/');

        let urls: Vec<String> = pages
            .iter()
            .filter(|p| p.route != "/404")
            .map(|p| {
                let path = if p.route == "/" { "" } else { &p.route };
                format!("  <url>\n    <loc>{}{}</loc>\n  </url>", base, path)
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!("User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml", base);
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}
