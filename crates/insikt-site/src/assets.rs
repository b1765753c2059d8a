//! Asset pipeline: the site stylesheet and post image copying.

use std::fs;
use std::path::Path;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the site CSS.
    pub fn generate_css() -> String {
        SITE_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Copy a post image into the assets directory.
    ///
    /// Returns the site-relative URL the page should reference. Images are
    /// copied verbatim; there is no resizing or format conversion.
    pub fn copy_image(source: &Path, assets_dir: &Path) -> Result<String, std::io::Error> {
        let filename = source
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("image");

        fs::copy(source, assets_dir.join(filename))?;

        Ok(format!("/assets/{}", filename))
    }
}

const SITE_CSS: &str = r#"/* insikt site theme */

:root {
  --green: #31573c;
  --green-dark: #21402b;
  --bone: #f5f1e8;
  --off-black: #1a1a1a;
  --content-max-width: 72rem;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--bone);
  color: var(--off-black);
  line-height: 1.6;
}

/* Header */
.site-nav {
  display: flex;
  justify-content: space-between;
  align-items: center;
  background: var(--green);
  color: white;
  padding: 1.5rem 2.5rem;
}

.site-name {
  font-size: 1.25rem;
  color: white;
  text-decoration: none;
}

.site-nav ul {
  display: flex;
  list-style: none;
  gap: 1.5rem;
}

.site-nav a {
  color: white;
  text-decoration: none;
}

/* Listing */
.intro {
  background: var(--green);
  color: white;
  padding: 4rem 2.5rem 1.5rem;
}

.cards {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(24rem, 1fr));
  gap: 4rem;
  padding: 2.5rem;
  max-width: var(--content-max-width);
}

.card-image {
  width: 100%;
  max-height: 20rem;
  object-fit: cover;
  margin-bottom: 1.5rem;
}

.card-meta {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.5rem;
}

.card h1 {
  font-size: 2.25rem;
  font-weight: 400;
  margin-bottom: 1rem;
}

.read-button {
  display: inline-block;
  background: var(--green);
  color: var(--bone);
  padding: 0.75rem 1.5rem 0.5rem;
  text-decoration: none;
  transition: background 0.15s ease-in-out;
}

.read-button:hover {
  background: var(--green-dark);
}

/* Post */
.post {
  display: flex;
  flex-wrap: wrap;
  padding: 2.5rem;
  max-width: var(--content-max-width);
}

.post-header {
  width: 33%;
  padding-right: 4rem;
}

.post-header h1 {
  font-size: 2.25rem;
  font-weight: 400;
  margin-bottom: 2rem;
}

.post-hero {
  width: 100%;
  height: 20rem;
  object-fit: cover;
}

.post-body {
  width: 67%;
}

.post-meta {
  margin-bottom: 2rem;
  line-height: 1.25;
}

.muted {
  opacity: 0.5;
}

.prose {
  max-width: 42rem;
}

.prose h1,
.prose h2,
.prose h3 {
  font-weight: 400;
  margin: 2rem 0 1rem;
}

.prose p,
.prose li {
  font-family: Georgia, serif;
  margin-bottom: 1rem;
}

.prose a {
  color: var(--green);
  text-decoration: underline;
  text-underline-offset: 4px;
}

.prose pre {
  background: var(--off-black);
  color: var(--bone);
  padding: 1rem;
  overflow-x: auto;
  font-size: 0.875rem;
  margin-bottom: 1rem;
}

.prose img {
  max-width: 100%;
}

/* Contact */
.contact {
  background: var(--green);
  color: white;
  padding: 4rem 2.5rem 1.5rem;
  min-height: 100vh;
  font-size: 0.875rem;
}

.contact-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  max-width: 36rem;
  padding-top: 1.5rem;
}

.contact-row .rule {
  height: 1px;
  background: white;
  flex: 1;
  margin: 0 1rem;
}

.contact a {
  color: white;
  text-decoration: underline;
  text-underline-offset: 4px;
}

/* 404 */
.not-found {
  padding: 2.5rem;
}

@media (max-width: 1024px) {
  .post-header,
  .post-body {
    width: 100%;
    padding-right: 0;
  }

  .post-body {
    padding-top: 1.5rem;
  }
}
"#;
