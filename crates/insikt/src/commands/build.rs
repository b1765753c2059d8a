//! Site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use insikt_site::{BuildConfig, ContactInfo, SiteBuilder, SiteMetadata};
use serde::Deserialize;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteSection,
    #[serde(default)]
    content: ContentSection,
    #[serde(default)]
    contact: ContactSection,
    #[serde(default)]
    build: BuildSettings,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_url")]
    url: String,
    #[serde(default = "default_image")]
    image: String,
    /// Intro blurb on the listing page
    tagline: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentSection {
    #[serde(default = "default_content_dir")]
    dir: String,
    #[serde(default = "default_output")]
    output: String,
}

#[derive(Debug, Deserialize, Default)]
struct ContactSection {
    email: Option<String>,
    github: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuildSettings {
    #[serde(default = "default_minify")]
    minify: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            url: default_url(),
            image: default_image(),
            tagline: None,
        }
    }
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            output: default_output(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

fn default_title() -> String {
    "My Site".to_string()
}
fn default_url() -> String {
    "http://localhost:4000".to_string()
}
fn default_image() -> String {
    "assets/icon.png".to_string()
}
fn default_content_dir() -> String {
    "content/insights".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load configuration from site.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = load_config(config_path)?;

    let config = BuildConfig {
        content_dir: PathBuf::from(&file_config.content.dir),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.content.output)),
        minify: minify.unwrap_or(file_config.build.minify),
        site: SiteMetadata {
            title: file_config.site.title,
            description: file_config.site.description,
            base_url: file_config.site.url,
            default_image: file_config.site.image,
        },
        tagline: file_config.site.tagline,
        contact: ContactInfo {
            email: file_config.contact.email,
            github: file_config.contact.github,
        },
    };

    let result = SiteBuilder::new(config).build().await?;

    tracing::info!(
        "Built {} pages ({} posts) in {}ms",
        result.pages,
        result.posts,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
