//! Initialize a new site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing insikt site...");

    let content_dir = Path::new("content/insights");

    // Check if content already exists
    if content_dir.exists() {
        if !yes {
            tracing::warn!("content/insights/ already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(content_dir).context("Failed to create content directory")?;
    }

    // Create default config
    let config_path = Path::new("site.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write site.toml")?;
        tracing::info!("Created site.toml");
    }

    // Create sample post
    let post_path = content_dir.join("hello.md");
    if !post_path.exists() || yes {
        fs::write(&post_path, DEFAULT_POST).context("Failed to write hello.md")?;
        tracing::info!("Created content/insights/hello.md");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'insikt build' then 'insikt serve' to preview the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# insikt configuration

[site]
# Site title, used as the default page title
title = "My Site"

# Default description for SEO
description = ""

# Canonical base URL (for deployment)
url = "http://localhost:4000"

# Default preview image
image = "assets/icon.png"

# Intro blurb on the listing page
tagline = "I occasionally post some insights."

[content]
# Source directory for posts
dir = "content/insights"

# Output directory for the built site
output = "dist"

[contact]
# email = "you@example.com"
# github = "yourname"

[build]
# Enable CSS minification
minify = true
"#;

const DEFAULT_POST: &str = r#"---
title: Hello
slug: hello
date: 2024-01-01
---

# Hello

This is your first post. Posts live under `content/insights/` and need
frontmatter with at least a title:

```yaml
---
title: Post Title
slug: post-title
date: 2024-01-01
image_path: ./header.jpg
---
```

The slug becomes the route: this post is served at `/insights/hello`.
"#;
