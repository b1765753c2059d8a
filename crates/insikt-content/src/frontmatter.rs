//! Frontmatter extraction and parsing.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

/// Parsed frontmatter from a post file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Post title (required)
    pub title: String,

    /// Custom slug override; defaults to the slugified file stem
    #[serde(default)]
    pub slug: Option<String>,

    /// Publication date, used for listing order and display
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Post description for SEO
    #[serde(default)]
    pub description: Option<String>,

    /// Header image, relative to the post file
    #[serde(default)]
    pub image_path: Option<PathBuf>,
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: None,
            date: None,
            description: None,
            image_path: None,
        }
    }
}

/// Extract frontmatter from post content.
///
/// Returns the parsed frontmatter and the remaining content after the frontmatter block.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = &after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_valid_frontmatter() {
        let source = r#"---
title: On heat pumps
slug: /heat-pumps
date: 2024-03-01
image_path: ./heat-pump.jpg
---

# Heat pumps
"#;

        let (fm, content) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title, "On heat pumps");
        assert_eq!(fm.slug, Some("/heat-pumps".to_string()));
        assert_eq!(fm.date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(fm.image_path, Some(PathBuf::from("./heat-pump.jpg")));
        assert!(content.starts_with("# Heat pumps"));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let source = "---\ntitle: Bare\n---\n\nBody.";

        let (fm, _) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title, "Bare");
        assert!(fm.slug.is_none());
        assert!(fm.date.is_none());
        assert!(fm.description.is_none());
        assert!(fm.image_path.is_none());
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter here.";

        let (fm, content) = extract_frontmatter(source).unwrap();

        assert!(fm.is_none());
        assert_eq!(content, source);
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let source = "---\ntitle: Test\n# No closing";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let source = "---\ntitle: [invalid yaml\n---\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }

    #[test]
    fn errors_on_bad_date() {
        let source = "---\ntitle: Test\ndate: not-a-date\n---\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }
}
