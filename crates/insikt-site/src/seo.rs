//! Per-page SEO metadata, combining page overrides with site defaults.

/// Site-wide configuration, read once at startup and passed explicitly to
/// every render. Never mutated.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SiteMetadata {
    /// Site title, used verbatim when a page has no title of its own
    pub title: String,
    /// Default description
    pub description: String,
    /// Canonical base URL, no trailing slash
    pub base_url: String,
    /// Site-relative URL of the default preview image
    pub default_image: String,
}

/// Page-level overrides; anything absent falls back to the site default.
#[derive(Debug, Clone, Default)]
pub struct MetaOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Resolved head metadata for one page.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Absolute URL of the preview image
    pub image: String,
    /// Canonical URL of the page
    pub url: String,
}

impl PageMeta {
    /// Combine page overrides with site defaults.
    ///
    /// An explicit page title is joined with the site title using a fixed
    /// separator; without one the site title is used verbatim.
    pub fn resolve(site: &SiteMetadata, route: &str, overrides: &MetaOverrides) -> Self {
        let title = match &overrides.title {
            Some(page_title) => format!("{} | {}", page_title, site.title),
            None => site.title.clone(),
        };

        let description = overrides
            .description
            .clone()
            .unwrap_or_else(|| site.description.clone());

        let image = overrides
            .image
            .clone()
            .unwrap_or_else(|| site.default_image.clone());

        let base = site.base_url.trim_end_matches('/');
        let path = if route == "/" { "" } else { route };

        Self {
            title,
            description,
            image: format!("{}/{}", base, image.trim_start_matches('/')),
            url: format!("{}{}", base, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteMetadata {
        SiteMetadata {
            title: "Axel Backlund".to_string(),
            description: "Some insights on AI, app development and cleantech".to_string(),
            base_url: "https://www.axelbacklund.se".to_string(),
            default_image: "assets/icon.png".to_string(),
        }
    }

    #[test]
    fn page_title_joins_site_title() {
        let meta = PageMeta::resolve(
            &site(),
            "/contact",
            &MetaOverrides {
                title: Some("Contact".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(meta.title, "Contact | Axel Backlund");
    }

    #[test]
    fn missing_title_uses_site_default_verbatim() {
        let meta = PageMeta::resolve(&site(), "/", &MetaOverrides::default());

        assert_eq!(meta.title, "Axel Backlund");
    }

    #[test]
    fn description_falls_back_to_site_default() {
        let meta = PageMeta::resolve(&site(), "/", &MetaOverrides::default());

        assert_eq!(
            meta.description,
            "Some insights on AI, app development and cleantech"
        );
    }

    #[test]
    fn canonical_url_appends_route() {
        let meta = PageMeta::resolve(&site(), "/insights/heat-pumps", &MetaOverrides::default());

        assert_eq!(meta.url, "https://www.axelbacklund.se/insights/heat-pumps");
    }

    #[test]
    fn root_route_is_bare_base_url() {
        let meta = PageMeta::resolve(&site(), "/", &MetaOverrides::default());

        assert_eq!(meta.url, "https://www.axelbacklund.se");
    }

    #[test]
    fn image_url_is_absolute() {
        let meta = PageMeta::resolve(&site(), "/", &MetaOverrides::default());

        assert_eq!(meta.image, "https://www.axelbacklund.se/assets/icon.png");
    }

    #[test]
    fn overridden_image_is_used() {
        let meta = PageMeta::resolve(
            &site(),
            "/insights/heat-pumps",
            &MetaOverrides {
                image: Some("/assets/heat-pump.jpg".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(
            meta.image,
            "https://www.axelbacklund.se/assets/heat-pump.jpg"
        );
    }
}
