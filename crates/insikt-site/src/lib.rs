//! Static site builder for the insikt blog.
//!
//! Maps the document set to routable pages, renders them through minijinja
//! templates with per-page SEO metadata, and writes the finished site.

pub mod assets;
pub mod builder;
pub mod markdown;
pub mod pages;
pub mod seo;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use pages::{map_pages, Page, PageKind, POST_ROUTE_PREFIX};
pub use seo::{MetaOverrides, PageMeta, SiteMetadata};
pub use templates::{Card, ContactInfo, PostContext, TemplateEngine};
