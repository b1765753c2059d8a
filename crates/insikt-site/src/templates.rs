//! Template engine for rendering site pages.

use minijinja::{context, Environment};

use crate::seo::PageMeta;

/// Context for rendering one post page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PostContext {
    /// Post title
    pub title: String,
    /// Display date (YYYY-MM-DD), omitted when absent
    pub date: Option<String>,
    /// Reading time rounded to whole minutes
    pub minutes: u64,
    /// Site-relative URL of the hero image, omitted when absent
    pub image: Option<String>,
    /// Rendered body HTML
    pub content: String,
}

/// One summary card on the listing page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Card {
    pub title: String,
    /// Route of the post page this card links to
    pub route: String,
    pub date: Option<String>,
    pub minutes: u64,
    pub image: Option<String>,
}

/// Contact details shown on the contact page.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub github: Option<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("post.html".to_string(), POST_TEMPLATE.to_string())
            .expect("Failed to add post template");

        env.add_template_owned("listing.html".to_string(), LISTING_TEMPLATE.to_string())
            .expect("Failed to add listing template");

        env.add_template_owned("contact.html".to_string(), CONTACT_TEMPLATE.to_string())
            .expect("Failed to add contact template");

        env.add_template_owned("404.html".to_string(), NOT_FOUND_TEMPLATE.to_string())
            .expect("Failed to add 404 template");

        Self { env }
    }

    /// Render a post page.
    pub fn render_post(
        &self,
        site_title: &str,
        meta: &PageMeta,
        post: &PostContext,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("post.html")?;

        tmpl.render(context! {
            site_title => site_title,
            meta => meta,
            post => post,
        })
    }

    /// Render the listing page.
    pub fn render_listing(
        &self,
        site_title: &str,
        meta: &PageMeta,
        tagline: Option<&str>,
        cards: &[Card],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("listing.html")?;

        tmpl.render(context! {
            site_title => site_title,
            meta => meta,
            tagline => tagline,
            cards => cards,
        })
    }

    /// Render the contact page.
    pub fn render_contact(
        &self,
        site_title: &str,
        meta: &PageMeta,
        contact: &ContactInfo,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("contact.html")?;

        tmpl.render(context! {
            site_title => site_title,
            meta => meta,
            contact => contact,
        })
    }

    /// Render the 404 fallback page.
    pub fn render_not_found(
        &self,
        site_title: &str,
        meta: &PageMeta,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("404.html")?;

        tmpl.render(context! {
            site_title => site_title,
            meta => meta,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ meta.title }}</title>
  <meta name="description" content="{{ meta.description }}">
  <meta name="image" content="{{ meta.image }}">
  <link rel="canonical" href="{{ meta.url }}">
  <meta name="twitter:card" content="summary_large_image">
  <meta name="twitter:title" content="{{ meta.title }}">
  <meta name="twitter:url" content="{{ meta.url }}">
  <meta name="twitter:description" content="{{ meta.description }}">
  <meta name="twitter:image" content="{{ meta.image }}">
  <link rel="stylesheet" href="/assets/main.css">
</head>
<body>
  <header>
    <nav class="site-nav">
      <a class="site-name" href="/">{{ site_title }}</a>
      <ul>
        <li><a href="/">Blog</a></li>
        <li><a href="/contact">Contact</a></li>
      </ul>
    </nav>
  </header>
  <main>
    {% block content %}{% endblock %}
  </main>
</body>
</html>"##;

const POST_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<div class="post">
  <div class="post-header">
    <h1>{{ post.title }}</h1>
    {% if post.image %}<img class="post-hero" src="{{ post.image }}" alt="Header">{% endif %}
  </div>
  <div class="post-body">
    <div class="post-meta">
      {% if post.date %}<p>{{ post.date }}</p>{% endif %}
      <p class="muted">{{ post.minutes }} minute read</p>
    </div>
    <article class="prose">
      {{ post.content | safe }}
    </article>
  </div>
</div>
{% endblock %}"##;

const LISTING_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% if tagline %}
<div class="intro">
  <p>{{ tagline }}</p>
</div>
{% endif %}
<div class="cards">
{% for card in cards %}
  <div class="card">
    {% if card.image %}<img class="card-image" src="{{ card.image }}" alt="Header">{% endif %}
    <div class="card-meta">
      <p>{{ card.minutes }} minute read</p>
      {% if card.date %}<p>{{ card.date }}</p>{% endif %}
    </div>
    <h1>{{ card.title }}</h1>
    <a class="read-button" href="{{ card.route }}">Read</a>
  </div>
{% endfor %}
</div>
{% endblock %}"##;

const CONTACT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<div class="contact">
  {% if contact.email %}
  <div class="contact-row">
    <p>E-mail</p>
    <div class="rule"></div>
    <p>{{ contact.email }}</p>
  </div>
  {% endif %}
  {% if contact.github %}
  <div class="contact-row">
    <p>GitHub</p>
    <div class="rule"></div>
    <a target="_blank" rel="noreferrer" href="https://github.com/{{ contact.github }}"><p>{{ contact.github }}</p></a>
  </div>
  {% endif %}
</div>
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<div class="not-found">
  <p>404 not found</p>
</div>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::{MetaOverrides, SiteMetadata};

    fn site() -> SiteMetadata {
        SiteMetadata {
            title: "Axel Backlund".to_string(),
            description: "Insights".to_string(),
            base_url: "https://example.se".to_string(),
            default_image: "assets/icon.png".to_string(),
        }
    }

    #[test]
    fn renders_post_with_hero_image() {
        let engine = TemplateEngine::new();
        let site = site();
        let meta = PageMeta::resolve(&site, "/insights/test", &MetaOverrides::default());

        let post = PostContext {
            title: "On heat pumps".to_string(),
            date: Some("2024-03-01".to_string()),
            minutes: 4,
            image: Some("/assets/heat-pump.jpg".to_string()),
            content: "<p>Hello</p>".to_string(),
        };

        let html = engine.render_post(&site.title, &meta, &post).unwrap();

        assert!(html.contains("<h1>On heat pumps</h1>"));
        assert!(html.contains("/assets/heat-pump.jpg"));
        assert!(html.contains("4 minute read"));
        assert!(html.contains("2024-03-01"));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn renders_post_without_hero_image() {
        let engine = TemplateEngine::new();
        let site = site();
        let meta = PageMeta::resolve(&site, "/insights/test", &MetaOverrides::default());

        let post = PostContext {
            title: "No image".to_string(),
            date: None,
            minutes: 1,
            image: None,
            content: String::new(),
        };

        let html = engine.render_post(&site.title, &meta, &post).unwrap();

        assert!(html.contains("<h1>No image</h1>"));
        assert!(!html.contains("post-hero"));
    }

    #[test]
    fn renders_listing_cards_in_order() {
        let engine = TemplateEngine::new();
        let site = site();
        let meta = PageMeta::resolve(&site, "/", &MetaOverrides::default());

        let cards = vec![
            Card {
                title: "Newest".to_string(),
                route: "/insights/newest".to_string(),
                date: Some("2024-03-01".to_string()),
                minutes: 2,
                image: None,
            },
            Card {
                title: "Oldest".to_string(),
                route: "/insights/oldest".to_string(),
                date: Some("2024-01-01".to_string()),
                minutes: 5,
                image: None,
            },
        ];

        let html = engine
            .render_listing(&site.title, &meta, Some("I occasionally post."), &cards)
            .unwrap();

        let newest = html.find("Newest").unwrap();
        let oldest = html.find("Oldest").unwrap();
        assert!(newest < oldest);
        assert!(html.contains("I occasionally post."));
        assert!(html.contains(r#"href="/insights/newest""#));
    }

    #[test]
    fn renders_empty_listing() {
        let engine = TemplateEngine::new();
        let site = site();
        let meta = PageMeta::resolve(&site, "/", &MetaOverrides::default());

        let html = engine.render_listing(&site.title, &meta, None, &[]).unwrap();

        assert!(html.contains("cards"));
        assert!(!html.contains("read-button"));
    }

    #[test]
    fn head_carries_seo_tags() {
        let engine = TemplateEngine::new();
        let site = site();
        let meta = PageMeta::resolve(
            &site,
            "/contact",
            &MetaOverrides {
                title: Some("Contact".to_string()),
                ..Default::default()
            },
        );

        let html = engine
            .render_contact(&site.title, &meta, &ContactInfo::default())
            .unwrap();

        assert!(html.contains("<title>Contact | Axel Backlund</title>"));
        assert!(html.contains(r#"name="twitter:card" content="summary_large_image""#));
        assert!(html.contains(r#"rel="canonical" href="https://example.se/contact""#));
    }

    #[test]
    fn renders_not_found_page() {
        let engine = TemplateEngine::new();
        let site = site();
        let meta = PageMeta::resolve(&site, "/404", &MetaOverrides::default());

        let html = engine.render_not_found(&site.title, &meta).unwrap();

        assert!(html.contains("404 not found"));
    }
}
