//! Markdown body rendering.

use pulldown_cmark::{html, Options, Parser};

/// Render a Markdown body to HTML.
pub fn render_markdown(body: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(body, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}
