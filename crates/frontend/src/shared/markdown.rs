//! Markdown rendering for assistant replies and analysis reports.
//!
//! The HTML is injected with `inner_html`, so it is always sanitized first.

use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render markdown to HTML without sanitizing.
fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Strip everything outside a small formatting whitelist.
pub fn sanitize_html(html: &str) -> String {
    ammonia::Builder::new()
        .tags(maplit::hashset![
            "p", "br", "hr", "h1", "h2", "h3", "h4", "h5", "h6",
            "ul", "ol", "li", "strong", "em", "b", "i", "del", "code", "pre", "blockquote",
            "table", "thead", "tbody", "tr", "td", "th", "a", "input",
        ])
        .tag_attributes(maplit::hashmap![
            "a" => maplit::hashset!["href", "title"],
            "input" => maplit::hashset!["type", "checked", "disabled"],
        ])
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

pub fn markdown_to_safe_html(content: &str) -> String {
    sanitize_html(&render_markdown(content))
}

#[component]
#[allow(non_snake_case)]
pub fn Markdown(
    #[prop(into)] content: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let html_content = markdown_to_safe_html(&content);
    let full_class = format!("markdown-content {class}");

    view! { <div class=full_class inner_html=html_content /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = markdown_to_safe_html("## Riskler\n\n- **Cezai şart** yüksek");
        assert!(html.contains("<h2>Riskler</h2>"));
        assert!(html.contains("<strong>Cezai şart</strong>"));
    }

    #[test]
    fn test_strips_scripts() {
        let html = markdown_to_safe_html("Merhaba <script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("Merhaba"));
    }

    #[test]
    fn test_strips_event_handlers() {
        let html = markdown_to_safe_html("<p onclick=\"x()\">metin</p>");
        assert!(!html.contains("onclick"));
    }
}
