//! Head-tag rendering: the boundary between the SEO resolver and the HTML
//! document. Everything here is string assembly; the interesting decisions
//! were already made by `seo::resolver`.

use crate::i18n::LocaleConfig;
use crate::seo::resolver::ResolvedSeo;
use serde_json::Value;

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Attributes for the `<html>` element: `lang` always, `dir="rtl"` only for
/// right-to-left locales.
pub fn html_attrs(locale: &LocaleConfig) -> String {
    if locale.rtl {
        format!(r#"lang="{}" dir="rtl""#, locale.html_lang)
    } else {
        format!(r#"lang="{}""#, locale.html_lang)
    }
}

/// Render the inner head markup for a resolved page.
pub fn render_head(seo: &ResolvedSeo, locale: &LocaleConfig, graph: &Value) -> String {
    let mut head = String::new();

    head.push_str(&format!("<title>{}</title>\n", escape_html(&seo.title)));
    head.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape_html(&seo.description)
    ));
    head.push_str(&format!(
        "<meta name=\"robots\" content=\"{}\">\n",
        seo.robots
    ));
    head.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape_html(&seo.canonical)
    ));

    for alternate in &seo.alternates {
        head.push_str(&format!(
            "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">\n",
            alternate.hreflang,
            escape_html(&alternate.href)
        ));
    }

    head.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        escape_html(&seo.title)
    ));
    head.push_str(&format!(
        "<meta property=\"og:description\" content=\"{}\">\n",
        escape_html(&seo.description)
    ));
    head.push_str(&format!(
        "<meta property=\"og:url\" content=\"{}\">\n",
        escape_html(&seo.canonical)
    ));
    head.push_str("<meta property=\"og:type\" content=\"website\">\n");
    head.push_str(&format!(
        "<meta property=\"og:locale\" content=\"{}\">\n",
        locale.html_lang
    ));
    if let Some(image) = &seo.og_image {
        head.push_str(&format!(
            "<meta property=\"og:image\" content=\"{}\">\n",
            escape_html(image)
        ));
    }

    // serde_json never fails on a Value it produced
    let graph_json = serde_json::to_string(graph).unwrap_or_default();
    head.push_str(&format!(
        "<script type=\"application/ld+json\">{}</script>\n",
        graph_json
    ));

    head
}
