//! JSON-LD structured data: a single `@graph` with stable `@id` anchors.
//!
//! Every page carries Organization, LocalBusiness, WebSite and WebPage
//! nodes; a Service or BlogPosting node is added when the logical path has
//! the corresponding shape.

use crate::i18n::LocaleConfig;
use crate::seo::resolver::ResolvedSeo;
use serde_json::{json, Value};

/// Build the JSON-LD graph for one page.
pub fn build_graph(
    origin: &str,
    seo: &ResolvedSeo,
    logical_path: &str,
    locale: &LocaleConfig,
) -> Value {
    let org_id = format!("{}/#organization", origin);
    let business_id = format!("{}/#localbusiness", origin);
    let website_id = format!("{}/#website", origin);
    let webpage_id = format!("{}#webpage", seo.canonical);

    let mut graph = vec![
        json!({
            "@type": "Organization",
            "@id": org_id,
            "name": "Altura Scaffolding",
            "url": origin,
            "logo": format!("{}/images/logo.png", origin),
        }),
        json!({
            "@type": "LocalBusiness",
            "@id": business_id,
            "name": "Altura Scaffolding",
            "url": origin,
            "parentOrganization": { "@id": org_id },
            "address": {
                "@type": "PostalAddress",
                "addressLocality": "Beirut",
                "addressCountry": "LB",
            },
            "areaServed": "LB",
        }),
        json!({
            "@type": "WebSite",
            "@id": website_id,
            "url": origin,
            "name": "Altura Scaffolding",
            "publisher": { "@id": org_id },
        }),
        json!({
            "@type": "WebPage",
            "@id": webpage_id,
            "url": seo.canonical,
            "name": seo.title,
            "description": seo.description,
            "inLanguage": locale.html_lang,
            "isPartOf": { "@id": website_id },
        }),
    ];

    if let Some(node) = service_node(seo, logical_path, &org_id) {
        graph.push(node);
    }
    if let Some(node) = blog_posting_node(seo, locale, &org_id, &webpage_id, logical_path) {
        graph.push(node);
    }

    json!({
        "@context": "https://schema.org",
        "@graph": graph,
    })
}

/// `/services/<single-segment>` pages describe one service.
fn service_node(seo: &ResolvedSeo, logical_path: &str, org_id: &str) -> Option<Value> {
    let mut segments = logical_path.strip_prefix('/')?.split('/');
    if segments.next() != Some("services") {
        return None;
    }
    let slug = segments.next()?;
    if slug.is_empty() || segments.next().is_some() {
        return None;
    }

    Some(json!({
        "@type": "Service",
        "@id": format!("{}#service", seo.canonical),
        "name": seo.title,
        "description": seo.description,
        "provider": { "@id": org_id },
        "serviceType": slug.replace('-', " "),
        "areaServed": "LB",
        "url": seo.canonical,
    }))
}

/// Top-level `/blog-post-*` pages describe one article.
fn blog_posting_node(
    seo: &ResolvedSeo,
    locale: &LocaleConfig,
    org_id: &str,
    webpage_id: &str,
    logical_path: &str,
) -> Option<Value> {
    let first = logical_path.strip_prefix('/')?.split('/').next()?;
    if !first.starts_with("blog-post-") {
        return None;
    }

    Some(json!({
        "@type": "BlogPosting",
        "@id": format!("{}#blogposting", seo.canonical),
        "headline": seo.title,
        "description": seo.description,
        "inLanguage": locale.html_lang,
        "mainEntityOfPage": { "@id": webpage_id },
        "publisher": { "@id": org_id },
        "url": seo.canonical,
    }))
}
