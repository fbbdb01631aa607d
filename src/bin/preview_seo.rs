//! Preview binary - prints the resolved head output for a path without
//! starting the server.
//!
//! Usage:
//!   cargo run --bin preview -- /about
//!   cargo run --bin preview -- /it/servizi "page=2"
//!
//! Optional environment variables:
//! - SITE_ORIGIN (defaults to https://www.alturascaffolding.com)
//! - PUBLIC_BASE_PATH (defaults to "")
//! - ENABLE_ITALIAN (defaults to true)
//! - SEO_CONFIG_FILE (defaults to the built-in table)

use anyhow::{bail, Context, Result};
use altura_site::i18n::{LocaleRegistry, PathResolver, RegistryOptions};
use altura_site::seo::{head, jsonld, SeoResolver, SeoTable};

/// Minimal config for preview (no server or contact endpoint required)
struct PreviewConfig {
    site_origin: String,
    public_base_path: String,
    italian_enabled: bool,
    seo_config_file: Option<String>,
}

impl PreviewConfig {
    fn from_env() -> Self {
        Self {
            site_origin: std::env::var("SITE_ORIGIN")
                .unwrap_or_else(|_| "https://www.alturascaffolding.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            public_base_path: std::env::var("PUBLIC_BASE_PATH").unwrap_or_default(),
            italian_enabled: std::env::var("ENABLE_ITALIAN")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(true),
            seo_config_file: std::env::var("SEO_CONFIG_FILE").ok(),
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(raw_path) = args.first() else {
        bail!("usage: preview <path> [query]");
    };
    let query = args.get(1).map(String::as_str).unwrap_or("");

    let config = PreviewConfig::from_env();
    let registry = LocaleRegistry::new(RegistryOptions {
        italian_enabled: config.italian_enabled,
    });
    let table = match &config.seo_config_file {
        Some(path) => SeoTable::from_file(path)
            .with_context(|| format!("loading SEO table from {}", path))?,
        None => SeoTable::site_default(),
    };

    let resolver = PathResolver::new(&registry, &config.public_base_path);
    let seo_resolver = SeoResolver::new(
        &table,
        &resolver,
        &config.site_origin,
        &config.public_base_path,
    );

    let locale = resolver.locale_from_path(raw_path);
    let logical = resolver.logical_path(raw_path);
    let resolved = seo_resolver.resolve(&logical, locale, query, None);
    let graph = jsonld::build_graph(&config.site_origin, &resolved, &logical, locale);

    println!("path:      {}", raw_path);
    println!("locale:    {} ({})", locale.code, locale.html_lang);
    println!("logical:   {}", logical);
    println!("robots:    {}", resolved.robots);
    println!("canonical: {}", resolved.canonical);
    println!();
    println!("<html {}>", head::html_attrs(locale));
    print!("{}", head::render_head(&resolved, locale, &graph));

    Ok(())
}
