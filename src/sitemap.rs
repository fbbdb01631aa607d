//! Sitemap and robots.txt output.
//!
//! One `<url>` per route per enabled locale, each carrying the full set of
//! `xhtml:link` alternates (including `x-default`) so crawlers can connect
//! the locale variants from any entry point.

use crate::i18n::PathResolver;
use crate::pages::SITE_ROUTES;
use crate::seo::SeoResolver;
use chrono::Utc;

/// Render the complete sitemap.
pub fn render_sitemap(paths: &PathResolver<'_>, seo: &SeoResolver<'_>) -> String {
    let lastmod = Utc::now().format("%Y-%m-%d").to_string();

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for route in SITE_ROUTES {
        // Alternate links are identical for every locale variant of a route
        let mut alternates = String::new();
        for locale in paths.registry().list_enabled() {
            alternates.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                locale.html_lang,
                seo.absolute_url(&paths.build_path_with_lang(locale, route.logical))
            ));
        }
        let default = paths.registry().default_locale();
        alternates.push_str(&format!(
            "    <xhtml:link rel=\"alternate\" hreflang=\"x-default\" href=\"{}\"/>\n",
            seo.absolute_url(&paths.build_path_with_lang(default, route.logical))
        ));

        for locale in paths.registry().list_enabled() {
            let loc = seo.absolute_url(&paths.build_path_with_lang(locale, route.logical));
            xml.push_str(&format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
                 <changefreq>{}</changefreq>\n    <priority>{}</priority>\n{}  </url>\n",
                loc, lastmod, route.changefreq, route.priority, alternates
            ));
        }
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Render robots.txt: allow everything, point at the sitemap.
pub fn render_robots_txt(seo: &SeoResolver<'_>) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        seo.absolute_url("/sitemap.xml")
    )
}
