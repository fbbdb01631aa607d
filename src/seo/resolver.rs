//! Route SEO resolver: pure table lookup with a fixed fallback chain.
//!
//! Resolution never fails: a route with no entry anywhere still resolves to
//! the absolute global default, and a malformed canonical override falls
//! back to the derived canonical.

use crate::i18n::{LocaleConfig, PathResolver};
use crate::seo::config::{SeoTable, SeoText};

/// Robots values this site is allowed to emit. Non-indexed pages keep
/// `follow` so outbound links stay crawlable.
pub const ROBOTS_INDEX: &str = "index,follow";
pub const ROBOTS_NOINDEX: &str = "noindex,follow";

/// Explicit per-call overrides, the highest-priority link of the chain.
#[derive(Debug, Clone, Default)]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_image: Option<String>,
}

/// One hreflang alternate link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    /// hreflang value ("en", "fr", "ar-LB", "it", or "x-default")
    pub hreflang: String,
    /// Absolute URL
    pub href: String,
}

/// Fully resolved SEO output for one page render.
#[derive(Debug, Clone)]
pub struct ResolvedSeo {
    pub title: String,
    pub description: String,
    pub og_image: Option<String>,
    /// Absolute canonical URL
    pub canonical: String,
    pub indexable: bool,
    /// `index,follow` or `noindex,follow`, nothing else
    pub robots: &'static str,
    /// One entry per enabled locale plus `x-default`
    pub alternates: Vec<Alternate>,
}

pub struct SeoResolver<'a> {
    table: &'a SeoTable,
    paths: &'a PathResolver<'a>,
    origin: &'a str,
    public_base: &'a str,
}

impl<'a> SeoResolver<'a> {
    pub fn new(
        table: &'a SeoTable,
        paths: &'a PathResolver<'a>,
        origin: &'a str,
        public_base: &'a str,
    ) -> Self {
        Self {
            table,
            paths,
            origin,
            public_base,
        }
    }

    /// Resolve the SEO output for a logical path in a locale, given the
    /// request's query string (without or with a leading `?`).
    pub fn resolve(
        &self,
        logical_path: &str,
        locale: &LocaleConfig,
        query: &str,
        overrides: Option<&SeoOverrides>,
    ) -> ResolvedSeo {
        let logical = PathResolver::normalize(logical_path);
        let default_code = self.paths.registry().default_locale().code;

        let route = self.table.route(&logical);
        let route_locale = route.and_then(|r| r.locales.get(locale.code));
        let route_default = route.and_then(|r| r.locales.get(default_code));
        let locale_default = self.table.locale_default(locale.code);
        let global = self.table.default_text();

        // Per-field chain, first non-empty wins; no partial merging beyond it
        let chain = [route_locale, route_default, locale_default, Some(global)];
        let title = pick(
            overrides.and_then(|o| o.title.as_deref()),
            &chain,
            |t| t.title.as_deref(),
        )
        .unwrap_or_default()
        .to_string();
        let description = pick(
            overrides.and_then(|o| o.description.as_deref()),
            &chain,
            |t| t.description.as_deref(),
        )
        .unwrap_or_default()
        .to_string();
        let og_image = pick(
            overrides.and_then(|o| o.og_image.as_deref()),
            &chain,
            |t| t.og_image.as_deref(),
        )
        .map(String::from);

        let indexable = self.resolve_indexable(&logical, locale, query);

        let canonical = self.resolve_canonical(&logical, locale, route_locale);

        let alternates = self.alternates(&logical);

        ResolvedSeo {
            title,
            description,
            og_image,
            canonical,
            indexable,
            robots: if indexable {
                ROBOTS_INDEX
            } else {
                ROBOTS_NOINDEX
            },
            alternates,
        }
    }

    /// Static flag AND no noindex-pattern match AND no reserved query
    /// parameter; all three must hold.
    fn resolve_indexable(&self, logical: &str, locale: &LocaleConfig, query: &str) -> bool {
        let route = self.table.route(logical);
        let static_flag = route
            .and_then(|r| r.locales.get(locale.code).and_then(|t| t.indexable))
            .or_else(|| route.and_then(|r| r.indexable))
            .unwrap_or(true);

        static_flag && !self.table.noindex_path(logical) && !self.table.has_reserved_param(query)
    }

    fn resolve_canonical(
        &self,
        logical: &str,
        locale: &LocaleConfig,
        route_locale: Option<&SeoText>,
    ) -> String {
        if let Some(canonical) = route_locale.and_then(|t| t.canonical.as_deref()) {
            if is_absolute_url(canonical) {
                return canonical.to_string();
            }
            if is_root_relative(canonical) {
                return self.absolute_url(canonical);
            }
            // Malformed override: fall through to the derived canonical
        }
        let display = self.paths.build_path_with_lang(locale, logical);
        self.absolute_url(&display)
    }

    /// hreflang alternates for every enabled locale plus x-default.
    fn alternates(&self, logical: &str) -> Vec<Alternate> {
        let registry = self.paths.registry();
        let mut alternates: Vec<Alternate> = registry
            .list_enabled()
            .into_iter()
            .map(|locale| Alternate {
                hreflang: locale.html_lang.to_string(),
                href: self.absolute_url(&self.paths.build_path_with_lang(locale, logical)),
            })
            .collect();

        let default = registry.default_locale();
        alternates.push(Alternate {
            hreflang: "x-default".to_string(),
            href: self.absolute_url(&self.paths.build_path_with_lang(default, logical)),
        });
        alternates
    }

    /// Make a display path absolute against the site origin, re-applying
    /// the public base the path builder leaves off.
    pub fn absolute_url(&self, display_path: &str) -> String {
        format!("{}{}{}", self.origin, self.public_base, display_path)
    }
}

fn pick<'t>(
    override_value: Option<&'t str>,
    chain: &[Option<&'t SeoText>; 4],
    field: impl Fn(&'t SeoText) -> Option<&'t str>,
) -> Option<&'t str> {
    override_value
        .into_iter()
        .chain(chain.iter().flatten().copied().filter_map(field))
        .find(|value| !value.is_empty())
}

/// Accepted canonical override shapes: absolute http(s) URL or
/// root-relative path. Anything else is treated as absent.
pub(crate) fn well_formed_canonical(s: &str) -> bool {
    is_absolute_url(s) || is_root_relative(s)
}

fn is_absolute_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn is_root_relative(s: &str) -> bool {
    s.starts_with('/') && !s.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleRegistry;
    use crate::seo::config::SeoTable;

    const ORIGIN: &str = "https://www.alturascaffolding.com";

    fn table_json(json: &str) -> SeoTable {
        SeoTable::from_json_str(json).expect("test table should parse")
    }

    fn fixture_table() -> SeoTable {
        table_json(
            r#"{
            "routes": {
                "/about": {
                    "locales": {
                        "en": { "title": "About", "description": "About us" },
                        "fr": { "title": "À propos" }
                    }
                },
                "/services/serviceItem": { "indexable": false },
                "/projects": {
                    "locales": {
                        "fr": { "canonical": "https://mirror.example.com/fr/projets" },
                        "it": { "canonical": "not a url" }
                    }
                }
            },
            "locale_defaults": {
                "en": { "title": "Altura", "description": "EN default" },
                "fr": { "title": "Altura FR", "description": "FR default" }
            },
            "default": { "title": "Altura", "description": "Global default" },
            "noindex_patterns": ["^/thank-you"]
        }"#,
        )
    }

    // ==================== Fallback Chain Tests ====================

    #[test]
    fn test_route_locale_entry_wins() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let english = registry.get_by_code("en").unwrap();

        let resolved = resolver.resolve("/about", english, "", None);
        assert_eq!(resolved.title, "About");
        assert_eq!(resolved.description, "About us");
    }

    #[test]
    fn test_partial_locale_entry_falls_to_default_locale_entry() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let french = registry.get_by_code("fr").unwrap();

        let resolved = resolver.resolve("/about", french, "", None);
        // fr has its own title but no description: the description field
        // falls through to the route's en entry, per-field
        assert_eq!(resolved.title, "À propos");
        assert_eq!(resolved.description, "About us");
    }

    #[test]
    fn test_unconfigured_route_uses_locale_default_not_english() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let french = registry.get_by_code("fr").unwrap();

        let resolved = resolver.resolve("/no-such-route", french, "", None);
        assert_eq!(resolved.title, "Altura FR");
        assert_eq!(resolved.description, "FR default");
    }

    #[test]
    fn test_unconfigured_route_unconfigured_locale_uses_global_default() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let arabic = registry.get_by_code("ar").unwrap();

        let resolved = resolver.resolve("/no-such-route", arabic, "", None);
        assert_eq!(resolved.title, "Altura");
        assert_eq!(resolved.description, "Global default");
        assert!(!resolved.title.is_empty());
    }

    #[test]
    fn test_per_call_override_wins_over_everything() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let english = registry.get_by_code("en").unwrap();

        let overrides = SeoOverrides {
            title: Some("Override".to_string()),
            ..Default::default()
        };
        let resolved = resolver.resolve("/about", english, "", Some(&overrides));
        assert_eq!(resolved.title, "Override");
        assert_eq!(resolved.description, "About us");
    }

    #[test]
    fn test_empty_string_is_not_a_value() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = table_json(
            r#"{
            "routes": {
                "/about": { "locales": { "en": { "title": "" } } }
            },
            "default": { "title": "Fallback", "description": "D" }
        }"#,
        );
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let english = registry.get_by_code("en").unwrap();

        let resolved = resolver.resolve("/about", english, "", None);
        assert_eq!(resolved.title, "Fallback");
    }

    // ==================== Indexability Tests ====================

    #[test]
    fn test_static_flag_forces_noindex_in_every_locale() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");

        for locale in registry.list_enabled() {
            let resolved = resolver.resolve("/services/serviceItem", locale, "", None);
            assert!(!resolved.indexable);
            assert_eq!(resolved.robots, "noindex,follow");
        }
    }

    #[test]
    fn test_reserved_query_param_forces_noindex() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let english = registry.get_by_code("en").unwrap();

        let resolved = resolver.resolve("/about", english, "page=2", None);
        assert!(!resolved.indexable);
        assert_eq!(resolved.robots, "noindex,follow");

        // Without the parameter the same route is indexable
        let resolved = resolver.resolve("/about", english, "", None);
        assert_eq!(resolved.robots, "index,follow");
    }

    #[test]
    fn test_noindex_pattern_forces_noindex() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let english = registry.get_by_code("en").unwrap();

        let resolved = resolver.resolve("/thank-you", english, "", None);
        assert_eq!(resolved.robots, "noindex,follow");
    }

    #[test]
    fn test_robots_never_nofollow() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let english = registry.get_by_code("en").unwrap();

        for (path, query) in [
            ("/about", ""),
            ("/about", "page=2"),
            ("/services/serviceItem", ""),
            ("/thank-you", ""),
        ] {
            let resolved = resolver.resolve(path, english, query, None);
            assert!(
                resolved.robots == "index,follow" || resolved.robots == "noindex,follow",
                "unexpected robots value {}",
                resolved.robots
            );
        }
    }

    // ==================== Canonical Tests ====================

    #[test]
    fn test_derived_canonical_is_absolute_and_localized() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let italian = registry.get_by_code("it").unwrap();

        let resolved = resolver.resolve("/about", italian, "", None);
        assert_eq!(
            resolved.canonical,
            "https://www.alturascaffolding.com/it/chi-siamo"
        );
    }

    #[test]
    fn test_canonical_override_used_verbatim() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let french = registry.get_by_code("fr").unwrap();

        let resolved = resolver.resolve("/projects", french, "", None);
        assert_eq!(resolved.canonical, "https://mirror.example.com/fr/projets");
    }

    #[test]
    fn test_malformed_canonical_override_falls_back_to_derived() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let italian = registry.get_by_code("it").unwrap();

        let resolved = resolver.resolve("/projects", italian, "", None);
        assert_eq!(
            resolved.canonical,
            "https://www.alturascaffolding.com/it/progetti"
        );
    }

    #[test]
    fn test_canonical_ignores_query() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let english = registry.get_by_code("en").unwrap();

        let resolved = resolver.resolve("/about", english, "page=2", None);
        assert_eq!(resolved.canonical, "https://www.alturascaffolding.com/about");
    }

    #[test]
    fn test_canonical_includes_public_base() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "/site");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "/site");
        let french = registry.get_by_code("fr").unwrap();

        let resolved = resolver.resolve("/about", french, "", None);
        assert_eq!(
            resolved.canonical,
            "https://www.alturascaffolding.com/site/fr/about"
        );
    }

    // ==================== Alternates Tests ====================

    #[test]
    fn test_alternates_cover_enabled_locales_plus_x_default() {
        let registry = LocaleRegistry::default();
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let english = registry.get_by_code("en").unwrap();

        let resolved = resolver.resolve("/about", english, "", None);
        let langs: Vec<&str> = resolved
            .alternates
            .iter()
            .map(|a| a.hreflang.as_str())
            .collect();
        assert_eq!(langs, vec!["en", "fr", "ar-LB", "it", "x-default"]);

        let x_default = resolved.alternates.last().unwrap();
        assert_eq!(x_default.href, "https://www.alturascaffolding.com/about");

        let arabic = &resolved.alternates[2];
        assert_eq!(arabic.href, "https://www.alturascaffolding.com/lb/about");
    }

    #[test]
    fn test_alternates_skip_disabled_locale() {
        use crate::i18n::RegistryOptions;

        let registry = LocaleRegistry::new(RegistryOptions {
            italian_enabled: false,
        });
        let paths = PathResolver::new(&registry, "");
        let table = fixture_table();
        let resolver = SeoResolver::new(&table, &paths, ORIGIN, "");
        let english = registry.get_by_code("en").unwrap();

        let resolved = resolver.resolve("/about", english, "", None);
        assert!(resolved.alternates.iter().all(|a| a.hreflang != "it"));
    }
}
