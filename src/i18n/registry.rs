//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is assembled once at startup from the application config and
//! passed by reference everywhere locale knowledge is needed. Whether a
//! locale is recognized at all is a property of its registry entry, so no
//! feature flag has to be threaded through individual call sites.

use crate::config::Config;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Stable locale identifier ("en", "fr", "ar", "it")
    pub code: &'static str,

    /// External URL prefix ("" for the default locale).
    ///
    /// Note: `ar` deliberately carries the prefix "lb", not "ar". Existing
    /// indexed and bookmarked URLs use `/lb/...`, so the prefix is frozen
    /// even though it diverges from the locale code.
    pub url_prefix: &'static str,

    /// Value for `<html lang>` and hreflang ("en", "fr", "ar-LB", "it")
    pub html_lang: &'static str,

    /// English name of the locale
    pub name: &'static str,

    /// Native name of the locale
    pub native_name: &'static str,

    /// Right-to-left script
    pub rtl: bool,

    /// Whether this is the default (unprefixed, English-keyed) locale
    pub is_default: bool,

    /// Whether this locale is recognized at all
    pub enabled: bool,

    /// Logical-segment → localized-segment table for the first path segment.
    /// Empty for locales that reuse the logical slugs.
    slug_translations: &'static [(&'static str, &'static str)],
}

impl LocaleConfig {
    /// Translate a logical first segment into this locale's slug.
    /// Segments without an entry pass through unchanged.
    pub fn translate_segment<'a>(&self, logical: &'a str) -> &'a str {
        self.slug_translations
            .iter()
            .find(|(from, _)| *from == logical)
            .map(|(_, to)| *to)
            .unwrap_or(logical)
    }

    /// Reverse-map a localized first segment back to its logical form.
    ///
    /// Scans the same table as `translate_segment`, so the two directions
    /// cannot drift apart.
    pub fn reverse_segment<'a>(&self, localized: &'a str) -> &'a str {
        self.slug_translations
            .iter()
            .find(|(_, to)| *to == localized)
            .map(|(from, _)| *from)
            .unwrap_or(localized)
    }

    /// Whether this locale has any slug translations at all.
    pub fn has_slug_translations(&self) -> bool {
        !self.slug_translations.is_empty()
    }
}

/// Options controlling which optional locales the registry recognizes.
#[derive(Debug, Clone, Copy)]
pub struct RegistryOptions {
    pub italian_enabled: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            italian_enabled: true,
        }
    }
}

/// The set of locales the site serves.
///
/// Built once at startup; all lookups are read-only.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Italian slug translations for first path segments.
const ITALIAN_SLUGS: &[(&str, &str)] = &[
    ("about", "chi-siamo"),
    ("services", "servizi"),
    ("projects", "progetti"),
    ("careers", "carriere"),
    ("gallery", "galleria"),
    ("privacy-policy", "informativa-privacy"),
    ("contact", "contatti"),
];

impl LocaleRegistry {
    /// Assemble the registry.
    pub fn new(options: RegistryOptions) -> Self {
        Self {
            locales: vec![
                LocaleConfig {
                    code: "en",
                    url_prefix: "",
                    html_lang: "en",
                    name: "English",
                    native_name: "English",
                    rtl: false,
                    is_default: true,
                    enabled: true,
                    slug_translations: &[],
                },
                LocaleConfig {
                    code: "fr",
                    url_prefix: "fr",
                    html_lang: "fr",
                    name: "French",
                    native_name: "Français",
                    rtl: false,
                    is_default: false,
                    enabled: true,
                    slug_translations: &[],
                },
                LocaleConfig {
                    code: "ar",
                    url_prefix: "lb",
                    html_lang: "ar-LB",
                    name: "Arabic",
                    native_name: "العربية",
                    rtl: true,
                    is_default: false,
                    enabled: true,
                    slug_translations: &[],
                },
                LocaleConfig {
                    code: "it",
                    url_prefix: "it",
                    html_lang: "it",
                    name: "Italian",
                    native_name: "Italiano",
                    rtl: false,
                    is_default: false,
                    enabled: options.italian_enabled,
                    slug_translations: ITALIAN_SLUGS,
                },
            ],
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(RegistryOptions {
            italian_enabled: config.italian_enabled,
        })
    }

    /// Look up a locale by its code, enabled or not.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Look up an enabled locale by its URL prefix, case-insensitively.
    ///
    /// The default locale has the empty prefix and is never returned here;
    /// it is what `default_locale` resolves to when no prefix matches.
    pub fn get_by_prefix(&self, prefix: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| {
            locale.enabled
                && !locale.url_prefix.is_empty()
                && locale.url_prefix.eq_ignore_ascii_case(prefix)
        })
    }

    /// Look up any locale (enabled or disabled) by URL prefix. Used by the
    /// server to recognize disabled-locale URLs that need a redirect.
    pub fn get_by_prefix_any(&self, prefix: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| {
            !locale.url_prefix.is_empty() && locale.url_prefix.eq_ignore_ascii_case(prefix)
        })
    }

    /// The default (unprefixed) locale.
    ///
    /// # Panics
    /// Panics if zero or more than one locale is marked default; the
    /// built-in table guarantees exactly one.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// All enabled locales, in registry order (default first).
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales
            .iter()
            .filter(|locale| locale.enabled)
            .collect()
    }

    /// All locales, including disabled ones.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new(RegistryOptions::default())
    }
}
