//! Locale-aware path routing: locale resolution and path building.
//!
//! Two path spaces exist. The *logical* path is the stable, English-keyed
//! route identifier everything internal is keyed on (`/about`,
//! `/services/facade-scaffolding`). The *localized* path is what the browser
//! sees: the logical path with a locale-specific first-segment slug applied
//! and the locale's URL prefix prepended (`/it/chi-siamo`).
//!
//! Composition order is fixed: strip public base → strip/derive locale →
//! operate on the logical path → re-add the locale prefix. The public base
//! is re-applied by the navigation layer, never here.
//!
//! Every function is a pure function of its inputs. The central invariant,
//! pinned by the tests here and property-tested in the integration suite:
//!
//! `logical_from_localized(strip_locale_prefix(build_path_with_lang(L, P)), L)
//!  == normalize(P)` for every enabled locale L and logical path P.

use crate::i18n::registry::{LocaleConfig, LocaleRegistry};

/// Pure path/locale transforms over a locale registry and the deployment's
/// public base path ("" or "/base", as normalized by `Config`).
pub struct PathResolver<'a> {
    registry: &'a LocaleRegistry,
    public_base: &'a str,
}

impl<'a> PathResolver<'a> {
    pub fn new(registry: &'a LocaleRegistry, public_base: &'a str) -> Self {
        Self {
            registry,
            public_base,
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        self.registry
    }

    /// Normalize to a single leading slash and no trailing slash (except
    /// the bare root `/`).
    pub fn normalize(path: &str) -> String {
        let mut p = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        while p.len() > 1 && p.ends_with('/') {
            p.pop();
        }
        p
    }

    /// Strip the deployment mount prefix from an observed browser path.
    /// Paths outside the mount pass through unchanged.
    pub fn strip_public_base(&self, raw_path: &str) -> String {
        let path = Self::normalize(raw_path);
        if self.public_base.is_empty() {
            return path;
        }
        if path == self.public_base {
            return "/".to_string();
        }
        match path.strip_prefix(self.public_base) {
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => path,
        }
    }

    /// Derive the active locale from a raw browser path.
    ///
    /// Unrecognized, absent, or disabled prefixes all resolve to the default
    /// locale; this never errors. Prefix matching is case-insensitive.
    pub fn locale_from_path(&self, raw_path: &str) -> &'a LocaleConfig {
        let path = self.strip_public_base(raw_path);
        match first_segment(&path).and_then(|seg| self.registry.get_by_prefix(seg)) {
            Some(locale) => locale,
            None => self.registry.default_locale(),
        }
    }

    /// Strip the public base, then the first segment iff it is a recognized
    /// (enabled) locale prefix. An empty remainder becomes `/`.
    pub fn strip_locale_prefix(&self, raw_path: &str) -> String {
        let path = self.strip_public_base(raw_path);
        let Some(seg) = first_segment(&path) else {
            return path;
        };
        if self.registry.get_by_prefix(seg).is_none() {
            return path;
        }
        let rest = &path[1 + seg.len()..];
        if rest.is_empty() {
            "/".to_string()
        } else {
            rest.to_string()
        }
    }

    /// Reverse-map a localized (prefix-free) path back to its logical form
    /// for the given locale. Identity for locales without a slug table and
    /// for segments the table does not know.
    pub fn logical_from_localized(&self, path: &str, locale: &LocaleConfig) -> String {
        let path = Self::normalize(path);
        let Some(seg) = first_segment(&path) else {
            return path;
        };
        let logical = locale.reverse_segment(seg);
        rebuild_first_segment(&path, seg, logical)
    }

    /// Apply the locale's slug table to the first segment of a logical path.
    /// A trailing slash on a non-root input is preserved.
    pub fn localized_from_logical(&self, logical_path: &str, locale: &LocaleConfig) -> String {
        let had_trailing = logical_path.len() > 1 && logical_path.ends_with('/');
        let path = Self::normalize(logical_path);
        let localized = match first_segment(&path) {
            Some(seg) => {
                let translated = locale.translate_segment(seg);
                rebuild_first_segment(&path, seg, translated)
            }
            None => path,
        };
        if had_trailing && localized != "/" {
            format!("{}/", localized)
        } else {
            localized
        }
    }

    /// Build the externally visible path for a locale: slug substitution,
    /// then the locale prefix. The default locale yields the bare display
    /// path with no prefix.
    pub fn build_path_with_lang(&self, locale: &LocaleConfig, logical_path: &str) -> String {
        let display = self.localized_from_logical(logical_path, locale);
        if locale.url_prefix.is_empty() {
            return display;
        }
        if display == "/" {
            format!("/{}", locale.url_prefix)
        } else {
            format!("/{}{}", locale.url_prefix, display)
        }
    }

    /// Derive the logical path from a raw browser path in one step:
    /// strip base, strip the locale prefix, reverse slug translation under
    /// the locale the path itself carries.
    pub fn logical_path(&self, raw_path: &str) -> String {
        let locale = self.locale_from_path(raw_path);
        let stripped = self.strip_locale_prefix(raw_path);
        self.logical_from_localized(&stripped, locale)
    }

    /// Rewrite an application-internal link target so it carries the active
    /// locale. External URLs, anchors, mailto/tel, and protocol-relative
    /// targets pass through untouched.
    pub fn localize_href(&self, href: &str, locale: &LocaleConfig) -> String {
        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("//")
            || href.contains("://")
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
            || !href.starts_with('/')
        {
            return href.to_string();
        }
        self.build_path_with_lang(locale, href)
    }
}

fn first_segment(path: &str) -> Option<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split('/').next().unwrap_or(trimmed))
}

fn rebuild_first_segment(path: &str, old_seg: &str, new_seg: &str) -> String {
    if old_seg == new_seg {
        return path.to_string();
    }
    let rest = &path[1 + old_seg.len()..];
    format!("/{}{}", new_seg, rest)
}
