//! Last-selected-locale preference: the one stateful edge of the system.
//!
//! The core resolvers stay pure; this adapter decides, once per visit,
//! whether a bare default-locale URL should redirect to the visitor's
//! previously chosen locale. The store itself is abstract (the server
//! backs it with a cookie, tests with an in-memory mock) and it is written
//! only on explicit locale-switch events, never on page views.

use crate::i18n::routing::PathResolver;

/// Durable client-side storage for the visitor's last explicit locale
/// choice.
pub trait LocaleStore {
    /// The stored locale code, if any.
    fn load(&self) -> Option<String>;

    /// Record an explicit locale choice.
    fn save(&self, code: &str);
}

/// Decide whether an inbound visit should be redirected to the visitor's
/// stored locale.
///
/// Only a bare default-locale URL (no locale prefix) is ever redirected;
/// a URL that already names a locale is an explicit choice and wins over
/// the stored preference. Stored codes that are unknown, disabled, or the
/// default produce no redirect.
pub fn redirect_for_visit(
    resolver: &PathResolver<'_>,
    store: &dyn LocaleStore,
    raw_path: &str,
) -> Option<String> {
    let stripped = resolver.strip_public_base(raw_path);
    let first = stripped
        .strip_prefix('/')
        .unwrap_or(&stripped)
        .split('/')
        .next()
        .unwrap_or("");
    if resolver.registry().get_by_prefix(first).is_some() {
        return None;
    }

    let code = store.load()?;
    let locale = resolver.registry().get_by_code(&code)?;
    if !locale.enabled || locale.is_default {
        return None;
    }

    // Bare URLs are already logical-space (the default locale has no slugs)
    Some(resolver.build_path_with_lang(locale, &stripped))
}
