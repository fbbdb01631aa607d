//! SEO table validation, run once at startup.
//!
//! Errors are misconfigurations that would silently break resolution
//! (unknown locale codes, an unusable global default); warnings are things
//! the resolver already tolerates at runtime but the operator should know
//! about (malformed canonical overrides, entries for disabled locales).

use crate::i18n::LocaleRegistry;
use crate::seo::config::SeoTable;
use crate::seo::resolver::well_formed_canonical;

/// Validation report containing errors and warnings about an SEO table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Misconfigurations that should abort startup
    pub errors: Vec<String>,

    /// Non-critical issues worth logging
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a table against the locale registry.
pub fn validate_table(table: &SeoTable, registry: &LocaleRegistry) -> ValidationReport {
    let mut report = ValidationReport::new();

    let default = table.default_text();
    if default.title.as_deref().unwrap_or("").is_empty() {
        report
            .errors
            .push("global default is missing a title".to_string());
    }
    if default.description.as_deref().unwrap_or("").is_empty() {
        report
            .errors
            .push("global default is missing a description".to_string());
    }

    for (code, _) in table.locale_defaults_iter() {
        check_locale_code(registry, code, "locale_defaults", &mut report);
    }

    for (route, entry) in table.routes_iter() {
        if !route.starts_with('/') {
            report
                .errors
                .push(format!("route key `{}` is not a rooted logical path", route));
        } else if route.len() > 1 && route.ends_with('/') {
            report.warnings.push(format!(
                "route key `{}` has a trailing slash; lookups use normalized paths",
                route
            ));
        }

        for (code, text) in &entry.locales {
            check_locale_code(registry, code, route, &mut report);

            if let Some(canonical) = text.canonical.as_deref() {
                if !well_formed_canonical(canonical) {
                    report.warnings.push(format!(
                        "canonical override `{}` for {} [{}] is malformed and will be ignored",
                        canonical, route, code
                    ));
                }
            }
        }
    }

    report
}

fn check_locale_code(
    registry: &LocaleRegistry,
    code: &str,
    context: &str,
    report: &mut ValidationReport,
) {
    match registry.get_by_code(code) {
        None => report
            .errors
            .push(format!("unknown locale code `{}` in {}", code, context)),
        Some(locale) if !locale.enabled => report.warnings.push(format!(
            "entries for disabled locale `{}` in {} are inert",
            code, context
        )),
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::RegistryOptions;

    fn table(json: &str) -> SeoTable {
        SeoTable::from_json_str(json).expect("test table should parse")
    }

    #[test]
    fn test_site_default_table_is_clean_with_all_locales() {
        let registry = LocaleRegistry::default();
        let report = validate_table(&SeoTable::site_default(), &registry);
        assert!(!report.has_errors(), "errors: {:?}", report.errors);
        assert!(report.is_clean(), "warnings: {:?}", report.warnings);
    }

    #[test]
    fn test_unknown_locale_code_is_an_error() {
        let registry = LocaleRegistry::default();
        let t = table(
            r#"{
            "routes": { "/about": { "locales": { "de": { "title": "Über uns" } } } },
            "default": { "title": "T", "description": "D" }
        }"#,
        );

        let report = validate_table(&t, &registry);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("de"));
    }

    #[test]
    fn test_disabled_locale_entry_is_a_warning() {
        let registry = LocaleRegistry::new(RegistryOptions {
            italian_enabled: false,
        });
        let t = table(
            r#"{
            "routes": { "/about": { "locales": { "it": { "title": "Chi siamo" } } } },
            "default": { "title": "T", "description": "D" }
        }"#,
        );

        let report = validate_table(&t, &registry);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("it"));
    }

    #[test]
    fn test_missing_global_default_is_an_error() {
        let registry = LocaleRegistry::default();
        let t = table(r#"{ "default": { "title": "T" } }"#);

        let report = validate_table(&t, &registry);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("description"));
    }

    #[test]
    fn test_malformed_canonical_is_a_warning() {
        let registry = LocaleRegistry::default();
        let t = table(
            r#"{
            "routes": {
                "/projects": { "locales": { "fr": { "canonical": "ftp://weird" } } }
            },
            "default": { "title": "T", "description": "D" }
        }"#,
        );

        let report = validate_table(&t, &registry);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("canonical"));
    }

    #[test]
    fn test_unrooted_route_key_is_an_error() {
        let registry = LocaleRegistry::default();
        let t = table(
            r#"{
            "routes": { "about": {} },
            "default": { "title": "T", "description": "D" }
        }"#,
        );

        let report = validate_table(&t, &registry);
        assert!(report.has_errors());
    }
}
