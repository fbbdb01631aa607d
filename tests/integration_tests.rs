//! Integration tests for the Altura site server.
//!
//! These tests verify the interaction between the locale routing core, the
//! SEO resolver, and the outward-facing pieces (contact relay, sitemap),
//! plus the property-level round-trip guarantee the whole site leans on.

use std::cell::RefCell;

use proptest::prelude::*;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use altura_site::config::Config;
use altura_site::contact::{self, ContactSubmission};
use altura_site::i18n::{
    redirect_for_visit, LocaleRegistry, LocaleStore, PathResolver, RegistryOptions,
};
use altura_site::seo::{validate_table, SeoResolver, SeoTable};
use altura_site::sitemap;

const ORIGIN: &str = "https://www.alturascaffolding.com";

// ==================== Test Helpers ====================

/// Create a test config pointing the contact relay at a mock server
fn create_test_config(contact_endpoint: &str) -> Config {
    Config {
        site_origin: ORIGIN.to_string(),
        public_base_path: String::new(),
        italian_enabled: true,
        locale_cookie_name: "site_locale".to_string(),
        seo_config_file: None,
        contact_endpoint: contact_endpoint.to_string(),
        port: 8080,
    }
}

fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Rita H".to_string(),
        email: "rita@example.com".to_string(),
        phone: None,
        company: Some("Horizon Developers".to_string()),
        message: "Requesting a quote for shoring a basement excavation.".to_string(),
        locale: Some("fr".to_string()),
    }
}

/// In-memory locale store for preference tests
struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    fn with(code: Option<&str>) -> Self {
        Self {
            value: RefCell::new(code.map(String::from)),
        }
    }
}

impl LocaleStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, code: &str) {
        *self.value.borrow_mut() = Some(code.to_string());
    }
}

// ==================== Locale/SEO Pipeline Tests ====================

#[test]
fn test_full_pipeline_italian_url() {
    let registry = LocaleRegistry::default();
    let resolver = PathResolver::new(&registry, "");
    let table = SeoTable::site_default();
    let seo = SeoResolver::new(&table, &resolver, ORIGIN, "");

    // Inbound localized URL → locale + logical path
    let locale = resolver.locale_from_path("/it/servizi/facade-scaffolding");
    assert_eq!(locale.code, "it");
    let logical = resolver.logical_path("/it/servizi/facade-scaffolding");
    assert_eq!(logical, "/services/facade-scaffolding");

    // Logical path → resolved SEO under that locale
    let resolved = seo.resolve(&logical, locale, "", None);
    assert_eq!(resolved.robots, "index,follow");
    assert_eq!(
        resolved.canonical,
        format!("{}/it/servizi/facade-scaffolding", ORIGIN)
    );
    assert!(resolved
        .alternates
        .iter()
        .any(|a| a.hreflang == "ar-LB" && a.href.contains("/lb/")));
}

#[test]
fn test_full_pipeline_disabled_italian() {
    let registry = LocaleRegistry::new(RegistryOptions {
        italian_enabled: false,
    });
    let resolver = PathResolver::new(&registry, "");

    // The resolver refuses to recognize the disabled prefix
    let locale = resolver.locale_from_path("/it/chi-siamo");
    assert_eq!(locale.code, "en");

    // And never produces URLs under it
    let table = SeoTable::site_default();
    let seo = SeoResolver::new(&table, &resolver, ORIGIN, "");
    let resolved = seo.resolve("/about", locale, "", None);
    assert!(resolved.alternates.iter().all(|a| !a.href.contains("/it/")));
}

#[test]
fn test_pagination_query_suppresses_indexing_end_to_end() {
    let registry = LocaleRegistry::default();
    let resolver = PathResolver::new(&registry, "");
    let table = SeoTable::site_default();
    let seo = SeoResolver::new(&table, &resolver, ORIGIN, "");

    for locale in registry.list_enabled() {
        let resolved = seo.resolve("/projects", locale, "page=2", None);
        assert_eq!(resolved.robots, "noindex,follow");
        // Canonical stays clean
        assert!(!resolved.canonical.contains("page"));
    }
}

#[test]
fn test_site_table_validates_against_default_registry() {
    let registry = LocaleRegistry::default();
    let report = validate_table(&SeoTable::site_default(), &registry);
    assert!(!report.has_errors(), "{:?}", report.errors);
}

// ==================== Round-Trip Property ====================

/// Segments that belong to the localized or prefixed namespace; logical
/// paths never start with these, so the generator avoids them.
const RESERVED_FIRST_SEGMENTS: &[&str] = &[
    "fr",
    "lb",
    "it",
    "en",
    "chi-siamo",
    "servizi",
    "progetti",
    "carriere",
    "galleria",
    "informativa-privacy",
    "contatti",
];

fn logical_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9-]{2,11}", 1..4)
        .prop_filter("first segment must be logical-space", |segments| {
            !RESERVED_FIRST_SEGMENTS.contains(&segments[0].as_str())
                && !segments[0].ends_with('-')
        })
        .prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #[test]
    fn prop_round_trip_holds_for_every_enabled_locale(logical in logical_path_strategy()) {
        let registry = LocaleRegistry::default();
        let resolver = PathResolver::new(&registry, "");

        for locale in registry.list_enabled() {
            let built = resolver.build_path_with_lang(locale, &logical);
            let stripped = resolver.strip_locale_prefix(&built);
            let back = resolver.logical_from_localized(&stripped, locale);
            prop_assert_eq!(&back, &logical, "locale {}", locale.code);

            // And the built path resolves to exactly this locale
            prop_assert_eq!(resolver.locale_from_path(&built).code, locale.code);
        }
    }

    #[test]
    fn prop_trailing_slash_never_changes_resolution(logical in logical_path_strategy()) {
        let registry = LocaleRegistry::default();
        let resolver = PathResolver::new(&registry, "");

        for locale in registry.list_enabled() {
            let built = resolver.build_path_with_lang(locale, &logical);
            let with_slash = format!("{}/", built);
            prop_assert_eq!(
                resolver.locale_from_path(&with_slash).code,
                resolver.locale_from_path(&built).code
            );
            prop_assert_eq!(
                resolver.logical_path(&with_slash),
                resolver.logical_path(&built)
            );
        }
    }
}

// ==================== Preference Store Tests ====================

#[test]
fn test_preference_redirect_matrix() {
    let registry = LocaleRegistry::default();
    let resolver = PathResolver::new(&registry, "");

    // (stored, visited, expected)
    let cases: &[(Option<&str>, &str, Option<&str>)] = &[
        (Some("fr"), "/about", Some("/fr/about")),
        (Some("it"), "/about", Some("/it/chi-siamo")),
        (Some("ar"), "/", Some("/lb")),
        (Some("fr"), "/lb/about", None),
        (Some("en"), "/about", None),
        (Some("de"), "/about", None),
        (None, "/about", None),
    ];

    for (stored, visited, expected) in cases {
        let store = MemoryStore::with(*stored);
        assert_eq!(
            redirect_for_visit(&resolver, &store, visited).as_deref(),
            *expected,
            "stored={:?} visited={}",
            stored,
            visited
        );
    }
}

#[test]
fn test_preference_save_then_redirect_round_trip() {
    let registry = LocaleRegistry::default();
    let resolver = PathResolver::new(&registry, "");
    let store = MemoryStore::with(None);

    // Explicit switch writes the store; the next bare visit honors it
    store.save("ar");
    assert_eq!(
        redirect_for_visit(&resolver, &store, "/projects").as_deref(),
        Some("/lb/projects")
    );
}

// ==================== Contact Relay Tests ====================

#[tokio::test]
async fn test_contact_relay_happy_path() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/submit", mock_server.uri()));
    let client = reqwest::Client::new();

    let result = contact::relay(&client, &config, &valid_submission()).await;
    assert!(result.is_ok(), "{:?}", result);
}

#[tokio::test]
async fn test_contact_relay_retries_server_errors() {
    let mock_server = MockServer::start().await;

    // First two attempts fail with 500, third succeeds
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/submit", mock_server.uri()));
    let client = reqwest::Client::new();

    let result = contact::relay(&client, &config, &valid_submission()).await;
    assert!(result.is_ok(), "{:?}", result);
}

#[tokio::test]
async fn test_contact_relay_does_not_retry_client_errors() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/submit", mock_server.uri()));
    let client = reqwest::Client::new();

    let result = contact::relay(&client, &config, &valid_submission()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_contact_validation_rejects_before_any_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut submission = valid_submission();
    submission.email = "not-an-email".to_string();

    // Validation fails, so no relay should be attempted
    assert!(contact::validate(&submission).is_err());
}

// ==================== SEO Table File Tests ====================

#[test]
fn test_seo_table_loaded_from_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let table_path = temp_dir.path().join("seo.json");
    std::fs::write(
        &table_path,
        r#"{
            "routes": {
                "/about": {
                    "locales": {
                        "fr": { "title": "À propos d'Altura", "description": "Notre histoire" }
                    }
                }
            },
            "locale_defaults": {
                "fr": { "title": "Altura", "description": "Par défaut" }
            },
            "default": { "title": "Altura", "description": "Fallback" },
            "noindex_patterns": ["^/internal/"]
        }"#,
    )
    .expect("write seo table");

    let table = SeoTable::from_file(table_path.to_str().unwrap()).expect("load table");

    let registry = LocaleRegistry::default();
    let resolver = PathResolver::new(&registry, "");
    let seo = SeoResolver::new(&table, &resolver, ORIGIN, "");
    let french = registry.get_by_code("fr").unwrap();

    let resolved = seo.resolve("/about", french, "", None);
    assert_eq!(resolved.title, "À propos d'Altura");

    let resolved = seo.resolve("/internal/tools", french, "", None);
    assert_eq!(resolved.robots, "noindex,follow");
    // Unconfigured route falls to the fr default, not the en entry
    assert_eq!(resolved.title, "Altura");
    assert_eq!(resolved.description, "Par défaut");
}

#[test]
fn test_seo_table_missing_file_is_an_error() {
    let temp_dir = TempDir::new().expect("temp dir");
    let missing = temp_dir.path().join("absent.json");
    assert!(SeoTable::from_file(missing.to_str().unwrap()).is_err());
}

// ==================== Sitemap Tests ====================

#[test]
fn test_sitemap_with_public_base_path() {
    let registry = LocaleRegistry::default();
    let resolver = PathResolver::new(&registry, "/site");
    let table = SeoTable::site_default();
    let seo = SeoResolver::new(&table, &resolver, ORIGIN, "/site");

    let xml = sitemap::render_sitemap(&resolver, &seo);
    assert!(xml.contains(&format!("<loc>{}/site/fr/about</loc>", ORIGIN)));
    assert!(xml.contains(&format!("href=\"{}/site/it/chi-siamo\"", ORIGIN)));

    let robots = sitemap::render_robots_txt(&seo);
    assert!(robots.contains(&format!("Sitemap: {}/site/sitemap.xml", ORIGIN)));
}
