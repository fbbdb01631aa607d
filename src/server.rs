//! HTTP surface: route registration, the page handler, and the cookie
//! adapter for the locale preference store.
//!
//! The handlers hold no logic of their own beyond wiring: locale and path
//! derivation, SEO resolution and rendering all live in the pure modules.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::Config;
use crate::contact::{self, ContactSubmission};
use crate::i18n::{
    redirect_for_visit, strings_for, LocaleConfig, LocaleRegistry, LocaleStore, LocaleStrings,
    PathResolver,
};
use crate::metrics::SiteMetrics;
use crate::pages;
use crate::seo::{head, jsonld, ResolvedSeo, SeoResolver, SeoTable};
use crate::sitemap;

/// Application shared state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<LocaleRegistry>,
    pub seo_table: Arc<SeoTable>,
    pub http: reqwest::Client,
}

/// Build the complete router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/robots.txt", get(robots_txt))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/api/contact", post(submit_contact))
        .route("/api/locale/:code", get(switch_locale))
        .fallback(render_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ==================== Locale preference cookie ====================

/// Cookie-backed `LocaleStore`. Reads come from the request's Cookie
/// header; writes are buffered and turned into a Set-Cookie header by the
/// switch endpoint.
pub struct CookieLocaleStore {
    cookie_name: String,
    incoming: Option<String>,
    pending: RefCell<Option<String>>,
}

impl CookieLocaleStore {
    pub fn from_headers(cookie_name: &str, headers: &HeaderMap) -> Self {
        let incoming = headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| parse_cookie(raw, cookie_name));
        Self {
            cookie_name: cookie_name.to_string(),
            incoming,
            pending: RefCell::new(None),
        }
    }

    /// The buffered write, if `save` was called.
    pub fn take_pending(&self) -> Option<String> {
        self.pending.borrow_mut().take()
    }

    /// Set-Cookie value persisting a locale choice for a year.
    pub fn set_cookie_value(&self, code: &str) -> String {
        format!(
            "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            self.cookie_name, code
        )
    }
}

impl LocaleStore for CookieLocaleStore {
    fn load(&self) -> Option<String> {
        self.incoming.clone()
    }

    fn save(&self, code: &str) {
        *self.pending.borrow_mut() = Some(code.to_string());
    }
}

/// Extract one cookie's value from a raw Cookie header.
pub fn parse_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

// ==================== Redirect decisions ====================

/// A first segment matching a known-but-disabled locale prefix redirects to
/// the same path with the prefix stripped. The resolver itself never
/// recognizes disabled prefixes; this is where the cleanup happens.
pub fn disabled_locale_redirect(
    registry: &LocaleRegistry,
    resolver: &PathResolver<'_>,
    raw_path: &str,
) -> Option<String> {
    let stripped = resolver.strip_public_base(raw_path);
    let first = stripped
        .strip_prefix('/')
        .unwrap_or(&stripped)
        .split('/')
        .next()
        .unwrap_or("");
    let locale = registry.get_by_prefix_any(first)?;
    if locale.enabled {
        return None;
    }
    let rest = &stripped[1 + first.len()..];
    if rest.is_empty() {
        Some("/".to_string())
    } else {
        Some(rest.to_string())
    }
}

// ==================== Handlers ====================

async fn healthz() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "metrics": SiteMetrics::global().report(),
    }))
}

async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let resolver = PathResolver::new(&state.registry, &state.config.public_base_path);
    let seo = SeoResolver::new(
        &state.seo_table,
        &resolver,
        &state.config.site_origin,
        &state.config.public_base_path,
    );
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::render_robots_txt(&seo),
    )
}

async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let resolver = PathResolver::new(&state.registry, &state.config.public_base_path);
    let seo = SeoResolver::new(
        &state.seo_table,
        &resolver,
        &state.config.site_origin,
        &state.config.public_base_path,
    );
    (
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap::render_sitemap(&resolver, &seo),
    )
}

/// Explicit locale switch: validate the code, persist the choice, redirect
/// to the localized `next` path. This is the only place the preference
/// cookie is ever written.
async fn switch_locale(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let config = &state.config;
    let Some(locale) = state
        .registry
        .get_by_code(&code)
        .filter(|locale| locale.enabled)
    else {
        return (StatusCode::NOT_FOUND, "unknown locale").into_response();
    };

    // `next` must stay an internal logical path
    let next = params.get("next").map(String::as_str).unwrap_or("/");
    let next = if next.starts_with('/') && !next.starts_with("//") && !next.contains("://") {
        next
    } else {
        "/"
    };

    let resolver = PathResolver::new(&state.registry, &config.public_base_path);
    let store = CookieLocaleStore::from_headers(&config.locale_cookie_name, &headers);
    store.save(locale.code);

    let target = format!(
        "{}{}",
        config.public_base_path,
        resolver.build_path_with_lang(locale, next)
    );
    let cookie = store
        .take_pending()
        .map(|code| store.set_cookie_value(&code))
        .unwrap_or_default();

    (
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Redirect::temporary(&target),
    )
        .into_response()
}

async fn submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Response {
    let strings = strings_for(submission.locale.as_deref().unwrap_or("en"));

    if let Err(error) = contact::validate(&submission) {
        SiteMetrics::global().record_contact_failed();
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "ok": false,
                "message": strings.contact_invalid,
                "error": error.to_string(),
            })),
        )
            .into_response();
    }

    match contact::relay(&state.http, &state.config, &submission).await {
        Ok(()) => {
            SiteMetrics::global().record_contact_accepted();
            Json(json!({ "ok": true, "message": strings.contact_sent })).into_response()
        }
        Err(error) => {
            SiteMetrics::global().record_contact_failed();
            warn!("Contact relay failed: {:#}", error);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "ok": false, "message": strings.contact_failed })),
            )
                .into_response()
        }
    }
}

/// Catch-all page handler: redirect decisions first, then locale + SEO
/// resolution, then the HTML shell.
async fn render_page(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let config = &state.config;
    let resolver = PathResolver::new(&state.registry, &config.public_base_path);
    let raw_path = uri.path();

    if let Some(target) = disabled_locale_redirect(&state.registry, &resolver, raw_path) {
        SiteMetrics::global().record_disabled_locale_redirect();
        let location = format!("{}{}", config.public_base_path, target);
        return Redirect::temporary(&location).into_response();
    }

    let store = CookieLocaleStore::from_headers(&config.locale_cookie_name, &headers);
    if let Some(target) = redirect_for_visit(&resolver, &store, raw_path) {
        SiteMetrics::global().record_preference_redirect();
        let location = format!("{}{}", config.public_base_path, target);
        return Redirect::temporary(&location).into_response();
    }

    let locale = resolver.locale_from_path(raw_path);
    let logical = resolver.logical_path(raw_path);
    let known = pages::find(&logical).is_some();

    let seo_resolver = SeoResolver::new(
        &state.seo_table,
        &resolver,
        &config.site_origin,
        &config.public_base_path,
    );
    let resolved = seo_resolver.resolve(&logical, locale, uri.query().unwrap_or(""), None);
    if !resolved.indexable {
        SiteMetrics::global().record_noindex_page();
    }

    let graph = jsonld::build_graph(&config.site_origin, &resolved, &logical, locale);
    let html = render_document(
        &resolver,
        locale,
        &logical,
        &resolved,
        &graph,
        known,
        &config.public_base_path,
    );

    let status = if known {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Html(html)).into_response()
}

// ==================== HTML shell ====================

fn nav_label(strings: &'static LocaleStrings, logical: &str) -> Option<&'static str> {
    match logical {
        "/" => Some(strings.nav_home),
        "/about" => Some(strings.nav_about),
        "/services" => Some(strings.nav_services),
        "/projects" => Some(strings.nav_projects),
        "/careers" => Some(strings.nav_careers),
        "/gallery" => Some(strings.nav_gallery),
        "/contact" => Some(strings.nav_contact),
        _ => None,
    }
}

/// Render the full document. The body is a minimal shell: its job is to
/// carry the head output and the locale-aware navigation.
fn render_document(
    resolver: &PathResolver<'_>,
    locale: &LocaleConfig,
    logical: &str,
    seo: &ResolvedSeo,
    graph: &serde_json::Value,
    known: bool,
    public_base: &str,
) -> String {
    let strings = strings_for(locale.code);
    let head_markup = head::render_head(seo, locale, graph);

    let mut nav = String::new();
    for route in pages::nav_routes() {
        let href = format!(
            "{}{}",
            public_base,
            resolver.localize_href(route.logical, locale)
        );
        let label = nav_label(strings, route.logical).unwrap_or(route.logical);
        nav.push_str(&format!(
            "      <a href=\"{}\">{}</a>\n",
            href,
            head::escape_html(label)
        ));
    }

    let mut switcher = String::new();
    for candidate in resolver.registry().list_enabled() {
        let href = format!("{}/api/locale/{}?next={}", public_base, candidate.code, logical);
        switcher.push_str(&format!(
            "      <a rel=\"nofollow\" href=\"{}\">{}</a>\n",
            href, candidate.native_name
        ));
    }

    let (h1, lead) = if known {
        (seo.title.as_str(), strings.tagline)
    } else {
        (strings.not_found_title, strings.not_found_body)
    };

    let home_href = format!("{}{}", public_base, resolver.localize_href("/", locale));
    let privacy_href = format!(
        "{}{}",
        public_base,
        resolver.localize_href("/privacy-policy", locale)
    );

    format!(
        "<!DOCTYPE html>\n<html {attrs}>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {head}</head>\n<body>\n  <header>\n    <a class=\"brand\" href=\"{home}\">Altura Scaffolding</a>\n    <nav>\n{nav}    </nav>\n    <div class=\"locales\">\n{switcher}    </div>\n  </header>\n  <main>\n    <h1>{h1}</h1>\n    <p>{lead}</p>\n  </main>\n  <footer>\n    <a href=\"{privacy}\">{privacy_label}</a>\n  </footer>\n</body>\n</html>\n",
        attrs = head::html_attrs(locale),
        head = head_markup,
        home = home_href,
        nav = nav,
        switcher = switcher,
        h1 = head::escape_html(h1),
        lead = head::escape_html(lead),
        privacy = privacy_href,
        privacy_label = head::escape_html(strings.privacy_policy),
    )
}
