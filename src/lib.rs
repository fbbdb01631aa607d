//! Multi-language marketing site server for Altura Scaffolding.
//!
//! The crate is split into a pure core and a thin HTTP surface:
//!
//! - `i18n`: locale registry, locale-aware path routing, per-locale UI
//!   strings, and the locale-preference adapter.
//! - `seo`: the route SEO table, resolver, head-tag renderer, and JSON-LD
//!   graph builder.
//! - `pages`, `sitemap`: the site's route inventory and the sitemap/robots
//!   output derived from it.
//! - `contact`, `retry`: validated contact-form relay to an external
//!   endpoint, with retry/backoff.
//! - `server`: the axum router tying everything together.
//!
//! Everything under `i18n` and `seo` is a pure function of its inputs; the
//! only durable state in the whole system is the visitor's locale cookie.

pub mod config;
pub mod contact;
pub mod i18n;
pub mod metrics;
pub mod pages;
pub mod retry;
pub mod seo;
pub mod server;
pub mod sitemap;
