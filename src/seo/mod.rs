//! SEO layer: the route metadata table, the resolver that walks its
//! fallback chains, and the renderers that turn a resolution into head
//! markup and a JSON-LD graph.
//!
//! # Architecture
//!
//! - `config`: the data: per-route/per-locale entries, defaults, noindex
//!   patterns, reserved query parameters; built-in table or JSON file
//! - `validate`: startup validation of a table against the locale registry
//! - `resolver`: pure resolution (title/description chain, indexability,
//!   canonical, hreflang alternates)
//! - `head` / `jsonld`: string and structured-data output

pub mod config;
pub mod head;
pub mod jsonld;
pub mod resolver;
pub mod validate;

pub use config::{RawSeoTable, RouteSeo, SeoTable, SeoTableError, SeoText};
pub use resolver::{Alternate, ResolvedSeo, SeoOverrides, SeoResolver};
pub use validate::{validate_table, ValidationReport};
