//! Internationalization (i18n) module for multi-language support.
//!
//! All locale knowledge lives here: which locales exist and whether they are
//! enabled, how external URL paths map to and from internal logical paths,
//! the per-locale UI strings, and the one stateful edge: the visitor's
//! remembered locale choice.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for supported locales, assembled
//!   once at startup
//! - `routing`: pure locale-resolver and path-builder transforms with
//!   round-trip guarantees
//! - `strings`: per-locale UI strings
//! - `preference`: the locale-preference store trait and redirect decision
//!
//! # Example
//!
//! ```rust,ignore
//! use altura_site::i18n::{LocaleRegistry, PathResolver};
//!
//! let registry = LocaleRegistry::default();
//! let resolver = PathResolver::new(&registry, "");
//!
//! let italian = registry.get_by_code("it").unwrap();
//! assert_eq!(resolver.build_path_with_lang(italian, "/about"), "/it/chi-siamo");
//! assert_eq!(resolver.locale_from_path("/lb/projects").code, "ar");
//! ```

mod preference;
mod registry;
mod routing;
mod strings;

pub use preference::{redirect_for_visit, LocaleStore};
pub use registry::{LocaleConfig, LocaleRegistry, RegistryOptions};
pub use routing::PathResolver;
pub use strings::{strings_for, LocaleStrings};
