//! Route SEO table: per-route, per-locale metadata and indexability rules.
//!
//! The table is plain data. A built-in table covers the site's routes;
//! deployments can replace it wholesale with a JSON file (`SEO_CONFIG_FILE`)
//! that deserializes into the same shape.

use regex::Regex;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Reserved filter/pagination query parameter names. A query string that
/// contains any of these names followed by `=` forces `noindex,follow`.
pub const DEFAULT_RESERVED_PARAMS: &[&str] = &[
    "sort", "filter", "search", "q", "page", "offset", "limit", "category", "tag",
];

/// Metadata for one route in one locale. All fields optional; resolution
/// falls through the chain in `seo::resolver`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SeoText {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    /// Canonical override, used verbatim when well-formed
    #[serde(default)]
    pub canonical: Option<String>,
    /// Per-locale indexability override
    #[serde(default)]
    pub indexable: Option<bool>,
}

/// SEO configuration for one logical route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteSeo {
    /// Per-locale entries, keyed by locale code
    #[serde(default)]
    pub locales: HashMap<String, SeoText>,

    /// Route-wide indexability (per-locale entries override it)
    #[serde(default)]
    pub indexable: Option<bool>,
}

/// Serde-facing table shape; patterns arrive as strings and are compiled
/// into `SeoTable` by `from_raw`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSeoTable {
    #[serde(default)]
    pub routes: HashMap<String, RouteSeo>,

    /// Global per-locale defaults, keyed by locale code
    #[serde(default)]
    pub locale_defaults: HashMap<String, SeoText>,

    /// Absolute global default; title and description must be present
    pub default: SeoText,

    /// Regexes matched against the logical path; a match forces noindex
    #[serde(default)]
    pub noindex_patterns: Vec<String>,

    /// Overrides the built-in reserved parameter set when present
    #[serde(default)]
    pub reserved_params: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum SeoTableError {
    #[error("failed to read SEO config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse SEO config")]
    Parse(#[from] serde_json::Error),

    #[error("invalid noindex pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// The resolved, ready-to-query SEO table.
#[derive(Debug, Clone)]
pub struct SeoTable {
    routes: HashMap<String, RouteSeo>,
    locale_defaults: HashMap<String, SeoText>,
    default: SeoText,
    noindex_patterns: Vec<Regex>,
    reserved_params: HashSet<String>,
}

impl SeoTable {
    /// Compile a raw table: noindex patterns become regexes, the reserved
    /// parameter set falls back to the built-in list.
    pub fn from_raw(raw: RawSeoTable) -> Result<Self, SeoTableError> {
        let mut noindex_patterns = Vec::with_capacity(raw.noindex_patterns.len());
        for pattern in raw.noindex_patterns {
            let compiled = Regex::new(&pattern).map_err(|source| SeoTableError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            noindex_patterns.push(compiled);
        }

        let reserved_params = raw
            .reserved_params
            .map(|params| params.into_iter().collect())
            .unwrap_or_else(|| {
                DEFAULT_RESERVED_PARAMS
                    .iter()
                    .map(|p| p.to_string())
                    .collect()
            });

        Ok(Self {
            routes: raw.routes,
            locale_defaults: raw.locale_defaults,
            default: raw.default,
            noindex_patterns,
            reserved_params,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, SeoTableError> {
        let raw: RawSeoTable = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_file(path: &str) -> Result<Self, SeoTableError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SeoTableError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn route(&self, logical_path: &str) -> Option<&RouteSeo> {
        self.routes.get(logical_path)
    }

    pub fn locale_default(&self, code: &str) -> Option<&SeoText> {
        self.locale_defaults.get(code)
    }

    pub fn default_text(&self) -> &SeoText {
        &self.default
    }

    /// Whether the logical path matches any noindex pattern.
    pub fn noindex_path(&self, logical_path: &str) -> bool {
        self.noindex_patterns
            .iter()
            .any(|pattern| pattern.is_match(logical_path))
    }

    pub fn noindex_patterns(&self) -> &[Regex] {
        &self.noindex_patterns
    }

    /// Whether the query string carries a reserved filter/pagination
    /// parameter. The name must be followed by `=`; the value is
    /// irrelevant, and a bare name without `=` does not trigger.
    pub fn has_reserved_param(&self, query: &str) -> bool {
        let query = query.strip_prefix('?').unwrap_or(query);
        query.split('&').any(|pair| {
            pair.find('=')
                .map(|idx| self.reserved_params.contains(&pair[..idx]))
                .unwrap_or(false)
        })
    }

    pub fn routes_iter(&self) -> impl Iterator<Item = (&String, &RouteSeo)> {
        self.routes.iter()
    }

    pub fn locale_defaults_iter(&self) -> impl Iterator<Item = (&String, &SeoText)> {
        self.locale_defaults.iter()
    }

    /// The site's built-in table.
    pub fn site_default() -> Self {
        let mut routes = HashMap::new();

        routes.insert(
            "/".to_string(),
            RouteSeo {
                locales: locale_texts(&[
                    (
                        "en",
                        "Altura Scaffolding | Scaffolding & Shoring in Lebanon",
                        "Supply, erection and dismantling of facade, birdcage and suspended scaffolding across Lebanon and the region.",
                    ),
                    (
                        "fr",
                        "Altura Scaffolding | Échafaudages et étaiement au Liban",
                        "Fourniture, montage et démontage d'échafaudages de façade, multidirectionnels et suspendus au Liban et dans la région.",
                    ),
                    (
                        "ar",
                        "ألتورا للسقالات | سقالات ودعائم في لبنان",
                        "توريد وتركيب وفك سقالات الواجهات والسقالات الداخلية والمعلقة في لبنان والمنطقة.",
                    ),
                    (
                        "it",
                        "Altura Scaffolding | Ponteggi e puntellazioni in Libano",
                        "Fornitura, montaggio e smontaggio di ponteggi di facciata, multidirezionali e sospesi in Libano e nella regione.",
                    ),
                ]),
                indexable: None,
            },
        );

        routes.insert(
            "/about".to_string(),
            RouteSeo {
                locales: locale_texts(&[
                    (
                        "en",
                        "About Us | Altura Scaffolding",
                        "Three decades of access and shoring expertise, from residential renovations to industrial plants.",
                    ),
                    (
                        "fr",
                        "À propos | Altura Scaffolding",
                        "Trois décennies d'expertise en accès et étaiement, de la rénovation résidentielle aux sites industriels.",
                    ),
                    (
                        "ar",
                        "من نحن | ألتورا للسقالات",
                        "ثلاثة عقود من الخبرة في أعمال الوصول والدعم، من ترميم المباني السكنية إلى المنشآت الصناعية.",
                    ),
                    (
                        "it",
                        "Chi siamo | Altura Scaffolding",
                        "Tre decenni di esperienza in sistemi di accesso e puntellazione, dal residenziale agli impianti industriali.",
                    ),
                ]),
                indexable: None,
            },
        );

        routes.insert(
            "/services".to_string(),
            RouteSeo {
                locales: locale_texts(&[
                    (
                        "en",
                        "Services | Altura Scaffolding",
                        "Facade scaffolding, birdcage scaffolding, suspended platforms and shoring systems, engineered and certified.",
                    ),
                    (
                        "fr",
                        "Services | Altura Scaffolding",
                        "Échafaudages de façade, multidirectionnels, plateformes suspendues et systèmes d'étaiement, conçus et certifiés.",
                    ),
                    (
                        "ar",
                        "خدماتنا | ألتورا للسقالات",
                        "سقالات واجهات وسقالات داخلية ومنصات معلقة وأنظمة دعم، مصممة هندسياً ومعتمدة.",
                    ),
                    (
                        "it",
                        "Servizi | Altura Scaffolding",
                        "Ponteggi di facciata, multidirezionali, piattaforme sospese e sistemi di puntellazione, progettati e certificati.",
                    ),
                ]),
                indexable: None,
            },
        );

        routes.insert(
            "/services/facade-scaffolding".to_string(),
            RouteSeo {
                locales: locale_texts(&[
                    (
                        "en",
                        "Facade Scaffolding | Altura Scaffolding",
                        "Certified facade scaffolding for new builds, restorations and cladding work, with full engineering support.",
                    ),
                    (
                        "fr",
                        "Échafaudage de façade | Altura Scaffolding",
                        "Échafaudages de façade certifiés pour constructions neuves, restaurations et bardage, avec support d'ingénierie complet.",
                    ),
                ]),
                indexable: None,
            },
        );

        routes.insert(
            "/services/birdcage-scaffolding".to_string(),
            RouteSeo {
                locales: locale_texts(&[(
                    "en",
                    "Birdcage Scaffolding | Altura Scaffolding",
                    "Full-area birdcage access for ceilings, soffits and atria.",
                )]),
                indexable: None,
            },
        );

        routes.insert(
            "/services/suspended-scaffolding".to_string(),
            RouteSeo {
                locales: locale_texts(&[(
                    "en",
                    "Suspended Scaffolding | Altura Scaffolding",
                    "Suspended cradles and platforms for high-rise facades and bridge soffits.",
                )]),
                indexable: None,
            },
        );

        routes.insert(
            "/services/shoring-systems".to_string(),
            RouteSeo {
                locales: locale_texts(&[(
                    "en",
                    "Shoring Systems | Altura Scaffolding",
                    "Heavy-duty propping and back-propping for slabs, beams and temporary works.",
                )]),
                indexable: None,
            },
        );

        routes.insert(
            "/projects".to_string(),
            RouteSeo {
                locales: locale_texts(&[
                    (
                        "en",
                        "Projects | Altura Scaffolding",
                        "A selection of completed scaffolding and shoring projects across Lebanon and the region.",
                    ),
                    (
                        "fr",
                        "Projets | Altura Scaffolding",
                        "Une sélection de projets d'échafaudage et d'étaiement réalisés au Liban et dans la région.",
                    ),
                ]),
                indexable: None,
            },
        );

        routes.insert(
            "/careers".to_string(),
            RouteSeo {
                locales: locale_texts(&[(
                    "en",
                    "Careers | Altura Scaffolding",
                    "Join our crews and engineering teams. Open positions and spontaneous applications.",
                )]),
                indexable: None,
            },
        );

        routes.insert(
            "/gallery".to_string(),
            RouteSeo {
                locales: locale_texts(&[(
                    "en",
                    "Gallery | Altura Scaffolding",
                    "Photos from our sites: facade, birdcage and suspended scaffolding in service.",
                )]),
                indexable: None,
            },
        );

        routes.insert(
            "/privacy-policy".to_string(),
            RouteSeo {
                locales: locale_texts(&[(
                    "en",
                    "Privacy Policy | Altura Scaffolding",
                    "How we handle the personal data you share with us.",
                )]),
                indexable: None,
            },
        );

        routes.insert(
            "/contact".to_string(),
            RouteSeo {
                locales: locale_texts(&[
                    (
                        "en",
                        "Contact | Altura Scaffolding",
                        "Request a quote or a site visit. Offices in Beirut, serving all of Lebanon.",
                    ),
                    (
                        "fr",
                        "Contact | Altura Scaffolding",
                        "Demandez un devis ou une visite de chantier. Bureaux à Beyrouth, au service de tout le Liban.",
                    ),
                ]),
                indexable: None,
            },
        );

        let mut locale_defaults = HashMap::new();
        locale_defaults.insert(
            "en".to_string(),
            text(
                "Altura Scaffolding",
                "Scaffolding and shoring solutions across Lebanon and the region.",
            ),
        );
        locale_defaults.insert(
            "fr".to_string(),
            text(
                "Altura Scaffolding",
                "Solutions d'échafaudage et d'étaiement au Liban et dans la région.",
            ),
        );
        locale_defaults.insert(
            "ar".to_string(),
            text(
                "ألتورا للسقالات",
                "حلول سقالات ودعائم في لبنان والمنطقة.",
            ),
        );
        locale_defaults.insert(
            "it".to_string(),
            text(
                "Altura Scaffolding",
                "Soluzioni di ponteggi e puntellazioni in Libano e nella regione.",
            ),
        );

        let raw = RawSeoTable {
            routes,
            locale_defaults,
            default: text(
                "Altura Scaffolding",
                "Scaffolding and shoring solutions you can build on.",
            ),
            noindex_patterns: vec!["^/thank-you".to_string(), "^/search".to_string()],
            reserved_params: None,
        };

        // The built-in patterns are literals; compilation cannot fail
        Self::from_raw(raw).expect("built-in SEO table must compile")
    }
}

fn text(title: &str, description: &str) -> SeoText {
    SeoText {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        og_image: None,
        canonical: None,
        indexable: None,
    }
}

fn locale_texts(entries: &[(&str, &str, &str)]) -> HashMap<String, SeoText> {
    entries
        .iter()
        .map(|(code, title, description)| (code.to_string(), text(title, description)))
        .collect()
}
