//! The site's route inventory.
//!
//! Logical paths only; localized URLs are always derived through
//! `i18n::PathResolver`. The table drives the navigation shell, the
//! sitemap, and the 404 decision.

/// One logical route of the site.
#[derive(Debug, Clone, Copy)]
pub struct PageRoute {
    /// Logical path (English-keyed, locale-agnostic)
    pub logical: &'static str,

    /// Shown in the main navigation
    pub nav: bool,

    /// Sitemap change frequency
    pub changefreq: &'static str,

    /// Sitemap priority
    pub priority: &'static str,
}

/// Every page the site serves, in navigation order.
pub const SITE_ROUTES: &[PageRoute] = &[
    PageRoute {
        logical: "/",
        nav: true,
        changefreq: "weekly",
        priority: "1.0",
    },
    PageRoute {
        logical: "/about",
        nav: true,
        changefreq: "monthly",
        priority: "0.8",
    },
    PageRoute {
        logical: "/services",
        nav: true,
        changefreq: "monthly",
        priority: "0.9",
    },
    PageRoute {
        logical: "/services/facade-scaffolding",
        nav: false,
        changefreq: "monthly",
        priority: "0.7",
    },
    PageRoute {
        logical: "/services/birdcage-scaffolding",
        nav: false,
        changefreq: "monthly",
        priority: "0.7",
    },
    PageRoute {
        logical: "/services/suspended-scaffolding",
        nav: false,
        changefreq: "monthly",
        priority: "0.7",
    },
    PageRoute {
        logical: "/services/shoring-systems",
        nav: false,
        changefreq: "monthly",
        priority: "0.7",
    },
    PageRoute {
        logical: "/projects",
        nav: true,
        changefreq: "weekly",
        priority: "0.8",
    },
    PageRoute {
        logical: "/careers",
        nav: true,
        changefreq: "weekly",
        priority: "0.6",
    },
    PageRoute {
        logical: "/gallery",
        nav: true,
        changefreq: "weekly",
        priority: "0.6",
    },
    PageRoute {
        logical: "/privacy-policy",
        nav: false,
        changefreq: "yearly",
        priority: "0.3",
    },
    PageRoute {
        logical: "/contact",
        nav: true,
        changefreq: "yearly",
        priority: "0.8",
    },
];

/// Find a route by its logical path.
pub fn find(logical_path: &str) -> Option<&'static PageRoute> {
    SITE_ROUTES
        .iter()
        .find(|route| route.logical == logical_path)
}

/// The routes shown in the main navigation, in order.
pub fn nav_routes() -> impl Iterator<Item = &'static PageRoute> {
    SITE_ROUTES.iter().filter(|route| route.nav)
}
