//! Site metrics and observability.
//!
//! Atomic counters for the few operational events worth watching: locale
//! redirects, pages served with noindex, and contact relay outcomes.
//! Surfaced as JSON on `/healthz`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global site metrics singleton.
pub struct SiteMetrics {
    /// Redirects issued because the URL carried a disabled locale prefix
    disabled_locale_redirects: AtomicUsize,

    /// Redirects issued from the stored locale preference
    preference_redirects: AtomicUsize,

    /// Pages served with `noindex,follow`
    noindex_pages: AtomicUsize,

    /// Contact submissions accepted and relayed
    contact_accepted: AtomicUsize,

    /// Contact submissions that failed validation or relay
    contact_failed: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<SiteMetrics> = OnceLock::new();

impl SiteMetrics {
    /// Get the global site metrics instance.
    pub fn global() -> &'static SiteMetrics {
        METRICS.get_or_init(|| SiteMetrics {
            disabled_locale_redirects: AtomicUsize::new(0),
            preference_redirects: AtomicUsize::new(0),
            noindex_pages: AtomicUsize::new(0),
            contact_accepted: AtomicUsize::new(0),
            contact_failed: AtomicUsize::new(0),
        })
    }

    pub fn record_disabled_locale_redirect(&self) {
        self.disabled_locale_redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_preference_redirect(&self) {
        self.preference_redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_noindex_page(&self) {
        self.noindex_pages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_accepted(&self) {
        self.contact_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_failed(&self) {
        self.contact_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the counters for reporting.
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            disabled_locale_redirects: self.disabled_locale_redirects.load(Ordering::Relaxed),
            preference_redirects: self.preference_redirects.load(Ordering::Relaxed),
            noindex_pages: self.noindex_pages.load(Ordering::Relaxed),
            contact_accepted: self.contact_accepted.load(Ordering::Relaxed),
            contact_failed: self.contact_failed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of the site counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub disabled_locale_redirects: usize,
    pub preference_redirects: usize,
    pub noindex_pages: usize,
    pub contact_accepted: usize,
    pub contact_failed: usize,
}
