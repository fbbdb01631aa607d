use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Site identity
    pub site_origin: String,
    pub public_base_path: String,

    // Locales
    pub italian_enabled: bool,
    pub locale_cookie_name: String,

    // SEO
    pub seo_config_file: Option<String>,

    // Contact relay
    pub contact_endpoint: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Site identity
            site_origin: std::env::var("SITE_ORIGIN")
                .unwrap_or_else(|_| "https://www.alturascaffolding.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            public_base_path: normalize_base_path(
                &std::env::var("PUBLIC_BASE_PATH").unwrap_or_default(),
            ),

            // Locales
            italian_enabled: std::env::var("ENABLE_ITALIAN")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(true),
            locale_cookie_name: std::env::var("LOCALE_COOKIE_NAME")
                .unwrap_or_else(|_| "site_locale".to_string()),

            // SEO
            seo_config_file: std::env::var("SEO_CONFIG_FILE").ok(),

            // Contact relay
            contact_endpoint: std::env::var("CONTACT_ENDPOINT")
                .context("CONTACT_ENDPOINT not set")?,

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

/// Normalize a mount prefix to either "" or "/prefix" (leading slash, no
/// trailing slash), so path composition never has to special-case it.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
