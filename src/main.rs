use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, warn};

use altura_site::config::Config;
use altura_site::i18n::LocaleRegistry;
use altura_site::seo::{validate_table, SeoTable};
use altura_site::server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("altura_site=info".parse()?),
        )
        .init();

    info!("Starting Altura site server");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Assemble the locale registry
    let registry = LocaleRegistry::from_config(&config);
    let enabled: Vec<&str> = registry
        .list_enabled()
        .iter()
        .map(|locale| locale.code)
        .collect();
    info!("Locales enabled: {}", enabled.join(", "));

    // Load the SEO table (built-in unless a file override is configured)
    let seo_table = match &config.seo_config_file {
        Some(path) => {
            info!("Loading SEO table from {}", path);
            SeoTable::from_file(path)?
        }
        None => SeoTable::site_default(),
    };

    // Validate the table against the registry before serving anything
    let report = validate_table(&seo_table, &registry);
    for warning in &report.warnings {
        warn!("SEO config: {}", warning);
    }
    if report.has_errors() {
        for e in &report.errors {
            error!("SEO config: {}", e);
        }
        anyhow::bail!("SEO configuration is invalid");
    }

    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
        registry: Arc::new(registry),
        seo_table: Arc::new(seo_table),
        http: reqwest::Client::new(),
    };

    let app = build_router(state);
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
