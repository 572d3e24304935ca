use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_templates::config::Config;
use resume_templates::content::{ContentGenerator, HttpContentGenerator, NoopContentGenerator};
use resume_templates::enrichment::{Enricher, HttpEnricher, NoopEnricher};
use resume_templates::routes::build_router;
use resume_templates::state::AppState;
use resume_templates::templates::{pools, TemplateEngine};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "resume_templates={level},templates_api={level},tower_http={level}",
                level = config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Templates API v{}", env!("CARGO_PKG_VERSION"));

    // Pool misconfiguration is fatal here, never at request time.
    pools::validate_catalog().context("Template pools failed validation")?;
    info!("Template catalog validated");

    let enricher: Arc<dyn Enricher> = if config.enrichment_enabled {
        let http = HttpEnricher::new(
            config.words_api_url.clone(),
            config.quotes_api_url.clone(),
            config.enrichment_timeout,
        )
        .context("Failed to build enrichment HTTP client")?;
        info!(
            "Enrichment enabled (words: {}, quotes: {}, timeout: {}ms)",
            config.words_api_url,
            config.quotes_api_url,
            config.enrichment_timeout.as_millis()
        );
        Arc::new(http)
    } else {
        warn!("Enrichment disabled; placeholders fall back to their names and content to static text");
        Arc::new(NoopEnricher)
    };

    let content: Arc<dyn ContentGenerator> = if config.enrichment_enabled {
        let http = HttpContentGenerator::new(
            config.content_api_url.clone(),
            config.content_api_token.clone(),
            config.content_timeout,
        )
        .context("Failed to build content generation HTTP client")?;
        info!(
            "Content generation enabled ({}, token: {})",
            config.content_api_url,
            if config.content_api_token.is_some() { "set" } else { "none" }
        );
        Arc::new(http)
    } else {
        Arc::new(NoopContentGenerator)
    };

    let engine = TemplateEngine::new(enricher).with_max_batch_size(config.max_batch_size);

    let state = AppState {
        engine,
        content,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the preview UI host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
