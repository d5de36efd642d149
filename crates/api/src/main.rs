use anyhow::Context;

use prodfilter_api::app::{self, AppServices};
use prodfilter_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    prodfilter_observability::init(config.log_format);

    if config.uses_default_catalog() {
        tracing::warn!("CATALOG_URL not set; using the public sample catalog");
    }
    tracing::info!(
        catalog_url = %config.catalog_url,
        timeout_secs = config.catalog_timeout.as_secs(),
        "configuration loaded"
    );

    let services = AppServices::from_config(&config)?;
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
