use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cinematch::catalog;
use cinematch::config::Config;
use cinematch::routes::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = catalog::load_catalog(&config.catalog_path, &config.excluded_country)
        .with_context(|| format!("loading catalog from {}", config.catalog_path))?;

    let state = Arc::new(AppState {
        catalog,
        poster_base_url: config.poster_base_url.clone(),
        recommendation_count: config.recommendation_count,
    });

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
