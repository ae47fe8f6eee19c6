use std::sync::Arc;

use moviemate_api::api::{create_router, AppState};
use moviemate_api::config::Config;
use moviemate_api::services::providers::tmdb::TmdbCatalog;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moviemate_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = Arc::new(TmdbCatalog::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.language.clone(),
    ));

    let state = AppState::new(catalog);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "MovieMate API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
