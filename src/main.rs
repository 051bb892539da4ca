mod actions;
mod app;
mod auth;
mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod render;
mod services;
mod state;
mod validation;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    services::{PgStore, RedisViewCache},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    let store = Arc::new(
        PgStore::connect(&config.database)
            .await
            .context("Failed to connect to the database")?,
    );
    if config.database.run_migrations {
        store.migrate().await.context("Failed to run migrations")?;
        tracing::info!("Database migrations applied");
    }

    let redis_client = Arc::new(
        redis::Client::open(config.redis_url()?).context("Failed to open Redis client")?,
    );
    let views = Arc::new(RedisViewCache::new(redis_client, config.cache.view_ttl_seconds));

    let state = AppState::new(store.clone(), store, views);
    let app = app::router(state, &config);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Server running on {}", address);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server stopped unexpectedly")?;

    Ok(())
}
